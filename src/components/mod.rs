mod header;
mod particles;

pub use header::Header;
pub use particles::{BackgroundParticles, BackgroundShapes};
