mod about;
mod contact;
mod home;
mod projects;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use projects::ProjectsPage;
