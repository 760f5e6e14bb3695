// Decorative background layers. Placement is deterministic pseudo-random
// so the components stay pure; the motion itself lives in CSS keyframes.

use leptos::prelude::*;

/// Hash a seed into [0, 1). xorshift, stable across renders.
fn unit(seed: u32) -> f64 {
    let mut x = seed.wrapping_mul(0x9E37_79B9).wrapping_add(1);
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    f64::from(x >> 8) / f64::from(1u32 << 24)
}

#[component]
pub fn BackgroundParticles(#[prop(default = 25)] count: u32) -> impl IntoView {
    view! {
        <div class="particle-layer" aria-hidden="true">
            {(0..count)
                .map(|i| {
                    let size = 3.0 + unit(i) * 6.0;
                    let top = unit(i.wrapping_add(101)) * 100.0;
                    let left = unit(i.wrapping_add(211)) * 100.0;
                    let delay = unit(i.wrapping_add(307)) * 5.0;
                    let duration = 5.0 + unit(i.wrapping_add(401)) * 10.0;
                    let style = format!(
                        "width: {size:.1}px; height: {size:.1}px; top: {top:.1}%; \
                         left: {left:.1}%; animation-delay: {delay:.2}s; \
                         animation-duration: {duration:.2}s;"
                    );
                    view! { <span class="particle" style=style></span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn BackgroundShapes() -> impl IntoView {
    view! {
        <div class="shape-layer" aria-hidden="true">
            {(0..3u32)
                .map(|i| {
                    let size = 150 + i * 50;
                    let spin = if i % 2 == 0 { "shape spin-cw" } else { "shape spin-ccw" };
                    let style = format!(
                        "width: {size}px; height: {size}px; top: {}%; left: {}%; \
                         animation-duration: {}s;",
                        10 + i * 20,
                        i * 30,
                        20 + i * 5,
                    );
                    view! { <span class=spin style=style></span> }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_stays_in_range() {
        for seed in 0..1000 {
            let value = unit(seed);
            assert!((0.0..1.0).contains(&value), "seed {seed} gave {value}");
        }
    }

    #[test]
    fn unit_is_deterministic() {
        assert_eq!(unit(42), unit(42));
    }

    #[test]
    fn unit_actually_scatters() {
        let a = unit(1);
        let b = unit(2);
        assert!((a - b).abs() > f64::EPSILON);
    }
}
