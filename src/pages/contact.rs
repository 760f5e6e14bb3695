// Contact - method cards with brand accents plus a personal-info panel.

use leptos::prelude::*;

use crate::components::{BackgroundParticles, BackgroundShapes};
use crate::data;
use crate::theme::use_theme;

const INSTAGRAM_GRADIENT: &str =
    "linear-gradient(45deg, #feda75, #fa7e1e, #d62976, #962fbf, #4f5bd5)";

/// Background for a method's glyph disc. An empty accent means the
/// brand wants its gradient, not a flat color.
fn accent_style(accent: &str) -> String {
    if accent.is_empty() {
        format!("background: {INSTAGRAM_GRADIENT};")
    } else {
        format!("background: {accent};")
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            class="page contact-page"
            style=move || format!("background: {};", theme.palette().page_gradient)
        >
            <BackgroundParticles/>
            <BackgroundShapes/>

            <div class="container">
                <div class="page-head">
                    <h2 class="page-title gradient-text">"Get In Touch"</h2>
                    <p class="page-subtitle">
                        "Have a project in mind or just want to say hello? Reach out on any of these."
                    </p>
                </div>

                <div class="card-grid contact-grid">
                    {data::CONTACT_METHODS
                        .iter()
                        .map(|method| {
                            view! {
                                <a
                                    class="card contact-card"
                                    href=method.href
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    <span class="contact-glyph" style=accent_style(method.accent)>
                                        {method.glyph}
                                    </span>
                                    <span class="contact-label">{method.label}</span>
                                    <span class="contact-text">{method.text}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="card info-panel">
                    {data::PERSONAL_INFO
                        .iter()
                        .map(|info| {
                            view! {
                                <div class="info-row">
                                    <span class="info-glyph">{info.glyph}</span>
                                    <span class="info-label">{info.label}</span>
                                    <span class="info-text">{info.text}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_accents_pass_through() {
        assert_eq!(accent_style("#EA4335"), "background: #EA4335;");
    }

    #[test]
    fn empty_accent_falls_back_to_the_gradient() {
        assert!(accent_style("").contains("linear-gradient"));
    }
}
