// Home - hero, rotating role line, skill chips, calls to action,
// social links and the globe.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::{BackgroundParticles, BackgroundShapes};
use crate::data;
use crate::globe::Earth3D;
use crate::routes::{Page, use_page_navigate};
use crate::theme::use_theme;

const ROLE_ROTATE_MS: u64 = 3000;

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let go = use_page_navigate();
    let (role_index, set_role_index) = signal(0usize);

    // Rotate the role line while the page is mounted. If the timer
    // facility is unavailable the line simply stays on the first role.
    if let Ok(handle) = set_interval_with_handle(
        move || set_role_index.update(|i| *i = (*i + 1) % data::HERO_ROLES.len()),
        Duration::from_millis(ROLE_ROTATE_MS),
    ) {
        on_cleanup(move || handle.clear());
    }

    let go_projects = {
        let go = go.clone();
        move |_| go(Page::Projects)
    };
    let go_contact = move |_| go(Page::Contact);

    view! {
        <section
            class="page home-page"
            style=move || format!("background: {};", theme.palette().hero_gradient)
        >
            <BackgroundParticles count=30/>
            <BackgroundShapes/>

            <div class="home-content">
                <div class="profile-disc">
                    {match data::PROFILE_IMAGE {
                        Some(src) => view! {
                            <img class="profile-img" src=src alt="Suraj Singh"/>
                        }
                        .into_any(),
                        None => view! {
                            <span class="profile-monogram">{data::PROFILE_MONOGRAM}</span>
                        }
                        .into_any(),
                    }}
                </div>

                <h1 class="home-title">
                    "Hello, I'm " <span class="gradient-text">"Suraj Singh"</span>
                </h1>

                <p class="home-role">
                    {move || data::HERO_ROLES[role_index.get() % data::HERO_ROLES.len()]}
                </p>

                <p class="home-intro">
                    "I'm a passionate developer from India with a "
                    <strong>"B.Voc in Software Development (7.8 CGPA)"</strong>
                    ". I have 2.5 years of web development experience, working with modern \
                     technologies to create scalable and impactful digital solutions."
                </p>

                <div class="chip-row">
                    {data::HERO_CHIPS
                        .iter()
                        .enumerate()
                        .map(|(i, chip)| {
                            let style = format!("animation-delay: {}ms;", i * 100);
                            view! {
                                <span class="chip reveal" style=style>
                                    <span class="chip-glyph">{chip.glyph}</span>
                                    {chip.label}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="cta-row">
                    <button class="btn btn-primary" on:click=go_projects>
                        "🚀 View My Work"
                    </button>
                    <button class="btn btn-outline" on:click=go_contact>
                        "✉ Get In Touch"
                    </button>
                </div>

                <div class="social-row">
                    {data::SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="social-btn"
                                    href=link.href
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label=link.label
                                >
                                    {link.glyph}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Earth3D/>
        </section>
    }
}
