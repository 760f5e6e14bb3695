// About - skill categories with level bars, experience timeline,
// education and certifications.

use leptos::prelude::*;

use crate::components::BackgroundShapes;
use crate::data;
use crate::theme::use_theme;

#[component]
pub fn AboutPage() -> impl IntoView {
    let theme = use_theme();
    let (active_group, set_active_group) = signal(0usize);

    view! {
        <section
            class="page about-page"
            style=move || format!("background: {};", theme.palette().page_gradient)
        >
            <BackgroundShapes/>

            <div class="container">
                <h2 class="page-title gradient-text">"About Me"</h2>

                <div class="skills-card">
                    <div class="tab-row">
                        {data::SKILL_GROUPS
                            .iter()
                            .enumerate()
                            .map(|(i, group)| {
                                let tab_class = move || {
                                    if active_group.get() == i { "tab active" } else { "tab" }
                                };
                                view! {
                                    <button class=tab_class on:click=move |_| set_active_group.set(i)>
                                        <span class="tab-glyph">{group.glyph}</span>
                                        {group.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || {
                        let group = &data::SKILL_GROUPS[active_group.get() % data::SKILL_GROUPS.len()];
                        group
                            .skills
                            .iter()
                            .map(|skill| {
                                let width = format!("width: {}%;", skill.level);
                                view! {
                                    <div class="skill-row">
                                        <span class="skill-name">{skill.name}</span>
                                        <div class="skill-track">
                                            <div class="skill-bar" style=width></div>
                                        </div>
                                        <span class="skill-level">{skill.level} "%"</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <h3 class="section-title">"Experience"</h3>
                <div class="timeline">
                    {data::EXPERIENCES
                        .iter()
                        .map(|exp| {
                            view! {
                                <article class="timeline-entry">
                                    <div class="timeline-dot"></div>
                                    <div class="timeline-card">
                                        <h4 class="timeline-role">{exp.role}</h4>
                                        <p class="timeline-company">{exp.company}</p>
                                        <p class="timeline-period">{exp.period}</p>
                                        <ul class="timeline-achievements">
                                            {exp.achievements
                                                .iter()
                                                .map(|a| view! { <li>{*a}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="section-title">"Education"</h3>
                <div class="card-grid edu-grid">
                    {data::EDUCATION
                        .iter()
                        .map(|edu| {
                            view! {
                                <div class="card edu-card">
                                    <h4>{edu.degree}</h4>
                                    <p class="edu-institution">{edu.institution}</p>
                                    <p class="edu-period">{edu.period}</p>
                                    <p class="edu-details">{edu.details}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="section-title">"Certifications"</h3>
                <div class="cert-row">
                    {data::CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class="card cert-card">
                                    <span class="cert-glyph">"🏅"</span>
                                    <div>
                                        <p class="cert-name">{cert.name}</p>
                                        <p class="cert-issuer">{cert.issuer} " · " {cert.year}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
