// Projects - two card grids. Cards without a screenshot fall back to
// their category's glyph and gradient.

use leptos::prelude::*;

use crate::components::{BackgroundParticles, BackgroundShapes};
use crate::data::{self, Project};
use crate::theme::use_theme;

const CHIP_COLORS: usize = 4;

/// Rotating accent class for tag chips.
fn chip_class(index: usize) -> String {
    format!("chip chip-accent-{}", index % CHIP_COLORS)
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            class="page projects-page"
            style=move || format!("background: {};", theme.palette().page_gradient)
        >
            <BackgroundParticles/>
            <BackgroundShapes/>

            <div class="container">
                <div class="page-head">
                    <h2 class="page-title gradient-text">"My Projects"</h2>
                    <p class="page-subtitle">"Here are some of the projects I've worked on"</p>
                </div>

                <h3 class="section-title">"Live Projects"</h3>
                <p class="section-subtitle">"Projects that are deployed and actively used"</p>
                <div class="card-grid">
                    {data::LIVE_PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project=*project index=i/> })
                        .collect_view()}
                </div>

                <h3 class="section-title">"Personal Projects"</h3>
                <p class="section-subtitle">"Projects I built for learning, experimentation, or fun"</p>
                <div class="card-grid">
                    {data::PERSONAL_PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project=*project index=i/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let style = project.category.style();
    let stagger = format!("animation-delay: {}ms;", index * 200);

    view! {
        <article class="card project-card reveal" style=stagger>
            <div class="project-media">
                {match (project.image, project.url) {
                    (Some(src), Some(url)) => view! {
                        <a class="project-media-link" href=url target="_blank" rel="noreferrer">
                            <img src=src alt=project.name loading="lazy"/>
                        </a>
                    }
                    .into_any(),
                    (Some(src), None) => view! {
                        <img src=src alt=project.name loading="lazy"/>
                    }
                    .into_any(),
                    (None, _) => view! {
                        <div
                            class="project-placeholder"
                            style=format!("background: {};", style.gradient)
                        >
                            <span class="project-glyph">{style.glyph}</span>
                            <span class="project-placeholder-name">{project.name}</span>
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            <div class="project-body">
                <p class="project-description">{project.description}</p>
                <div class="chip-row">
                    {project
                        .tags
                        .iter()
                        .enumerate()
                        .map(|(i, tag)| view! { <span class=chip_class(i)>{*tag}</span> })
                        .collect_view()}
                </div>
                {project
                    .url
                    .map(|url| {
                        view! {
                            <a class="btn btn-primary btn-small" href=url target="_blank" rel="noreferrer">
                                "Live Demo"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_classes_cycle() {
        assert_eq!(chip_class(0), "chip chip-accent-0");
        assert_eq!(chip_class(3), "chip chip-accent-3");
        assert_eq!(chip_class(4), "chip chip-accent-0");
    }
}
