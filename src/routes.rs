// Route coordinator - single source of truth for "which page is active".

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

/// The four pages of the site, in nav order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

/// What a raw URL path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// One of the four canonical paths.
    Current(Page),
    /// Anything else - the address gets rewritten to `/`.
    RedirectHome,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    /// Canonical URL path for this page.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Contact => "/contact",
        }
    }

    /// Inverse of [`Page::path`]. `None` for non-canonical input.
    pub fn from_path(path: &str) -> Option<Page> {
        match path {
            "/" => Some(Page::Home),
            "/about" => Some(Page::About),
            "/projects" => Some(Page::Projects),
            "/contact" => Some(Page::Contact),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }

    /// Small decorative glyph for nav buttons and the drawer.
    pub fn glyph(self) -> &'static str {
        match self {
            Page::Home => "⌂",
            Page::About => "☺",
            Page::Projects => "⚒",
            Page::Contact => "✉",
        }
    }
}

/// Map a raw path to route state. Unknown paths are never an error,
/// they resolve to a redirect.
pub fn resolve(path: &str) -> Resolution {
    match Page::from_path(path) {
        Some(page) => Resolution::Current(page),
        None => Resolution::RedirectHome,
    }
}

/// Reactive current page, derived from the router location.
/// While an unknown path is being rewritten this already reads as Home.
pub fn use_current_page() -> Memo<Page> {
    let location = use_location();
    Memo::new(move |_| match resolve(&location.pathname.get()) {
        Resolution::Current(page) => page,
        Resolution::RedirectHome => Page::Home,
    })
}

/// Typed navigation action. Pages and the header call this instead of
/// touching the URL themselves.
pub fn use_page_navigate() -> impl Fn(Page) + Clone {
    let navigate = use_navigate();
    move |page: Page| navigate(page.path(), NavigateOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path_round_trips_for_all_pages() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn canonical_paths_resolve_to_their_page() {
        assert_eq!(resolve("/"), Resolution::Current(Page::Home));
        assert_eq!(resolve("/about"), Resolution::Current(Page::About));
        assert_eq!(resolve("/projects"), Resolution::Current(Page::Projects));
        assert_eq!(resolve("/contact"), Resolution::Current(Page::Contact));
    }

    #[test]
    fn unknown_paths_redirect_home() {
        assert_eq!(resolve("/unknown"), Resolution::RedirectHome);
        assert_eq!(resolve("/about/"), Resolution::RedirectHome);
        assert_eq!(resolve(""), Resolution::RedirectHome);
        assert_eq!(resolve("/Projects"), Resolution::RedirectHome);
    }

    #[test]
    fn home_is_the_root_path() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::ALL[0], Page::Home);
    }

    #[test]
    fn labels_are_unique() {
        for a in Page::ALL {
            for b in Page::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
