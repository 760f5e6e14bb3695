// Fixed header: brand mark, the four destinations, theme toggle.
// On narrow viewports the destinations collapse into a drawer overlay.
// The drawer boolean lives here; every navigation out of the header -
// brand, desktop nav, drawer item - goes through one callback that
// closes it, since the panel has no backdrop and the header stays
// clickable while it is open.

use leptos::prelude::*;

use crate::routes::{Page, use_current_page, use_page_navigate};
use crate::theme::use_theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderAction {
    ToggleMenu,
    CloseMenu,
    Navigate,
}

/// Drawer state after a header interaction. Navigation always closes it,
/// whichever control triggered it.
fn drawer_after(open: bool, action: HeaderAction) -> bool {
    match action {
        HeaderAction::ToggleMenu => !open,
        HeaderAction::CloseMenu | HeaderAction::Navigate => false,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let current = use_current_page();
    let go = use_page_navigate();
    let (drawer_open, set_drawer_open) = signal(false);

    let select = Callback::new(move |page: Page| {
        go(page);
        set_drawer_open.update(|open| *open = drawer_after(*open, HeaderAction::Navigate));
    });

    view! {
        <header class="header">
            <div class="header-inner">
                <button class="brand" on:click=move |_| select.run(Page::Home)>
                    <span class="brand-bracket">"<"</span>
                    "Suraj.dev"
                    <span class="brand-bracket">"/>"</span>
                </button>

                <nav class="nav-desktop">
                    {Page::ALL
                        .into_iter()
                        .map(|page| view! { <NavButton page=page on_select=select/> })
                        .collect_view()}
                    <ThemeToggle/>
                </nav>

                <div class="nav-mobile">
                    <ThemeToggle/>
                    <button
                        class="icon-btn menu-btn"
                        aria-label="Open navigation"
                        on:click=move |_| {
                            set_drawer_open
                                .update(|open| *open = drawer_after(*open, HeaderAction::ToggleMenu))
                        }
                    >
                        {move || if drawer_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || drawer_open.get()>
                <div class="drawer">
                    <div class="drawer-head">
                        <span class="drawer-title">"Navigation"</span>
                        <button
                            class="icon-btn"
                            aria-label="Close navigation"
                            on:click=move |_| {
                                set_drawer_open
                                    .update(|open| {
                                        *open = drawer_after(*open, HeaderAction::CloseMenu)
                                    })
                            }
                        >
                            "✕"
                        </button>
                    </div>
                    <ul class="drawer-list">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                let item_class = move || {
                                    if current.get() == page {
                                        "drawer-item active"
                                    } else {
                                        "drawer-item"
                                    }
                                };
                                view! {
                                    <li>
                                        <button
                                            class=item_class
                                            on:click=move |_| select.run(page)
                                        >
                                            <span class="drawer-glyph">{page.glyph()}</span>
                                            {page.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn NavButton(page: Page, on_select: Callback<Page>) -> impl IntoView {
    let current = use_current_page();
    let active = move || current.get() == page;

    view! {
        <button
            class=move || if active() { "nav-link active" } else { "nav-link" }
            on:click=move |_| on_select.run(page)
        >
            {page.label()}
            <Show when=active>
                <span class="nav-underline"></span>
            </Show>
        </button>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="icon-btn theme-toggle"
            aria-label="Toggle color scheme"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_closes_the_drawer_from_any_state() {
        assert!(!drawer_after(true, HeaderAction::Navigate));
        assert!(!drawer_after(false, HeaderAction::Navigate));
    }

    #[test]
    fn menu_button_toggles() {
        assert!(drawer_after(false, HeaderAction::ToggleMenu));
        assert!(!drawer_after(true, HeaderAction::ToggleMenu));
    }

    #[test]
    fn close_button_closes() {
        assert!(!drawer_after(true, HeaderAction::CloseMenu));
        assert!(!drawer_after(false, HeaderAction::CloseMenu));
    }
}
