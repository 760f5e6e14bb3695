// Personal portfolio — Leptos 0.8 CSR edition

mod components;
mod data;
mod globe;
mod pages;
mod routes;
mod theme;
mod transition;

use leptos::prelude::*;
use leptos_router::components::Router;
use wasm_bindgen::JsValue;

use components::Header;
use transition::TransitionOutlet;

fn main() {
    console_error_panic_hook::set_once();
    console_greeting();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    theme::provide_theme();
    let theme = theme::use_theme();

    view! {
        <Router>
            <div class=move || format!("app {}", theme.mode().class())>
                <Header/>
                <main>
                    <TransitionOutlet/>
                </main>
            </div>
        </Router>
    }
}

/// Greeting for anyone who opens the console.
fn console_greeting() {
    let art = r#"
  ___ _   _ _ __ __ _  (_)  __| | _____   __
 / __| | | | '__/ _` | | | / _` |/ _ \ \ / /
 \__ \ |_| | | | (_| |_| || (_| |  __/\ V /
 |___/\__,_|_|  \__,_(_)_/ \__,_|\___| \_/

  Rust + Leptos + WebAssembly. No framework churn here.
"#;
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{art}")),
        &JsValue::from_str("color: #6366F1; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cLooking for the source? It compiles to the wasm you're running."),
        &JsValue::from_str("color: #818CF8;"),
    );
}
