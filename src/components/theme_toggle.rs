use web_sys::MouseEvent;
use yew::prelude::*;

const THEME_KEY: &str = "clinic-theme";

fn stored_theme() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_KEY).ok())
        .flatten()
}

fn apply_theme(theme: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

fn persist_theme(theme: &str) {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(THEME_KEY, theme);
    }
}

/// Restores the persisted theme; called once from `main` before render.
pub fn init_theme() {
    if let Some(theme) = stored_theme() {
        apply_theme(&theme);
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let dark = use_state(|| stored_theme().as_deref() == Some("dark"));

    let onclick = {
        let dark = dark.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*dark;
            let theme = if next { "dark" } else { "light" };
            apply_theme(theme);
            persist_theme(theme);
            dark.set(next);
        })
    };

    let title = if *dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    html! {
        <button class="theme-toggle" {onclick} title={title}>
            <style>
                {r#".theme-toggle {
                    background: none;
                    border: 1px solid var(--border);
                    border-radius: 50%;
                    width: 38px;
                    height: 38px;
                    cursor: pointer;
                    font-size: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.3s ease;
                }
                .theme-toggle:hover { transform: rotate(20deg); }"#}
            </style>
            { if *dark { "☀" } else { "☾" } }
        </button>
    }
}
