use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

pub const NAV_ITEMS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("gallery", "Gallery"),
    ("achievements", "Achievements"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

/// Smooth-scrolls the viewport to a page section by element id.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let mut options = web_sys::ScrollIntoViewOptions::new();
        options.behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_section: String,
    pub on_book: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_scrolled = use_state_eq(|| false);
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 50.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let book = {
        let on_book = props.on_book.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_book.emit(());
        })
    };

    let nav_links = NAV_ITEMS.iter().map(|(id, label)| {
        let nav_click = nav_click.clone();
        let id = *id;
        let class = if props.active_section == id {
            "nav-link active"
        } else {
            "nav-link"
        };
        html! {
            <li key={id}>
                <button class={class} onclick={Callback::from(move |_| nav_click.emit(id))}>
                    {*label}
                </button>
            </li>
        }
    });

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"), (*menu_open).then_some("menu-open"))}>
            <style>
                {r#".site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    padding: 1rem 0;
                    transition: background 0.3s ease, box-shadow 0.3s ease, padding 0.3s ease;
                }
                .site-header.scrolled {
                    background: var(--surface);
                    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
                    padding: 0.5rem 0;
                }
                .header-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    cursor: pointer;
                    font-weight: 700;
                    font-size: 1.1rem;
                    color: var(--primary-dark);
                }
                .header-logo img {
                    width: 36px;
                    height: 36px;
                }
                .header-nav ul {
                    display: flex;
                    gap: 0.25rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font: inherit;
                    font-size: 0.95rem;
                    color: var(--text);
                    padding: 0.5rem 0.75rem;
                    border-radius: 6px;
                    transition: color 0.2s ease, background 0.2s ease;
                }
                .nav-link:hover {
                    color: var(--primary);
                }
                .nav-link.active {
                    color: var(--primary);
                    background: var(--primary-soft);
                }
                .header-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .header-cta {
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.6rem 1.4rem;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .header-cta:hover {
                    background: var(--primary-dark);
                    transform: translateY(-2px);
                }
                .burger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    margin: 5px 0;
                    background: var(--text);
                    transition: transform 0.2s ease;
                }
                @media (max-width: 900px) {
                    .burger { display: block; }
                    .header-nav {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        background: var(--surface);
                        box-shadow: 0 12px 20px rgba(0, 0, 0, 0.1);
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }
                    .menu-open .header-nav { max-height: 420px; }
                    .header-nav ul {
                        flex-direction: column;
                        padding: 1rem 1.5rem;
                    }
                    .header-cta { display: none; }
                    .menu-open .burger span:first-child { transform: translateY(7px) rotate(45deg); }
                    .menu-open .burger span:nth-child(2) { opacity: 0; }
                    .menu-open .burger span:last-child { transform: translateY(-7px) rotate(-45deg); }
                }"#}
            </style>
            <div class="header-inner">
                <div class="header-logo" onclick={Callback::from(|_| scroll_to_section("home"))}>
                    <img src="/assets/logo.png" alt="Dr. Pratiksha Patil" />
                    <span>{"Dr. Pratiksha Patil"}</span>
                </div>

                <nav class="header-nav">
                    <ul>
                        { for nav_links }
                    </ul>
                </nav>

                <div class="header-actions">
                    <ThemeToggle />
                    <button class="header-cta" onclick={book}>
                        {"Book Appointment"}
                    </button>
                </div>

                <button class="burger" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}
