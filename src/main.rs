use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod notify;
mod forms {
    pub mod appointment;
    pub mod common;
    pub mod contact;
}
mod components {
    pub mod appointment_modal;
    pub mod header;
    pub mod preloader;
    pub mod reveal;
    pub mod theme_toggle;
    pub mod treatment_modal;
}
mod sections {
    pub mod about;
    pub mod achievements;
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod testimonials;
}

use components::appointment_modal::AppointmentModal;
use components::header::Header;
use components::preloader::Preloader;
use notify::EmailClient;
use sections::{
    about::About, achievements::Achievements, contact::Contact, footer::Footer, gallery::Gallery,
    hero::Hero, services::Services, testimonials::Testimonials,
};

const SECTION_IDS: [&str; 7] = [
    "home",
    "about",
    "services",
    "gallery",
    "achievements",
    "testimonials",
    "contact",
];

#[function_component]
fn App() -> Html {
    let loading = use_state(|| true);
    let active_section = use_state_eq(|| "home".to_string());
    let appointment_open = use_state(|| false);
    // One client for the whole application, handed to both forms.
    let client = use_state(|| EmailClient::new(config::SERVICE_ID, config::PUBLIC_KEY));

    // Brand splash while the page settles.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(2_000, move || loading.set(false));
                move || drop(timer)
            },
            (),
        );
    }

    // Track which section fills the viewport so the header can highlight
    // the matching nav link.
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let position = window_clone.scroll_y().unwrap_or(0.0) + 100.0;
                    for id in SECTION_IDS {
                        if let Some(element) = document.get_element_by_id(id) {
                            if let Ok(section) = element.dyn_into::<web_sys::HtmlElement>() {
                                let top = section.offset_top() as f64;
                                let height = section.offset_height() as f64;
                                if position >= top && position < top + height {
                                    active_section.set(id.to_string());
                                    break;
                                }
                            }
                        }
                    }
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

    let open_appointment = {
        let appointment_open = appointment_open.clone();
        Callback::from(move |_: ()| appointment_open.set(true))
    };
    let close_appointment = {
        let appointment_open = appointment_open.clone();
        Callback::from(move |_: ()| appointment_open.set(false))
    };

    if *loading {
        return html! { <Preloader /> };
    }

    html! {
        <div class="app">
            <style>
                {r#":root {
                    --primary: #2CB1BC;
                    --primary-dark: #1C7C82;
                    --primary-soft: rgba(44, 177, 188, 0.12);
                    --accent: #F4D35E;
                    --surface: #ffffff;
                    --surface-alt: #f4f9f9;
                    --border: #dde7e8;
                    --text: #21343a;
                    --text-muted: #5c7176;
                }
                [data-theme="dark"] {
                    --primary-soft: rgba(44, 177, 188, 0.18);
                    --surface: #152527;
                    --surface-alt: #0f1d1f;
                    --border: #2a3e41;
                    --text: #e8f1f2;
                    --text-muted: #9fb4b8;
                }
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
                    background: var(--surface);
                    color: var(--text);
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .section-header { text-align: center; }
                .section-header h2 {
                    margin: 0 0 0.5rem;
                    font-size: clamp(1.7rem, 3.5vw, 2.3rem);
                    color: var(--text);
                }
                .section-header p {
                    margin: 0;
                    color: var(--text-muted);
                }"#}
            </style>

            <Header
                active_section={(*active_section).clone()}
                on_book={open_appointment.clone()}
            />

            <main>
                <Hero on_book={open_appointment.clone()} />
                <About />
                <Services on_book={open_appointment.clone()} />
                <Gallery on_book={open_appointment.clone()} />
                <Achievements />
                <Testimonials />
                <Contact client={(*client).clone()} on_book={open_appointment} />
            </main>

            <Footer />

            <AppointmentModal
                open={*appointment_open}
                services={sections::services::service_names()}
                client={(*client).clone()}
                on_close={close_appointment}
            />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    components::theme_toggle::init_theme();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
