use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::use_reveal;

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Cosmetic Dentistry",
        description: "Transform your smile with advanced cosmetic procedures including veneers, bonding, and smile makeovers.",
        accent: "#2CB1BC",
    },
    Service {
        title: "Periodontology",
        description: "Periodontal treatment for gum disease and other periodontal problems.",
        accent: "#1C7C82",
    },
    Service {
        title: "Dental Implants",
        description: "Restore missing teeth with durable, natural-looking dental implants that last a lifetime.",
        accent: "#F4D35E",
    },
    Service {
        title: "Teeth Cleaning",
        description: "Professional dental cleaning and hygiene services to maintain optimal oral health.",
        accent: "#2CB1BC",
    },
    Service {
        title: "Teeth Whitening",
        description: "Brighten your smile with professional teeth whitening treatments for a more confident appearance.",
        accent: "#1C7C82",
    },
    Service {
        title: "Root Canal",
        description: "Advanced endodontic treatment to save damaged teeth and relieve pain effectively.",
        accent: "#F4D35E",
    },
];

/// The service names offered as selectable options in the booking form.
pub fn service_names() -> Vec<String> {
    SERVICES.iter().map(|s| s.title.to_string()).collect()
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_book: Callback<()>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());

    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    let cards = SERVICES.iter().enumerate().map(|(index, service)| {
        html! {
            <div
                key={service.title}
                class="service-card"
                style={format!("transition-delay: {}ms", index * 100)}
            >
                <div class="service-card-head">
                    <span class="service-dot" style={format!("background: {}", service.accent)}></span>
                    <h3>{service.title}</h3>
                </div>
                <p>{service.description}</p>
            </div>
        }
    });

    html! {
        <section id="services" class={classes!("services", revealed.then_some("visible"))} ref={section_ref}>
            <style>
                {r#".services {
                    padding: 6rem 0;
                    background: var(--surface-alt);
                }
                .services-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .service-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 14px;
                    padding: 1.75rem;
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.6s ease, transform 0.6s ease, box-shadow 0.3s ease;
                }
                .services.visible .service-card {
                    opacity: 1;
                    transform: translateY(0);
                }
                .service-card:hover {
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                    transform: translateY(-6px);
                }
                .service-card-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .service-card-head h3 { margin: 0; font-size: 1.1rem; }
                .service-dot {
                    width: 14px;
                    height: 14px;
                    border-radius: 50%;
                    flex-shrink: 0;
                }
                .service-card p { margin: 0; color: var(--text-muted); line-height: 1.6; }
                .services-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                .services-cta p { color: var(--text-muted); margin-bottom: 1rem; }
                .services-cta button {
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.8rem 2rem;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .services-cta button:hover {
                    background: var(--primary-dark);
                    transform: translateY(-2px);
                }
                @media (max-width: 900px) {
                    .services-grid { grid-template-columns: 1fr; }
                }"#}
            </style>
            <div class="services-inner">
                <div class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p>{"Comprehensive dental care tailored to your unique needs"}</p>
                </div>

                <div class="services-grid">
                    { for cards }
                </div>

                <div class="services-cta">
                    <p>{"Ready to transform your smile?"}</p>
                    <button onclick={book}>{"Schedule Consultation"}</button>
                </div>
            </div>
        </section>
    }
}
