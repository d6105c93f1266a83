use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::header::scroll_to_section;
use crate::sections::services::SERVICES;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("YouTube", "https://youtube.com/@drpratikshapatilmds"),
    ("Instagram", "https://www.instagram.com/perio_chick/"),
    ("LinkedIn", "https://www.linkedin.com/in/dr-pratiksha-patil-281582234"),
];

const QUICK_LINKS: [(&str, &str); 6] = [
    ("Home", "home"),
    ("About", "about"),
    ("Services", "services"),
    ("Gallery", "gallery"),
    ("Testimonials", "testimonials"),
    ("Contact", "contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Local::now().year();

    let quick_links = QUICK_LINKS.iter().map(|(label, id)| {
        let id = *id;
        html! {
            <li key={id}>
                <button class="footer-link" onclick={Callback::from(move |_| scroll_to_section(id))}>
                    {*label}
                </button>
            </li>
        }
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#".site-footer {
                    background: var(--primary-dark);
                    color: rgba(255, 255, 255, 0.85);
                    padding: 4rem 0 1.5rem;
                }
                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1.4fr 1fr 1fr 1.2fr;
                    gap: 2.5rem;
                }
                .footer-brand h3 { margin: 0; color: #fff; }
                .footer-brand .tagline { margin: 0.2rem 0 1rem; color: var(--accent); }
                .footer-brand p { line-height: 1.6; font-size: 0.9rem; }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .footer-social a {
                    color: rgba(255, 255, 255, 0.85);
                    font-size: 0.85rem;
                    text-decoration: none;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    border-radius: 999px;
                    padding: 0.3rem 0.9rem;
                    transition: background 0.2s ease;
                }
                .footer-social a:hover { background: rgba(255, 255, 255, 0.12); }
                .footer-grid h4 { margin: 0 0 1rem; color: #fff; }
                .footer-grid ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .footer-grid li { margin-bottom: 0.5rem; font-size: 0.9rem; }
                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    color: rgba(255, 255, 255, 0.85);
                    cursor: pointer;
                }
                .footer-link:hover { color: var(--accent); }
                .footer-contact p { margin: 0 0 0.5rem; font-size: 0.9rem; }
                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.15);
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    font-size: 0.85rem;
                }
                .footer-bottom a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    margin-left: 1rem;
                }
                .footer-bottom a:hover { color: #fff; }
                @media (max-width: 900px) {
                    .footer-grid { grid-template-columns: 1fr; }
                    .footer-bottom { flex-direction: column; }
                }"#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{"Dr. Pratiksha Patil"}</h3>
                        <p class="tagline">{"Crafting Perfect Smiles"}</p>
                        <p>
                            {"Dedicated to providing exceptional dental care with a personal touch. \
                              Your smile is our priority."}
                        </p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(name, url)| html! {
                                <a key={*name} href={*url} target="_blank" rel="noopener noreferrer">
                                    {*name}
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for quick_links }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Services"}</h4>
                        <ul>
                            { for SERVICES.iter().map(|service| html! {
                                <li key={service.title}>{service.title}</li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-contact">
                        <h4>{"Contact Info"}</h4>
                        <p>{"+91 8767504553"}</p>
                        <p>{"patilpratiksha0@gmail.com"}</p>
                        <p>{"123 Dental Street, City, State 12345"}</p>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {current_year} Dr. Pratiksha Patil. All rights reserved.")}</p>
                    <div>
                        <a href="/privacy">{"Privacy Policy"}</a>
                        <a href="/terms">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
