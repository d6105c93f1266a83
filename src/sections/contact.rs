use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::config;
use crate::forms::common::{FormPhase, SubmitAttempt};
use crate::forms::contact::{ContactAction, ContactForm};
use crate::notify::EmailClient;

const CONTACT_INFO: [(&str, &str, Option<&str>); 4] = [
    ("Phone", "+91 8767504553", Some("tel:+918767504553")),
    ("Email", "patilpratiksha0@gmail.com", Some("mailto:patilpratiksha0@gmail.com")),
    ("Address", "123 Dental Street, City, State 12345", Some("https://maps.google.com")),
    ("Hours", "Mon-Fri: 8AM-6PM, Sat: 9AM-3PM", None),
];

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub client: EmailClient,
    pub on_book: Callback<()>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());
    let form = use_reducer(ContactForm::default);
    let pending_timers = use_mut_ref(Vec::<Timeout>::new);

    let submitting = form.phase == FormPhase::Submitting;

    // Drop outstanding timers with the section so no write lands on a
    // torn-down form.
    {
        let pending_timers = pending_timers.clone();
        use_effect_with_deps(
            move |_| move || pending_timers.borrow_mut().clear(),
            (),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let client = props.client.clone();
        let pending_timers = pending_timers.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submit_attempt() {
                SubmitAttempt::InFlight => {}
                SubmitAttempt::Invalid(errors) => {
                    form.dispatch(ContactAction::Rejected(errors));
                }
                SubmitAttempt::Ready(params) => {
                    form.dispatch(ContactAction::BeginSubmit);
                    let form = form.clone();
                    let client = client.clone();
                    let pending_timers = pending_timers.clone();
                    spawn_local(async move {
                        match client.send(config::CONTACT_TEMPLATE_ID, &params).await {
                            Ok(()) => {
                                form.dispatch(ContactAction::DispatchSucceeded);
                                let clear = Timeout::new(1_000, {
                                    let form = form.clone();
                                    move || form.dispatch(ContactAction::ClearFields)
                                });
                                let reset = Timeout::new(3_000, {
                                    let form = form.clone();
                                    move || form.dispatch(ContactAction::ResetPhase)
                                });
                                let mut timers = pending_timers.borrow_mut();
                                timers.push(clear);
                                timers.push(reset);
                            }
                            Err(e) => {
                                log!(format!("Failed to send message: {e}"));
                                form.dispatch(ContactAction::DispatchFailed(e.to_string()));
                            }
                        }
                    });
                }
            }
        })
    };

    let oninput_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetName(input.value()));
        })
    };
    let oninput_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetEmail(input.value()));
        })
    };
    let oninput_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetPhone(input.value()));
        })
    };
    let oninput_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetMessage(area.value()));
        })
    };

    let dismiss_success = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(ContactAction::ResetPhase))
    };

    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    let error_for = |field: &str| {
        form.errors
            .get(field)
            .map(|message| html! { <span class="field-error">{*message}</span> })
            .unwrap_or_default()
    };

    let info_cards = CONTACT_INFO.iter().map(|(title, content, link)| {
        html! {
            <div class="contact-item" key={*title}>
                <h4>{*title}</h4>
                {
                    match link {
                        Some(href) => html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer">{*content}</a>
                        },
                        None => html! { <span>{*content}</span> },
                    }
                }
            </div>
        }
    });

    html! {
        <section id="contact" class={classes!("contact", revealed.then_some("visible"))} ref={section_ref}>
            <style>
                {r#".contact {
                    padding: 6rem 0;
                    background: var(--surface-alt);
                }
                .contact-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .contact-columns {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 3rem;
                    margin-top: 3rem;
                }
                .contact-form-panel,
                .contact-info-panel {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .contact.visible .contact-form-panel,
                .contact.visible .contact-info-panel {
                    opacity: 1;
                    transform: translateY(0);
                }
                .contact.visible .contact-info-panel { transition-delay: 0.2s; }
                .contact-form-panel h3,
                .contact-info-panel h3 { margin-top: 0; color: var(--primary-dark); }
                .contact-form { position: relative; }
                .contact-form .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }
                .contact-form label {
                    font-weight: 600;
                    font-size: 0.9rem;
                    margin-bottom: 0.35rem;
                }
                .contact-form input,
                .contact-form textarea {
                    font: inherit;
                    padding: 0.65rem 0.8rem;
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    background: var(--surface);
                    color: var(--text);
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: var(--primary);
                }
                .contact-form .has-error { border-color: #d64545; }
                .field-error {
                    color: #d64545;
                    font-size: 0.8rem;
                    margin-top: 0.3rem;
                }
                .contact-submit {
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    border-radius: 10px;
                    padding: 0.85rem 2rem;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                }
                .contact-submit:hover { background: var(--primary-dark); }
                .contact-submit:disabled { opacity: 0.6; cursor: wait; }
                .dispatch-alert {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 0.75rem;
                    background: rgba(214, 69, 69, 0.1);
                    border: 1px solid rgba(214, 69, 69, 0.4);
                    color: #d64545;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                    font-size: 0.9rem;
                }
                .dispatch-alert button {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    font-size: 1.1rem;
                }
                .success-popup {
                    position: absolute;
                    inset: 0;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 14px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 2rem;
                    animation: success-rise 0.4s ease;
                    z-index: 5;
                }
                @keyframes success-rise {
                    from { opacity: 0; transform: translateY(30px) scale(0.95); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                .success-popup .check {
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: var(--primary-soft);
                    color: var(--primary-dark);
                    font-size: 1.8rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                .success-popup h3 { margin: 0 0 0.5rem; }
                .success-popup p { margin: 0 0 1.25rem; color: var(--text-muted); }
                .success-popup button {
                    background: none;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    padding: 0.5rem 1.5rem;
                    font: inherit;
                    cursor: pointer;
                    color: var(--text);
                }
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-item {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                }
                .contact-item h4 { margin: 0 0 0.3rem; font-size: 0.9rem; color: var(--primary-dark); }
                .contact-item a { color: var(--text); text-decoration: none; }
                .contact-item a:hover { color: var(--primary); }
                .contact-item span { color: var(--text); }
                .contact-book {
                    margin-top: 1.5rem;
                    width: 100%;
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    border-radius: 10px;
                    padding: 0.85rem;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                }
                .contact-book:hover { background: var(--primary-dark); }
                @media (max-width: 900px) {
                    .contact-columns { grid-template-columns: 1fr; }
                }"#}
            </style>
            <div class="contact-inner">
                <div class="section-header">
                    <h2>{"Get In Touch"}</h2>
                    <p>{"Ready to transform your smile? Contact us today to schedule your consultation"}</p>
                </div>

                <div class="contact-columns">
                    <div class="contact-form-panel">
                        <h3>{"Send us a Message"}</h3>
                        <form class="contact-form" onsubmit={onsubmit}>
                            if let Some(reason) = form.dispatch_error.as_ref() {
                                <div class="dispatch-alert">
                                    <span>{format!("Failed to send message: {reason}. Please try again or contact us directly.")}</span>
                                    <button
                                        type="button"
                                        onclick={{
                                            let form = form.clone();
                                            Callback::from(move |_| form.dispatch(ContactAction::DismissError))
                                        }}
                                        aria-label="Dismiss"
                                    >
                                        {"✕"}
                                    </button>
                                </div>
                            }

                            <div class="form-group">
                                <label for="contact-name">{"Full Name *"}</label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    placeholder="Enter your full name"
                                    value={form.name.clone()}
                                    oninput={oninput_name}
                                    class={classes!(form.errors.contains_key("name").then_some("has-error"))}
                                />
                                { error_for("name") }
                            </div>

                            <div class="form-group">
                                <label for="contact-email">{"Email Address *"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    placeholder="Enter your email address"
                                    value={form.email.clone()}
                                    oninput={oninput_email}
                                    class={classes!(form.errors.contains_key("email").then_some("has-error"))}
                                />
                                { error_for("email") }
                            </div>

                            <div class="form-group">
                                <label for="contact-phone">{"Phone Number *"}</label>
                                <input
                                    id="contact-phone"
                                    type="tel"
                                    placeholder="Enter your phone number"
                                    value={form.phone.clone()}
                                    oninput={oninput_phone}
                                    class={classes!(form.errors.contains_key("phone").then_some("has-error"))}
                                />
                                { error_for("phone") }
                            </div>

                            <div class="form-group">
                                <label for="contact-message">{"Message *"}</label>
                                <textarea
                                    id="contact-message"
                                    rows="5"
                                    placeholder="Tell us about your dental needs"
                                    value={form.message.clone()}
                                    oninput={oninput_message}
                                    class={classes!(form.errors.contains_key("message").then_some("has-error"))}
                                />
                                { error_for("message") }
                            </div>

                            <button type="submit" class="contact-submit" disabled={submitting}>
                                { if submitting { "Sending..." } else { "Send Message" } }
                            </button>

                            if form.phase == FormPhase::Submitted {
                                <div class="success-popup">
                                    <div class="check">{"✓"}</div>
                                    <h3>{"Email Sent Successfully!"}</h3>
                                    <p>{"Thank you for your message! We'll get back to you within 24 hours."}</p>
                                    <button type="button" onclick={dismiss_success}>{"Close"}</button>
                                </div>
                            }
                        </form>
                    </div>

                    <div class="contact-info-panel">
                        <h3>{"Contact Information"}</h3>
                        <div class="contact-info">
                            { for info_cards }
                        </div>
                        <button class="contact-book" onclick={book}>
                            {"Book Appointment"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
