use chrono::Local;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent,
    MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::forms::appointment::{
    next_available_weekday, booking_window_end, AppointmentAction, AppointmentForm, TIME_SLOTS,
};
use crate::forms::common::{FormPhase, SubmitAttempt};
use crate::notify::EmailClient;

#[derive(Properties, PartialEq)]
pub struct AppointmentModalProps {
    pub open: bool,
    pub services: Vec<String>,
    pub client: EmailClient,
    pub on_close: Callback<()>,
}

/// Booking dialog. Stays mounted while hidden so typed-in data survives
/// an accidental close; the close controls are disabled while a
/// submission is in flight.
#[function_component(AppointmentModal)]
pub fn appointment_modal(props: &AppointmentModalProps) -> Html {
    let form = use_reducer(AppointmentForm::default);
    let pending_timers = use_mut_ref(Vec::<Timeout>::new);

    let submitting = form.phase == FormPhase::Submitting;

    // Cancel outstanding timers if the dialog is torn down: no writes
    // into a removed form.
    {
        let pending_timers = pending_timers.clone();
        use_effect_with_deps(
            move |_| move || pending_timers.borrow_mut().clear(),
            (),
        );
    }

    let request_close = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if form.phase == FormPhase::Submitting {
                return;
            }
            form.dispatch(AppointmentAction::Reset);
            on_close.emit(());
        })
    };

    // Escape key closes the dialog (unless submitting); the page behind
    // stops scrolling while the dialog is up.
    {
        let request_close = request_close.clone();
        use_effect_with_deps(
            move |(open, submitting)| {
                let open = *open;
                let submitting = *submitting;
                let document = web_sys::window().unwrap().document().unwrap();

                let keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if open && !submitting && e.key() == "Escape" {
                        request_close.emit(());
                    }
                }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();

                if let Some(body) = document.body() {
                    if open {
                        let _ = body.set_attribute("style", "overflow: hidden");
                    } else {
                        let _ = body.remove_attribute("style");
                    }
                }

                let document_cleanup = document;
                move || {
                    document_cleanup
                        .remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    if let Some(body) = document_cleanup.body() {
                        let _ = body.remove_attribute("style");
                    }
                }
            },
            (props.open, submitting),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let client = props.client.clone();
        let on_close = props.on_close.clone();
        let pending_timers = pending_timers.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let today = Local::now().date_naive();
            match form.submit_attempt(today) {
                SubmitAttempt::InFlight => {}
                SubmitAttempt::Invalid(errors) => {
                    form.dispatch(AppointmentAction::Rejected(errors));
                }
                SubmitAttempt::Ready(params) => {
                    form.dispatch(AppointmentAction::BeginSubmit);
                    let form = form.clone();
                    let client = client.clone();
                    let on_close = on_close.clone();
                    let pending_timers = pending_timers.clone();
                    spawn_local(async move {
                        match client.send(config::APPOINTMENT_TEMPLATE_ID, &params).await {
                            Ok(()) => {
                                form.dispatch(AppointmentAction::DispatchSucceeded);
                                let clear = Timeout::new(1_000, {
                                    let form = form.clone();
                                    move || form.dispatch(AppointmentAction::ClearFields)
                                });
                                let close = Timeout::new(5_000, {
                                    let form = form.clone();
                                    move || {
                                        form.dispatch(AppointmentAction::Reset);
                                        on_close.emit(());
                                    }
                                });
                                let mut timers = pending_timers.borrow_mut();
                                timers.push(clear);
                                timers.push(close);
                            }
                            Err(e) => {
                                log!(format!("Failed to book appointment: {e}"));
                                form.dispatch(AppointmentAction::DispatchFailed(e.to_string()));
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
            form.dispatch(AppointmentAction::SetPatientName(input.value()));
        })
    };
    let oninput_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(AppointmentAction::SetPhone(input.value()));
        })
    };
    let oninput_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(AppointmentAction::SetEmail(input.value()));
        })
    };
    let onchange_date = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(AppointmentAction::SetDate(input.value()));
        })
    };
    let onchange_time = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(AppointmentAction::SetTime(select.value()));
        })
    };
    let oninput_reason = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(AppointmentAction::SetReason(area.value()));
        })
    };

    if !props.open {
        return html! {};
    }

    let today = Local::now().date_naive();
    let min_date = today.format("%Y-%m-%d").to_string();
    let max_date = booking_window_end(today).format("%Y-%m-%d").to_string();
    let suggested = next_available_weekday(today).format("%A, %b %-d").to_string();

    let overlay_close = {
        let request_close = request_close.clone();
        Callback::from(move |_: MouseEvent| request_close.emit(()))
    };
    let button_close = {
        let request_close = request_close.clone();
        Callback::from(move |_: MouseEvent| request_close.emit(()))
    };

    let service_chips = props.services.iter().map(|service| {
        let form = form.clone();
        let name = service.clone();
        let selected = form.selected_services.contains(service);
        let onclick = Callback::from(move |_: MouseEvent| {
            form.dispatch(AppointmentAction::ToggleService(name.clone()));
        });
        html! {
            <button
                type="button"
                key={service.clone()}
                class={classes!("service-chip", selected.then_some("selected"))}
                {onclick}
            >
                {service}
            </button>
        }
    });

    let error_for = |field: &str| {
        form.errors
            .get(field)
            .map(|message| html! { <span class="field-error">{*message}</span> })
            .unwrap_or_default()
    };

    html! {
        <div class="modal-overlay" onclick={overlay_close}>
            <style>
                {r#".modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 500;
                    background: rgba(15, 30, 32, 0.55);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    animation: modal-fade 0.3s ease;
                }
                .modal-content {
                    background: var(--surface);
                    border-radius: 16px;
                    width: 100%;
                    max-width: 640px;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 2rem;
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.25);
                    animation: modal-rise 0.3s ease;
                }
                @keyframes modal-fade { from { opacity: 0; } to { opacity: 1; } }
                @keyframes modal-rise {
                    from { opacity: 0; transform: translateY(40px) scale(0.95); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                .modal-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1.5rem;
                }
                .modal-header h2 { margin: 0; color: var(--primary-dark); }
                .modal-close {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                    color: var(--text-muted);
                    line-height: 1;
                }
                .modal-close:disabled { opacity: 0.4; cursor: not-allowed; }
                .appointment-form .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .appointment-form .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }
                .appointment-form label {
                    font-weight: 600;
                    font-size: 0.9rem;
                    margin-bottom: 0.35rem;
                }
                .appointment-form input,
                .appointment-form select,
                .appointment-form textarea {
                    font: inherit;
                    padding: 0.65rem 0.8rem;
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    background: var(--surface);
                    color: var(--text);
                }
                .appointment-form input:focus,
                .appointment-form select:focus,
                .appointment-form textarea:focus {
                    outline: none;
                    border-color: var(--primary);
                }
                .appointment-form .has-error { border-color: #d64545; }
                .field-error {
                    color: #d64545;
                    font-size: 0.8rem;
                    margin-top: 0.3rem;
                }
                .help-text {
                    font-size: 0.8rem;
                    color: var(--text-muted);
                    margin-top: 0.3rem;
                }
                .services-grid {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .service-chip {
                    font: inherit;
                    font-size: 0.85rem;
                    padding: 0.45rem 0.9rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    color: var(--text);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .service-chip:hover { border-color: var(--primary); }
                .service-chip.selected {
                    background: var(--primary);
                    border-color: var(--primary);
                    color: #fff;
                }
                .modal-submit {
                    width: 100%;
                    margin-top: 0.5rem;
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    border-radius: 10px;
                    padding: 0.9rem;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                }
                .modal-submit:hover { background: var(--primary-dark); }
                .modal-submit:disabled { opacity: 0.6; cursor: wait; }
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
                .booking-confirmation { text-align: center; padding: 1rem 0; }
                .booking-confirmation .check {
                    width: 64px;
                    height: 64px;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: var(--primary-soft);
                    color: var(--primary-dark);
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .booking-details {
                    text-align: left;
                    background: var(--primary-soft);
                    border-radius: 10px;
                    padding: 1rem 1.25rem;
                    margin: 1.25rem 0;
                }
                .booking-details p { margin: 0.35rem 0; }
                @media (max-width: 640px) {
                    .appointment-form .form-row { grid-template-columns: 1fr; }
                    .modal-content { padding: 1.25rem; }
                }"#}
            </style>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Book Your Appointment"}</h2>
                    <button
                        class="modal-close"
                        onclick={button_close}
                        disabled={submitting}
                        aria-label="Close"
                    >
                        {"✕"}
                    </button>
                </div>

                if form.phase == FormPhase::Submitted {
                    if let Some(summary) = form.submitted.as_ref() {
                        <div class="booking-confirmation">
                            <div class="check">{"✓"}</div>
                            <h3>{"Appointment Booked Successfully!"}</h3>
                            <div class="booking-details">
                                <p><strong>{"Patient: "}</strong>{&summary.patient_name}</p>
                                <p><strong>{"Date: "}</strong>{&summary.date_label}</p>
                                <p><strong>{"Time: "}</strong>{&summary.time}</p>
                                <p><strong>{"Services: "}</strong>{summary.services.join(", ")}</p>
                            </div>
                            <p>{"We've sent you a confirmation email. We'll contact you within 24 hours to confirm your appointment."}</p>
                        </div>
                    }
                } else {
                    <form class="appointment-form" onsubmit={onsubmit}>
                        if let Some(reason) = form.dispatch_error.as_ref() {
                            <div class="dispatch-alert">
                                <span>{format!("Failed to book appointment: {reason}. Please try again or contact us directly.")}</span>
                                <button
                                    type="button"
                                    onclick={{
                                        let form = form.clone();
                                        Callback::from(move |_| form.dispatch(AppointmentAction::DismissError))
                                    }}
                                    aria-label="Dismiss"
                                >
                                    {"✕"}
                                </button>
                            </div>
                        }

                        <div class="form-row">
                            <div class="form-group">
                                <label for="patient-name">{"Patient Name *"}</label>
                                <input
                                    id="patient-name"
                                    type="text"
                                    placeholder="Enter patient's full name"
                                    value={form.patient_name.clone()}
                                    oninput={oninput_name}
                                    class={classes!(form.errors.contains_key("patient_name").then_some("has-error"))}
                                />
                                { error_for("patient_name") }
                            </div>
                            <div class="form-group">
                                <label for="patient-phone">{"Phone Number *"}</label>
                                <input
                                    id="patient-phone"
                                    type="tel"
                                    placeholder="Enter phone number"
                                    value={form.phone.clone()}
                                    oninput={oninput_phone}
                                    class={classes!(form.errors.contains_key("phone").then_some("has-error"))}
                                />
                                { error_for("phone") }
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="patient-email">{"Email Address *"}</label>
                            <input
                                id="patient-email"
                                type="email"
                                placeholder="Enter email address"
                                value={form.email.clone()}
                                oninput={oninput_email}
                                class={classes!(form.errors.contains_key("email").then_some("has-error"))}
                            />
                            { error_for("email") }
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="appointment-date">{"Preferred Date *"}</label>
                                <input
                                    id="appointment-date"
                                    type="date"
                                    value={form.appointment_date.clone()}
                                    onchange={onchange_date}
                                    min={min_date}
                                    max={max_date}
                                    class={classes!(form.errors.contains_key("appointment_date").then_some("has-error"))}
                                />
                                <span class="help-text">{"Available Monday-Friday only"}</span>
                                <span class="help-text">{format!("Suggested: {suggested}")}</span>
                                { error_for("appointment_date") }
                            </div>
                            <div class="form-group">
                                <label for="appointment-time">{"Preferred Time *"}</label>
                                <select
                                    id="appointment-time"
                                    onchange={onchange_time}
                                    class={classes!(form.errors.contains_key("appointment_time").then_some("has-error"))}
                                >
                                    <option value="" selected={form.appointment_time.is_empty()}>
                                        {"Select time"}
                                    </option>
                                    { for TIME_SLOTS.iter().map(|slot| html! {
                                        <option
                                            value={*slot}
                                            selected={form.appointment_time == *slot}
                                        >
                                            {*slot}
                                        </option>
                                    }) }
                                </select>
                                { error_for("appointment_time") }
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="visit-reason">{"Reason for Visit *"}</label>
                            <textarea
                                id="visit-reason"
                                rows="3"
                                placeholder="Please describe your dental concerns or reason for visit"
                                value={form.reason.clone()}
                                oninput={oninput_reason}
                                class={classes!(form.errors.contains_key("reason").then_some("has-error"))}
                            />
                            { error_for("reason") }
                        </div>

                        <div class="form-group">
                            <label>{"Services Required *"}</label>
                            <div class="services-grid">
                                { for service_chips }
                            </div>
                            { error_for("selected_services") }
                        </div>

                        <button type="submit" class="modal-submit" disabled={submitting}>
                            { if submitting { "Booking Appointment..." } else { "Confirm Appointment" } }
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
