use std::rc::Rc;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Serialize;
use yew::prelude::*;

use crate::config;
use crate::forms::common::{
    is_valid_email, is_valid_phone, FormPhase, SubmitAttempt, ValidationErrors,
};

/// The bookable half-hour slots. Fixed: there is no bookings store to
/// compute availability against. 13:00-13:30 is the lunch break.
pub const TIME_SLOTS: [&str; 16] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "12:00 PM", "12:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM",
    "04:00 PM", "04:30 PM", "05:00 PM", "05:30 PM",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Latest bookable day: three calendar months out.
pub fn booking_window_end(today: NaiveDate) -> NaiveDate {
    today + Months::new(3)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First non-weekend day at or after `from`. Shown as a suggestion next
/// to the date picker, never enforced as a default.
pub fn next_available_weekday(from: NaiveDate) -> NaiveDate {
    let mut date = from;
    while is_weekend(date) {
        date = date + Days::new(1);
    }
    date
}

/// Template parameters for the appointment-request template.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AppointmentParams {
    pub to_name: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub reason: String,
    pub selected_services: String,
    pub reply_to: String,
}

/// Snapshot of a successfully submitted request, kept for the
/// confirmation view after the live fields are cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct AppointmentSummary {
    pub patient_name: String,
    pub date_label: String,
    pub time: String,
    pub services: Vec<String>,
}

/// State of the booking form inside the appointment dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentForm {
    pub patient_name: String,
    pub phone: String,
    pub email: String,
    /// ISO `YYYY-MM-DD` string straight from the date input.
    pub appointment_date: String,
    pub appointment_time: String,
    pub reason: String,
    pub selected_services: Vec<String>,
    pub errors: ValidationErrors,
    pub phase: FormPhase,
    pub dispatch_error: Option<String>,
    pub submitted: Option<AppointmentSummary>,
}

pub enum AppointmentAction {
    SetPatientName(String),
    SetPhone(String),
    SetEmail(String),
    SetDate(String),
    SetTime(String),
    SetReason(String),
    /// Symmetric add/remove on the selected-services set.
    ToggleService(String),
    Rejected(ValidationErrors),
    BeginSubmit,
    DispatchSucceeded,
    DispatchFailed(String),
    /// Fired 1s after a successful dispatch.
    ClearFields,
    /// Fired 5s after a successful dispatch, right before the dialog
    /// auto-closes; also used when the dialog is closed by hand.
    Reset,
    DismissError,
}

impl AppointmentForm {
    pub fn validate(&self, today: NaiveDate) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.patient_name.trim().is_empty() {
            errors.insert("patient_name", "Patient name is required");
        }

        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        } else if !is_valid_phone(&self.phone) {
            errors.insert("phone", "Phone number is invalid");
        }

        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Email is invalid");
        }

        if self.appointment_date.trim().is_empty() {
            errors.insert("appointment_date", "Appointment date is required");
        } else {
            match NaiveDate::parse_from_str(&self.appointment_date, DATE_FORMAT) {
                Err(_) => {
                    errors.insert("appointment_date", "Appointment date is invalid");
                }
                Ok(date) => {
                    if date < today {
                        errors.insert("appointment_date", "Appointment date cannot be in the past");
                    } else if is_weekend(date) {
                        errors.insert(
                            "appointment_date",
                            "Appointments are not available on weekends",
                        );
                    } else if date > booking_window_end(today) {
                        errors.insert(
                            "appointment_date",
                            "Appointment date must be within the next 3 months",
                        );
                    }
                }
            }
        }

        if self.appointment_time.is_empty() {
            errors.insert("appointment_time", "Appointment time is required");
        } else if !TIME_SLOTS.contains(&self.appointment_time.as_str()) {
            errors.insert("appointment_time", "Appointment time is invalid");
        }

        if self.reason.trim().is_empty() {
            errors.insert("reason", "Reason for visit is required");
        }

        if self.selected_services.is_empty() {
            errors.insert("selected_services", "Please select at least one service");
        }

        errors
    }

    pub fn params(&self) -> AppointmentParams {
        AppointmentParams {
            to_name: config::PRACTITIONER_NAME.to_string(),
            patient_name: self.patient_name.clone(),
            patient_email: self.email.clone(),
            patient_phone: self.phone.clone(),
            appointment_date: self.appointment_date.clone(),
            appointment_time: self.appointment_time.clone(),
            reason: self.reason.clone(),
            selected_services: self.selected_services.join(", "),
            reply_to: self.email.clone(),
        }
    }

    pub fn submit_attempt(&self, today: NaiveDate) -> SubmitAttempt<AppointmentParams> {
        if self.phase == FormPhase::Submitting {
            return SubmitAttempt::InFlight;
        }
        let errors = self.validate(today);
        if errors.is_empty() {
            SubmitAttempt::Ready(self.params())
        } else {
            SubmitAttempt::Invalid(errors)
        }
    }

    fn summary(&self) -> AppointmentSummary {
        let date_label = NaiveDate::parse_from_str(&self.appointment_date, DATE_FORMAT)
            .map(|date| date.format("%A, %B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.appointment_date.clone());
        AppointmentSummary {
            patient_name: self.patient_name.clone(),
            date_label,
            time: self.appointment_time.clone(),
            services: self.selected_services.clone(),
        }
    }
}

impl Reducible for AppointmentForm {
    type Action = AppointmentAction;

    fn reduce(self: Rc<Self>, action: AppointmentAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppointmentAction::SetPatientName(value) => {
                next.patient_name = value;
                next.errors.remove("patient_name");
            }
            AppointmentAction::SetPhone(value) => {
                next.phone = value;
                next.errors.remove("phone");
            }
            AppointmentAction::SetEmail(value) => {
                next.email = value;
                next.errors.remove("email");
            }
            AppointmentAction::SetDate(value) => {
                next.appointment_date = value;
                next.errors.remove("appointment_date");
            }
            AppointmentAction::SetTime(value) => {
                next.appointment_time = value;
                next.errors.remove("appointment_time");
            }
            AppointmentAction::SetReason(value) => {
                next.reason = value;
                next.errors.remove("reason");
            }
            AppointmentAction::ToggleService(service) => {
                if let Some(index) = next.selected_services.iter().position(|s| *s == service) {
                    next.selected_services.remove(index);
                } else {
                    next.selected_services.push(service);
                }
                next.errors.remove("selected_services");
            }
            AppointmentAction::Rejected(errors) => {
                next.errors = errors;
            }
            AppointmentAction::BeginSubmit => {
                if next.phase == FormPhase::Submitting {
                    return self;
                }
                next.phase = FormPhase::Submitting;
                next.dispatch_error = None;
            }
            AppointmentAction::DispatchSucceeded => {
                next.submitted = Some(next.summary());
                next.phase = FormPhase::Submitted;
            }
            AppointmentAction::DispatchFailed(reason) => {
                next.phase = FormPhase::Editing;
                next.dispatch_error = Some(reason);
            }
            AppointmentAction::ClearFields => {
                next.patient_name.clear();
                next.phone.clear();
                next.email.clear();
                next.appointment_date.clear();
                next.appointment_time.clear();
                next.reason.clear();
                next.selected_services.clear();
                next.errors.clear();
            }
            AppointmentAction::Reset => {
                next.phase = FormPhase::Editing;
                next.submitted = None;
            }
            AppointmentAction::DismissError => {
                next.dispatch_error = None;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-06-04 is a Wednesday.
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    fn filled() -> AppointmentForm {
        AppointmentForm {
            patient_name: "Eshaan Patel".to_string(),
            phone: "+918767504553".to_string(),
            email: "eshaan@example.com".to_string(),
            appointment_date: "2025-06-06".to_string(), // a Friday
            appointment_time: "10:30 AM".to_string(),
            reason: "Tooth sensitivity".to_string(),
            selected_services: vec!["Dental Implants".to_string()],
            ..Default::default()
        }
    }

    fn apply(form: AppointmentForm, action: AppointmentAction) -> AppointmentForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    #[test]
    fn validate_passes_for_well_formed_input() {
        assert!(filled().validate(wednesday()).is_empty());
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = AppointmentForm::default().validate(wednesday());
        for key in [
            "patient_name",
            "phone",
            "email",
            "appointment_date",
            "appointment_time",
            "reason",
            "selected_services",
        ] {
            assert!(errors.contains_key(key), "missing error for {key}");
        }
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn past_dates_are_rejected_with_the_past_message() {
        let mut form = filled();
        form.appointment_date = "2025-06-03".to_string();
        assert_eq!(
            form.validate(wednesday()).get("appointment_date"),
            Some(&"Appointment date cannot be in the past")
        );
    }

    #[test]
    fn weekends_are_rejected_no_matter_how_far_ahead() {
        let mut form = filled();
        // The very next Saturday and one far in the future.
        for date in ["2025-06-07", "2025-08-30"] {
            form.appointment_date = date.to_string();
            assert_eq!(
                form.validate(wednesday()).get("appointment_date"),
                Some(&"Appointments are not available on weekends"),
                "for {date}"
            );
        }
        // Sunday as well.
        form.appointment_date = "2025-06-08".to_string();
        assert_eq!(
            form.validate(wednesday()).get("appointment_date"),
            Some(&"Appointments are not available on weekends")
        );
    }

    #[test]
    fn dates_beyond_three_months_are_rejected() {
        let mut form = filled();
        form.appointment_date = "2025-09-05".to_string(); // a Friday past Sep 4
        assert_eq!(
            form.validate(wednesday()).get("appointment_date"),
            Some(&"Appointment date must be within the next 3 months")
        );

        // The boundary day itself is fine (Sep 4 2025 is a Thursday).
        form.appointment_date = "2025-09-04".to_string();
        assert!(form.validate(wednesday()).is_empty());
    }

    #[test]
    fn today_is_bookable() {
        let mut form = filled();
        form.appointment_date = "2025-06-04".to_string();
        assert!(form.validate(wednesday()).is_empty());
    }

    #[test]
    fn time_must_come_from_the_slot_list() {
        let mut form = filled();
        form.appointment_time = "01:00 PM".to_string(); // lunch break
        assert_eq!(
            form.validate(wednesday()).get("appointment_time"),
            Some(&"Appointment time is invalid")
        );

        form.appointment_time = String::new();
        assert_eq!(
            form.validate(wednesday()).get("appointment_time"),
            Some(&"Appointment time is required")
        );
    }

    #[test]
    fn slot_list_covers_the_working_day() {
        assert_eq!(TIME_SLOTS.len(), 16);
        assert_eq!(TIME_SLOTS.first(), Some(&"09:00 AM"));
        assert_eq!(TIME_SLOTS.last(), Some(&"05:30 PM"));
        assert!(!TIME_SLOTS.contains(&"01:00 PM"));
        assert!(!TIME_SLOTS.contains(&"01:30 PM"));
    }

    #[test]
    fn toggling_a_service_twice_restores_the_selection() {
        let form = filled();
        let original = form.selected_services.clone();

        let form = apply(form, AppointmentAction::ToggleService("Root Canal".to_string()));
        assert!(form.selected_services.contains(&"Root Canal".to_string()));

        let form = apply(form, AppointmentAction::ToggleService("Root Canal".to_string()));
        assert_eq!(form.selected_services, original);
    }

    #[test]
    fn toggling_clears_the_services_error() {
        let mut form = filled();
        form.selected_services.clear();
        let errors = form.validate(wednesday());
        let form = apply(form, AppointmentAction::Rejected(errors));
        assert!(form.errors.contains_key("selected_services"));

        let form = apply(
            form,
            AppointmentAction::ToggleService("Teeth Whitening".to_string()),
        );
        assert!(!form.errors.contains_key("selected_services"));
    }

    #[test]
    fn next_available_weekday_skips_weekends() {
        let saturday = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(next_available_weekday(saturday), monday);

        let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        assert_eq!(next_available_weekday(sunday), monday);

        assert_eq!(next_available_weekday(wednesday()), wednesday());
    }

    #[test]
    fn submit_while_in_flight_is_a_no_op() {
        let mut form = filled();
        form.phase = FormPhase::Submitting;
        assert_eq!(form.submit_attempt(wednesday()), SubmitAttempt::InFlight);
    }

    #[test]
    fn success_keeps_a_summary_for_the_confirmation_view() {
        let form = apply(filled(), AppointmentAction::BeginSubmit);
        assert_eq!(form.phase, FormPhase::Submitting);

        let form = apply(form, AppointmentAction::DispatchSucceeded);
        assert_eq!(form.phase, FormPhase::Submitted);

        let summary = form.submitted.clone().unwrap();
        assert_eq!(summary.patient_name, "Eshaan Patel");
        assert_eq!(summary.date_label, "Friday, June 6, 2025");
        assert_eq!(summary.time, "10:30 AM");
        assert_eq!(summary.services, vec!["Dental Implants".to_string()]);

        // The delayed clear empties the live fields but not the summary.
        let form = apply(form, AppointmentAction::ClearFields);
        assert!(form.patient_name.is_empty());
        assert!(form.submitted.is_some());

        let form = apply(form, AppointmentAction::Reset);
        assert_eq!(form.phase, FormPhase::Editing);
        assert!(form.submitted.is_none());
    }

    #[test]
    fn failure_returns_to_editing_with_fields_intact() {
        let form = apply(filled(), AppointmentAction::BeginSubmit);
        let form = apply(
            form,
            AppointmentAction::DispatchFailed("Quota exceeded".to_string()),
        );
        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(form.dispatch_error.as_deref(), Some("Quota exceeded"));
        assert_eq!(form.patient_name, "Eshaan Patel");
        assert!(form.submitted.is_none());
    }

    #[test]
    fn params_join_services_with_commas() {
        let mut form = filled();
        form.selected_services.push("Teeth Cleaning".to_string());
        let params = form.params();
        assert_eq!(params.selected_services, "Dental Implants, Teeth Cleaning");
        assert_eq!(params.appointment_date, "2025-06-06");
        assert_eq!(params.patient_email, params.reply_to);
    }

    #[test]
    fn params_serialize_with_the_template_keys() {
        let value = serde_json::to_value(filled().params()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 9);
        for key in [
            "to_name",
            "patient_name",
            "patient_email",
            "patient_phone",
            "appointment_date",
            "appointment_time",
            "reason",
            "selected_services",
            "reply_to",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
