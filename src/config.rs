//! Provider configuration. All values are fixed for the lifetime of the
//! application; `main` turns them into an `EmailClient` once at startup.

pub const SERVICE_ID: &str = "service_9vzj31v";
pub const CONTACT_TEMPLATE_ID: &str = "template_v63dy1o";
pub const APPOINTMENT_TEMPLATE_ID: &str = "template_efxmjza";
pub const PUBLIC_KEY: &str = "RLM474FEt0gv25apa";

/// Recipient name stamped into every outgoing template.
pub const PRACTITIONER_NAME: &str = "Dr. Pratiksha Patil";

#[cfg(debug_assertions)]
pub fn get_email_api_url() -> &'static str {
    "http://localhost:3001/api/v1.0/email/send" // Local mock when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_email_api_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}
