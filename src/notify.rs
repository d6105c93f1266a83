use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// Failure surfaced by [`EmailClient::send`]. `Provider` carries the
/// provider's own error text so the form can show it verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{0}")]
    Provider(String),
}

/// Request body understood by the transactional email API: a template
/// selector plus a flat key-value parameter map rendered server-side.
#[derive(Serialize)]
struct SendRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a P,
}

/// Thin adapter over the email provider. Owns the service/public-key
/// pair; the template id is chosen per call by the submitting form.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailClient {
    service_id: String,
    public_key: String,
}

impl EmailClient {
    pub fn new(service_id: &str, public_key: &str) -> Self {
        Self {
            service_id: service_id.to_string(),
            public_key: public_key.to_string(),
        }
    }

    /// Delivers one templated message. Exactly one request per call: no
    /// retry, no backoff. The outcome is passed through unchanged.
    pub async fn send<P: Serialize>(&self, template_id: &str, params: &P) -> Result<(), SendError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = Request::post(config::get_email_api_url())
            .json(&body)
            .map_err(|e| SendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            if text.is_empty() {
                Err(SendError::Provider(format!(
                    "Request failed with status {}",
                    response.status()
                )))
            } else {
                Err(SendError::Provider(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn send_request_serializes_to_provider_shape() {
        let params = json!({ "to_name": "Dr. Pratiksha Patil", "message": "hello" });
        let body = SendRequest {
            service_id: "service_123",
            template_id: "template_abc",
            user_id: "key_xyz",
            template_params: &params,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["service_id"], "service_123");
        assert_eq!(value["template_id"], "template_abc");
        assert_eq!(value["user_id"], "key_xyz");
        assert_eq!(value["template_params"]["message"], "hello");
    }

    #[test]
    fn provider_error_text_is_displayed_verbatim() {
        let err = SendError::Provider("The public key is invalid".to_string());
        assert_eq!(err.to_string(), "The public key is invalid");
    }
}
