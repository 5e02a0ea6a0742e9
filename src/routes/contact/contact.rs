use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::{
    domain::{ContactSubmission, FieldError},
    email_client::{EmailClient, OutboundEmail},
};

use super::helpers::render_inquiry_email;

/// Sender identity on outgoing inquiry notifications.
pub const SENDER: &str = "CoMiz Global <no-reply@comizglobal.com>";
/// Inbox the inquiry notifications are delivered to.
pub const RECIPIENT: &str = "contact@comizglobal.com";

pub const VALIDATION_FAILED_MESSAGE: &str = "Invalid form data. Please check your inputs.";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Email service is temporarily unavailable. \
    Please contact us directly at comiz.global@gmail.com";
pub const SEND_FAILED_MESSAGE: &str =
    "Failed to send email. Please try again or contact us directly.";
pub const SENT_MESSAGE: &str =
    "Message sent successfully! We will get back to you within 24 hours.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub full_name: String,
    pub country: Option<String>,
    pub email: String,
    pub whatsapp: Option<String>,
    pub message: String,
}

/// Outcome of one submission, as reported back to the form.
///
/// `message` is safe to show to the user; `error` and `field_errors` carry
/// the internal detail behind a failure.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

impl SubmissionResult {
    pub fn invalid(errors: Vec<FieldError>) -> Self {
        let detail = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            success: false,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            message_id: None,
            error: Some(detail),
            field_errors: Some(errors),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            success: false,
            message: SERVICE_UNAVAILABLE_MESSAGE.to_string(),
            message_id: None,
            error: Some("Email provider API key not configured".to_string()),
            field_errors: None,
        }
    }

    pub fn provider_failure(detail: String) -> Self {
        Self {
            success: false,
            message: SEND_FAILED_MESSAGE.to_string(),
            message_id: None,
            error: Some(detail),
            field_errors: None,
        }
    }

    pub fn unexpected(detail: String) -> Self {
        Self {
            success: false,
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            message_id: None,
            error: Some(detail),
            field_errors: None,
        }
    }

    pub fn sent(message_id: String) -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_string(),
            message_id: Some(message_id),
            error: None,
            field_errors: None,
        }
    }
}

#[tracing::instrument(
    name = "Submitting a contact inquiry.",
    skip(form, email_client),
    fields(
        submitter_email = %form.email,
        submitter_name = %form.full_name
    )
)]
pub async fn submit_contact(
    form: web::Json<ContactFormData>,
    email_client: web::Data<EmailClient>,
) -> HttpResponse {
    let result = process_submission(form.into_inner(), &email_client).await;
    HttpResponse::Ok().json(result)
}

/// The submission pipeline: re-validate, check the provider credential,
/// render the inquiry email, dispatch it.
///
/// This is the trust boundary for the contact form. Every failure inside it,
/// expected or not, comes back as a `SubmissionResult`; callers never see an
/// error type.
pub async fn process_submission(
    data: ContactFormData,
    email_client: &EmailClient,
) -> SubmissionResult {
    let submission = match ContactSubmission::parse(
        data.full_name,
        data.country,
        data.email,
        data.whatsapp,
        data.message,
    ) {
        Ok(submission) => submission,
        Err(errors) => {
            tracing::warn!(fields = errors.len(), "rejected an invalid submission");
            return SubmissionResult::invalid(errors);
        }
    };

    if !email_client.is_configured() {
        tracing::error!("inquiry received but no email provider api key is configured");
        return SubmissionResult::unconfigured();
    }

    let html = match render_inquiry_email(&submission, Utc::now()) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(detail = %e, "failed rendering the inquiry email");
            return SubmissionResult::unexpected(e.to_string());
        }
    };

    let subject = format!(
        "New Inquiry from CoMiz Global Website - {}",
        submission.full_name.as_ref()
    );
    let email = OutboundEmail {
        from: SENDER,
        to: RECIPIENT,
        reply_to: submission.email.as_ref(),
        subject: &subject,
        html: &html,
    };

    tracing::info!("dispatching the inquiry email");
    match email_client.send(&email).await {
        Ok(message_id) => {
            tracing::info!(%message_id, "inquiry email sent");
            SubmissionResult::sent(message_id)
        }
        Err(e) => {
            tracing::error!(detail = %e, "failed to send the inquiry email");
            SubmissionResult::provider_failure(e.to_string())
        }
    }
}
