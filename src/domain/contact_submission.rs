use super::{ContactEmail, ContactName, InquiryMessage};

/// A validated contact-form payload.
///
/// Built from untrusted input via [`ContactSubmission::parse`]; it lives for
/// a single request and is discarded once the inquiry email has been
/// dispatched.
#[derive(Debug)]
pub struct ContactSubmission {
    pub full_name: ContactName,
    pub country: Option<String>,
    pub email: ContactEmail,
    pub whatsapp: Option<String>,
    pub message: InquiryMessage,
}

/// A single rule violation, addressed to the input field it came from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks every field and reports all violations at once rather than
    /// stopping at the first, so the caller can surface them per input.
    /// `country` and `whatsapp` are free-form and accepted as-is.
    pub fn parse(
        full_name: String,
        country: Option<String>,
        email: String,
        whatsapp: Option<String>,
        message: String,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let full_name = ContactName::parse(full_name)
            .map_err(|e| errors.push(field_error("fullName", e)))
            .ok();
        let email = ContactEmail::parse(email)
            .map_err(|e| errors.push(field_error("email", e)))
            .ok();
        let message = InquiryMessage::parse(message)
            .map_err(|e| errors.push(field_error("message", e)))
            .ok();

        match (full_name, email, message) {
            (Some(full_name), Some(email), Some(message)) => Ok(Self {
                full_name,
                country,
                email,
                whatsapp,
                message,
            }),
            _ => Err(errors),
        }
    }
}

fn field_error(field: &str, message: String) -> FieldError {
    FieldError {
        field: field.to_string(),
        message,
    }
}
