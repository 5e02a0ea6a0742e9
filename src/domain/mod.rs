mod contact_email;
mod contact_name;
mod contact_submission;
mod inquiry_message;

pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use contact_submission::{ContactSubmission, FieldError};
pub use inquiry_message::InquiryMessage;
