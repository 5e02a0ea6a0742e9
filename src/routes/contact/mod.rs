mod contact;
mod helpers;

pub use contact::{
    ContactFormData, SEND_FAILED_MESSAGE, SENT_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE,
    SubmissionResult, UNEXPECTED_ERROR_MESSAGE, VALIDATION_FAILED_MESSAGE, process_submission,
    submit_contact,
};
