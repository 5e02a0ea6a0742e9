pub mod contact;
mod health_check;
mod helpers;
mod pages;

pub use contact::submit_contact;
pub use health_check::health_check;
pub use pages::{about, contact_page, home, services};
