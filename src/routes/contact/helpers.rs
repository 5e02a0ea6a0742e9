use chrono::{DateTime, Utc};
use tera::Context as TeraContext;

use crate::domain::ContactSubmission;

/// Renders the HTML body of the inquiry notification.
///
/// `country` and `whatsapp` sections appear only when the submitter provided
/// them. The message is split into lines so the template can escape each one
/// while still rendering line breaks.
pub fn render_inquiry_email(
    submission: &ContactSubmission,
    sent_at: DateTime<Utc>,
) -> Result<String, tera::Error> {
    let message_lines: Vec<&str> = submission.message.as_ref().split('\n').collect();

    let mut ctx = TeraContext::new();
    ctx.insert("full_name", submission.full_name.as_ref());
    ctx.insert("country", &submission.country);
    ctx.insert("email", submission.email.as_ref());
    ctx.insert("whatsapp", &submission.whatsapp);
    ctx.insert("message_lines", &message_lines);
    ctx.insert(
        "sent_at",
        &sent_at.format("%A, %B %-d, %Y at %H:%M:%S UTC").to_string(),
    );

    let tera = tera::Tera::new("views/**/*")?;
    tera.render("inquiry_email.html", &ctx)
}
