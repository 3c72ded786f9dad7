//! Console mailer for development and testing.

use crate::error::Result;
use crate::providers::Mailer;
use crate::types::Email;
use tracing::info;

/// Width of the text area inside the printed box.
const BOX_WIDTH: usize = 60;

/// Console mailer.
///
/// This mailer logs emails to the console instead of sending them.
/// Useful for development where you don't want to send real emails.
///
/// # Examples
///
/// ```ignore
/// use webinar_booking::providers::ConsoleMailer;
///
/// let mailer = ConsoleMailer::new();
/// mailer.send(&Email {
///     to: "organisateur@gmail.com".to_string(),
///     subject: "Hello".to_string(),
///     body: "World".to_string(),
/// }).await?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    /// Create a new console mailer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Mailer for ConsoleMailer {
    async fn send(&self, email: &Email) -> Result<()> {
        info!(
            to = %email.to,
            subject = %email.subject,
            "📧 Email (Development Mode)"
        );
        println!("{}", render(email));

        Ok(())
    }
}

/// Render an email as a boxed block of text.
fn render(email: &Email) -> String {
    let border = "═".repeat(BOX_WIDTH + 2);
    let mut lines = vec![format!("╔{border}╗")];

    for line in wrap(&format!("To: {}", email.to)) {
        lines.push(format!("║ {line:<BOX_WIDTH$} ║"));
    }
    for line in wrap(&format!("Subject: {}", email.subject)) {
        lines.push(format!("║ {line:<BOX_WIDTH$} ║"));
    }
    lines.push(format!("╠{border}╣"));
    for paragraph in email.body.lines() {
        for line in wrap(paragraph) {
            lines.push(format!("║ {line:<BOX_WIDTH$} ║"));
        }
    }
    lines.push(format!("╚{border}╝"));

    lines.join("\n")
}

/// Word wrap to fit in box.
fn wrap(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(BOX_WIDTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
