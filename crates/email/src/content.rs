//! Placeholder rendering for templated email content
//!
//! Templates may embed the literal token `{name}`; campaign and ad hoc
//! sends replace it with the recipient's display name before composition.

/// Token templates embed where the recipient's display name belongs
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Replace every `{name}` occurrence with the recipient's display name.
///
/// A recipient with no known name substitutes the empty string; the token
/// never survives into delivered output.
pub fn render(text: &str, recipient_name: Option<&str>) -> String {
    text.replace(NAME_PLACEHOLDER, recipient_name.unwrap_or(""))
}

/// Render subject and body for one recipient
pub fn personalize(
    subject: &str,
    body: &str,
    recipient_name: Option<&str>,
) -> (String, String) {
    (render(subject, recipient_name), render(body, recipient_name))
}
