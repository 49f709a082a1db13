/// Markup generation for the results list

use crate::error::{ListerError, Result};

const MARKUP_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape text so it can be interpolated into HTML as literal text
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Reject titles that would be interpreted as markup if inserted raw.
///
/// Diagnostic only: [`render_entry`] logs the `MalformedTitle` and renders
/// the title escaped.
pub fn check_title(title: &str) -> Result<&str> {
    if title.contains(MARKUP_CHARS) {
        Err(ListerError::MalformedTitle(title.to_string()))
    } else {
        Ok(title)
    }
}

/// Build one `<li>` entry for a tab title
pub fn render_entry(title: &str) -> String {
    if let Err(e) = check_title(title) {
        log::debug!("Escaping title: {}", e);
    }

    format!("<li>{}</li>", escape_html(title))
}
