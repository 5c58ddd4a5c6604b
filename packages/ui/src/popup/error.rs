use std::fmt;

use thiserror::Error;

/// The three elements a popup is wired to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPart {
    Container,
    Trigger,
    CloseControl,
}

impl fmt::Display for PopupPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PopupPart::Container => "popup container",
            PopupPart::Trigger => "open trigger",
            PopupPart::CloseControl => "close control",
        })
    }
}

/// Configuration errors surfaced when binding a popup.
#[derive(Debug, Error, PartialEq)]
pub enum PopupError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("{part} `{selector}` not found in the document")]
    MissingElement { part: PopupPart, selector: String },

    #[error("{part} `{selector}` is not an HTML element")]
    NotHtmlElement { part: PopupPart, selector: String },

    #[error("failed to attach click listener to the {target}: {reason}")]
    Listen { target: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = PopupError::MissingElement {
            part: PopupPart::CloseControl,
            selector: ".closeBtn".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "close control `.closeBtn` not found in the document"
        );
    }

    #[test]
    fn test_listen_message() {
        let err = PopupError::Listen {
            target: "window",
            reason: "blocked".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to attach click listener to the window: blocked"
        );
    }
}
