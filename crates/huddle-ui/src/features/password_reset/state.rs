//! Password-reset request form state.
//!
//! # Design
//! - Addresses are normalized (trimmed, lowercased) before validation and
//!   submission so the server sees one canonical form.
//! - Validation is a light syntactic check; the server stays authoritative
//!   and its rejection message is shown verbatim.

/// Submission state of the reset-request form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetRequestState {
    /// Form visible; `error` holds the inline validation or server message.
    Editing {
        /// Message rendered under the input, if any.
        error: Option<String>,
    },
    /// Server accepted; the confirmation shows the normalized address.
    Sent {
        /// Address the reset link was (possibly) sent to.
        email: String,
    },
}

impl Default for ResetRequestState {
    fn default() -> Self {
        Self::Editing { error: None }
    }
}

/// Normalize an address the way the server stores account emails.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Light syntactic check ahead of the server's authoritative validation:
/// one `@`, a non-empty local part, and a dotted domain with no empty
/// labels. Whitespace and commas disqualify outright.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(|c| c.is_whitespace() || c == ',') {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
        assert_eq!(normalize_email(""), "");
    }

    #[test]
    fn well_formed_addresses_pass() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("user+tag@example.co"));
    }

    #[test]
    fn malformed_addresses_fail() {
        for bad in [
            "",
            "plain",
            "no-domain@",
            "@no-local.com",
            "bare@domain",
            "trailing@dot.",
            "leading@.dot",
            "two@@ats.com",
            "sp ace@example.com",
            "comma,@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn default_state_is_an_empty_editor() {
        assert_eq!(ResetRequestState::default(), ResetRequestState::Editing {
            error: None
        });
    }
}
