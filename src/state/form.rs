//! Enquiry form state and validation.
//!
//! Fields validate on blur and again on submit; an invalid form blocks
//! submission. Since the desktop app has no focus-loss event, a field is
//! considered blurred as soon as another field receives input. Accepted
//! enquiries reset the form and raise a success banner that the shell
//! dismisses after a few seconds.

use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::OnceLock;

/// How long the success banner stays up before auto-dismissing.
pub const SUCCESS_BANNER_MS: u64 = 5_000;

const MSG_REQUIRED: &str = "This field is required";
const MSG_EMAIL: &str = "Please enter a valid email address";
const MSG_PHONE: &str = "Please enter a valid 10-digit phone number";

const PHONE_DIGITS: usize = 10;

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"))
}

/// The form's input fields. All of them are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::Message => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }
}

/// An accepted enquiry, handed to the shell for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub received_at: DateTime<Local>,
}

/// What `submit` did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form was valid; fields were reset and the banner raised. The
    /// token guards the banner's auto-dismiss timer against a newer
    /// submission.
    Accepted {
        record: EnquiryRecord,
        banner_token: u64,
    },
    /// Validation failed; submission was blocked. `first_invalid` is the
    /// field to bring to the user's attention.
    Rejected { first_invalid: Field },
}

/// Owned state of the enquiry form.
#[derive(Debug, Clone, Default)]
pub struct EnquiryForm {
    values: [String; 4],
    errors: [Option<String>; 4],
    focused: Option<Field>,
    success_visible: bool,
    banner_token: u64,
}

impl EnquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors[field.index()].as_deref()
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Applies one keystroke's worth of input.
    ///
    /// Switching to a different field blurs the previous one first. The
    /// phone field accepts digits only, capped at ten. A field's error
    /// clears as soon as it holds text again.
    pub fn input(&mut self, field: Field, value: String) {
        if let Some(previous) = self.focused {
            if previous != field {
                self.blur(previous);
            }
        }
        self.focused = Some(field);

        let value = if field == Field::Phone {
            sanitize_phone(&value)
        } else {
            value
        };

        if !value.trim().is_empty() {
            self.errors[field.index()] = None;
        }
        self.values[field.index()] = value;
    }

    /// Validates a single field, as when its input loses focus.
    pub fn blur(&mut self, field: Field) {
        self.errors[field.index()] = self.validate(field);
    }

    /// Validates everything; either accepts the enquiry or blocks it.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = Default::default();

        let mut first_invalid = None;
        for field in Field::ALL {
            if let Some(error) = self.validate(field) {
                self.errors[field.index()] = Some(error);
                first_invalid.get_or_insert(field);
            }
        }

        if let Some(field) = first_invalid {
            return SubmitOutcome::Rejected {
                first_invalid: field,
            };
        }

        let record = EnquiryRecord {
            name: self.values[Field::Name.index()].trim().to_string(),
            email: self.values[Field::Email.index()].trim().to_string(),
            phone: self.values[Field::Phone.index()].clone(),
            message: self.values[Field::Message.index()].trim().to_string(),
            received_at: Local::now(),
        };

        self.values = Default::default();
        self.focused = None;
        self.success_visible = true;
        self.banner_token += 1;

        SubmitOutcome::Accepted {
            record,
            banner_token: self.banner_token,
        }
    }

    /// Dismisses the success banner; a stale token (from a timer raised by
    /// an earlier submission) is ignored.
    pub fn dismiss_success(&mut self, banner_token: u64) {
        if banner_token == self.banner_token {
            self.success_visible = false;
        }
    }

    fn validate(&self, field: Field) -> Option<String> {
        let value = self.value(field);
        if value.trim().is_empty() {
            return Some(MSG_REQUIRED.to_string());
        }
        match field {
            Field::Email if !email_pattern().is_match(value.trim()) => {
                Some(MSG_EMAIL.to_string())
            }
            Field::Phone if !phone_pattern().is_match(&sanitize_phone(value)) => {
                Some(MSG_PHONE.to_string())
            }
            _ => None,
        }
    }
}

/// Strips everything but digits and caps the result at ten digits.
fn sanitize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EnquiryForm {
        let mut form = EnquiryForm::new();
        form.input(Field::Name, "Ada Lovelace".into());
        form.input(Field::Email, "ada@example.com".into());
        form.input(Field::Phone, "0123456789".into());
        form.input(Field::Message, "Looking for a spring shoot.".into());
        form
    }

    #[test]
    fn test_empty_submit_blocks_with_required_errors() {
        let mut form = EnquiryForm::new();
        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_invalid: Field::Name
            }
        );
        for field in Field::ALL {
            assert_eq!(form.error(field), Some(MSG_REQUIRED));
        }
        assert!(!form.success_visible());
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut form = filled();
        form.input(Field::Email, "not-an-address".into());
        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_invalid: Field::Email
            }
        );
        assert_eq!(form.error(Field::Email), Some(MSG_EMAIL));
        assert_eq!(form.error(Field::Name), None);
    }

    #[test]
    fn test_phone_input_keeps_digits_only() {
        let mut form = EnquiryForm::new();
        form.input(Field::Phone, "(012) 345-6789 ext 55".into());
        assert_eq!(form.value(Field::Phone), "0123456789");
    }

    #[test]
    fn test_short_phone_fails_validation() {
        let mut form = filled();
        form.input(Field::Phone, "12345".into());
        form.blur(Field::Phone);
        assert_eq!(form.error(Field::Phone), Some(MSG_PHONE));
    }

    #[test]
    fn test_blur_flags_empty_required_field() {
        let mut form = EnquiryForm::new();
        form.blur(Field::Name);
        assert_eq!(form.error(Field::Name), Some(MSG_REQUIRED));

        form.input(Field::Name, "Ada".into());
        assert_eq!(form.error(Field::Name), None);
    }

    #[test]
    fn test_switching_fields_blurs_the_previous_one() {
        let mut form = EnquiryForm::new();
        form.input(Field::Email, "bad@".into());
        // Moving on to the message field blurs (and validates) the email.
        form.input(Field::Message, "Hello".into());
        assert_eq!(form.error(Field::Email), Some(MSG_EMAIL));
    }

    #[test]
    fn test_valid_submit_resets_and_raises_banner() {
        let mut form = filled();
        let outcome = form.submit();
        let SubmitOutcome::Accepted { record, .. } = outcome else {
            panic!("expected acceptance, got {outcome:?}");
        };
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.phone, "0123456789");
        assert!(form.success_visible());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn test_banner_dismiss_ignores_stale_token() {
        let mut form = filled();
        let SubmitOutcome::Accepted { banner_token, .. } = form.submit() else {
            panic!("expected acceptance");
        };

        // A second submission raises the banner again with a fresh token.
        form.input(Field::Name, "Grace".into());
        form.input(Field::Email, "grace@example.com".into());
        form.input(Field::Phone, "9876543210".into());
        form.input(Field::Message, "Another enquiry".into());
        let SubmitOutcome::Accepted {
            banner_token: newer,
            ..
        } = form.submit()
        else {
            panic!("expected acceptance");
        };

        form.dismiss_success(banner_token);
        assert!(form.success_visible(), "stale timer must not dismiss");
        form.dismiss_success(newer);
        assert!(!form.success_visible());
    }
}
