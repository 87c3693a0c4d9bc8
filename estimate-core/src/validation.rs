//! Submission-time validation.
//!
//! Field checks are aggregated rather than fail-fast: the confirmation step
//! shows every problem at once and stays blocked until all are resolved.
//! Nothing here is reachable from the pricing engine itself; an invalid
//! contact never prevents an estimate from being computed.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{ContactInfo, EstimationSession};

/// One field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The aggregated list of field errors for one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
            first = false;
        }
        Ok(())
    }
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Indian mobile numbers: ten digits starting 6-9.
    PATTERN.get_or_init(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap())
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn otp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{6}$").unwrap())
}

/// Validates all contact fields, collecting every failure.
pub fn validate_contact(contact: &ContactInfo) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if contact.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "name is required".into(),
        });
    }
    if !phone_pattern().is_match(contact.phone.trim()) {
        errors.push(FieldError {
            field: "phone",
            message: "enter a 10-digit mobile number".into(),
        });
    }
    if !email_pattern().is_match(contact.email.trim()) {
        errors.push(FieldError {
            field: "email",
            message: "enter a valid email address".into(),
        });
    }
    if contact.address.trim().is_empty() {
        errors.push(FieldError {
            field: "address",
            message: "address is required".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Shape check for a one-time password entered by the user.
pub fn validate_otp_format(code: &str) -> bool {
    otp_pattern().is_match(code.trim())
}

/// Gate for the final confirmation step: contact details must be present
/// and valid, and the phone-OTP handshake must have succeeded.
pub fn ready_to_submit(session: &EstimationSession) -> Result<(), ValidationErrors> {
    let mut errors = match &session.contact {
        Some(contact) => match validate_contact(contact) {
            Ok(()) => Vec::new(),
            Err(ValidationErrors(errors)) => errors,
        },
        None => vec![FieldError {
            field: "contact",
            message: "contact details are required".into(),
        }],
    };

    if !session.phone_verified {
        errors.push(FieldError {
            field: "phone",
            message: "phone number must be verified".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
