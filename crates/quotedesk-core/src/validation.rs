// NOTE: one validator for every form
//
// The homepage quote form, the client dashboard form and the registration
// form all share these rules. Checks run in a fixed order and stop at the
// first failure so the user sees exactly one message at a time.

use once_cell::sync::Lazy;
use quotedesk_types::{FormFields, Role, parse_number};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const PHONE_DIGITS: usize = 10;

/// Form fields with a dedicated slot on the stored record. Everything else
/// is carried through verbatim.
const KNOWN_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "area_size",
    "budget",
    "project_details",
];

/// Metadata keys the desk assigns itself; submitted values are dropped.
const RESERVED_FIELDS: &[&str] = &["id", "submittedAt", "clientUser", "status", "type"];

const GMAIL_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];

/// Which entry point the fields came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormProfile {
    /// Homepage form: phone may be left blank.
    Public,
    /// Logged-in client dashboard form: phone is mandatory.
    Client,
}

impl FormProfile {
    fn phone_required(&self) -> bool {
        matches!(self, FormProfile::Client)
    }
}

/// First failure found while validating a quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    AreaSize,
    Budget,
    Phone,
    EmailFormat,
    EmailLocalPart,
    /// Every field blank; only the support form checks this.
    EmptyForm,
}

impl ValidationError {
    /// User-facing message shown under the form.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::AreaSize => "Please enter a positive value for area size.",
            ValidationError::Budget => "Please enter a positive value for budget.",
            ValidationError::Phone => "Please enter a 10-digit phone number.",
            ValidationError::EmailFormat => "Invalid email format.",
            ValidationError::EmailLocalPart => "Email local part must start with a letter.",
            ValidationError::EmptyForm => "Please fill in the form before sending.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Normalized quote fields, ready to be stamped with metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidatedQuote {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub area_size: Option<f64>,
    pub budget: Option<f64>,
    pub project_details: Option<String>,
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Strip everything but ASCII digits.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn has_email_shape(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

fn local_part_starts_with_letter(email: &str) -> bool {
    email
        .split('@')
        .next()
        .map(str::trim)
        .and_then(|local| local.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// `local@domain.tld` shape with a letter-first local part.
pub fn is_valid_email(email: &str) -> bool {
    has_email_shape(email) && local_part_starts_with_letter(email)
}

/// Present-but-blank counts as zero, which fails.
fn positive_number(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|value| value.is_finite() && *value > 0.0)
}

fn check_positive(
    fields: &FormFields,
    key: &str,
    err: ValidationError,
) -> Result<Option<f64>, ValidationError> {
    match fields.get(key) {
        None => Ok(None),
        Some(raw) => positive_number(raw).map(Some).ok_or(err),
    }
}

/// Validate a quote form.
///
/// Order: area size, budget, phone, email shape, email local part.
pub fn validate_quote(
    fields: &FormFields,
    profile: FormProfile,
) -> Result<ValidatedQuote, ValidationError> {
    let area_size = check_positive(fields, "area_size", ValidationError::AreaSize)?;
    let budget = check_positive(fields, "budget", ValidationError::Budget)?;

    let digits = normalize_phone(fields.get("phone").unwrap_or(""));
    let phone = if digits.is_empty() && !profile.phone_required() {
        None
    } else if digits.len() == PHONE_DIGITS {
        Some(digits)
    } else {
        return Err(ValidationError::Phone);
    };

    let email = fields.non_blank("email").map(str::to_string);
    if let Some(email) = &email {
        if !has_email_shape(email) {
            return Err(ValidationError::EmailFormat);
        }
        if !local_part_starts_with_letter(email) {
            return Err(ValidationError::EmailLocalPart);
        }
    }

    let extra = fields
        .iter()
        .filter(|(k, _)| !KNOWN_FIELDS.contains(k) && !RESERVED_FIELDS.contains(k))
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();

    Ok(ValidatedQuote {
        name: fields.non_blank("name").map(str::to_string),
        email,
        phone,
        area_size,
        budget,
        project_details: fields
            .get("project_details")
            .filter(|d| !d.trim().is_empty())
            .map(str::to_string),
        extra,
    })
}

/// Registration form as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Accepted registration with normalized contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    MissingFields,
    PasswordMismatch,
    InvalidEmail,
    EmailLocalPart,
    InvalidPhone,
}

impl RegistrationError {
    pub fn message(&self) -> &'static str {
        match self {
            RegistrationError::MissingFields => "Please fill in all fields.",
            RegistrationError::PasswordMismatch => "Passwords do not match.",
            RegistrationError::InvalidEmail => "Please enter a valid email address.",
            RegistrationError::EmailLocalPart => "Email local part must start with a letter.",
            RegistrationError::InvalidPhone => "Phone number must be exactly 10 digits.",
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for RegistrationError {}

pub fn validate_registration(form: &RegistrationForm) -> Result<Registration, RegistrationError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    let password = form.password.trim();
    let confirm = form.confirm_password.trim();

    if [name, email, phone, password, confirm]
        .iter()
        .any(|v| v.is_empty())
    {
        return Err(RegistrationError::MissingFields);
    }
    if password != confirm {
        return Err(RegistrationError::PasswordMismatch);
    }
    if !has_email_shape(email) {
        return Err(RegistrationError::InvalidEmail);
    }
    if !local_part_starts_with_letter(email) {
        return Err(RegistrationError::EmailLocalPart);
    }

    let digits = normalize_phone(phone);
    if digits.len() != PHONE_DIGITS {
        return Err(RegistrationError::InvalidPhone);
    }

    Ok(Registration {
        name: name.to_string(),
        email: email.to_string(),
        phone: digits,
        role: form.role,
    })
}

/// How the live email hint should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTone {
    None,
    Error,
    Warning,
    Ok,
}

/// Live feedback for an email input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailFeedback {
    Empty,
    InvalidFormat,
    LocalPartNotLetter,
    Gmail,
    OtherDomain,
}

impl EmailFeedback {
    pub fn message(&self) -> &'static str {
        match self {
            EmailFeedback::Empty => "",
            EmailFeedback::InvalidFormat => "Invalid email format",
            EmailFeedback::LocalPartNotLetter => "Email local part must start with a letter",
            EmailFeedback::Gmail => "Valid Gmail address",
            EmailFeedback::OtherDomain => "Valid email but not a Gmail address",
        }
    }

    pub fn tone(&self) -> FeedbackTone {
        match self {
            EmailFeedback::Empty => FeedbackTone::None,
            EmailFeedback::InvalidFormat | EmailFeedback::LocalPartNotLetter => FeedbackTone::Error,
            EmailFeedback::OtherDomain => FeedbackTone::Warning,
            EmailFeedback::Gmail => FeedbackTone::Ok,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, EmailFeedback::Gmail | EmailFeedback::OtherDomain)
    }
}

pub fn email_feedback(email: &str) -> EmailFeedback {
    let email = email.trim();
    if email.is_empty() {
        return EmailFeedback::Empty;
    }
    if !has_email_shape(email) {
        return EmailFeedback::InvalidFormat;
    }
    if !local_part_starts_with_letter(email) {
        return EmailFeedback::LocalPartNotLetter;
    }

    let domain = email
        .split('@')
        .nth(1)
        .unwrap_or_default()
        .to_ascii_lowercase();
    if GMAIL_DOMAINS.contains(&domain.as_str()) {
        EmailFeedback::Gmail
    } else {
        EmailFeedback::OtherDomain
    }
}
