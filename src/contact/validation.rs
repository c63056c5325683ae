use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// The five inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    TooShort,
    InvalidFormat,
}

/// Per-field violations from one validation pass. Valid fields have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, ErrorKind>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<ErrorKind> {
        self.entries.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn insert(&mut self, field: Field, kind: ErrorKind) {
        self.entries.insert(field, kind);
    }

    /// Removes the entry for `field`, returning whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ErrorKind)> + '_ {
        self.entries.iter().map(|(field, kind)| (*field, *kind))
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|kind| error_message(field, kind))
    }
}

pub fn error_message(field: Field, kind: ErrorKind) -> &'static str {
    match (field, kind) {
        (Field::Name, ErrorKind::Required) => "Namn är obligatoriskt",
        (Field::Name, _) => "Namn måste vara minst 2 tecken",
        (Field::Email, ErrorKind::Required) => "E-post är obligatoriskt",
        (Field::Email, _) => "Ogiltig e-postadress",
        (Field::Phone, ErrorKind::Required) => "Telefon är obligatoriskt",
        (Field::Phone, _) => "Ogiltigt telefonnummer",
        (Field::Service, _) => "Välj en tjänst",
        (Field::Message, ErrorKind::Required) => "Meddelande är obligatoriskt",
        (Field::Message, _) => "Meddelande måste vara minst 10 tecken",
    }
}

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if let Some(kind) = check_length(&fields.name, NAME_MIN_CHARS) {
        errors.insert(Field::Name, kind);
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, ErrorKind::Required);
    } else if !is_valid_email(&fields.email) {
        errors.insert(Field::Email, ErrorKind::InvalidFormat);
    }

    if fields.phone.trim().is_empty() {
        errors.insert(Field::Phone, ErrorKind::Required);
    } else if !is_valid_phone(&fields.phone) {
        errors.insert(Field::Phone, ErrorKind::InvalidFormat);
    }

    // The placeholder option carries the empty value.
    if fields.service.is_empty() {
        errors.insert(Field::Service, ErrorKind::Required);
    }

    if let Some(kind) = check_length(&fields.message, MESSAGE_MIN_CHARS) {
        errors.insert(Field::Message, kind);
    }

    errors
}

fn check_length(value: &str, min_chars: usize) -> Option<ErrorKind> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(ErrorKind::Required)
    } else if trimmed.encode_utf16().count() < min_chars {
        // Lengths are counted in UTF-16 units, like the browser's `value.length`.
        Some(ErrorKind::TooShort)
    } else {
        None
    }
}

/// `local@domain.tld` with no whitespace anywhere in the raw value.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
        .is_match(value)
}

/// At least 8 characters, all digits, `+`, whitespace, parentheses or hyphens.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE
        .get_or_init(|| Regex::new(r"^[0-9+\s()\-]{8,}$").expect("valid phone pattern"))
        .is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, phone: &str, service: &str, message: &str) -> FormFields {
        FormFields {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_form_reports_required_on_every_field() {
        let errors = validate(&FormFields::default());
        assert_eq!(errors.len(), 5);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(ErrorKind::Required), "{field}");
        }
    }

    #[test]
    fn minimum_lengths_are_inclusive() {
        let errors = validate(&fields("Al", "a@b.se", "0701234567", "murar", "0123456789"));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn short_values_are_too_short_not_required() {
        let errors = validate(&fields(" A ", "a@b.se", "0701234567", "murar", "  012345678  "));
        assert_eq!(errors.get(Field::Name), Some(ErrorKind::TooShort));
        assert_eq!(errors.get(Field::Message), Some(ErrorKind::TooShort));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn whitespace_only_is_required() {
        let errors = validate(&fields("   ", " ", "\t", "", "\n\n"));
        assert_eq!(errors.get(Field::Name), Some(ErrorKind::Required));
        assert_eq!(errors.get(Field::Email), Some(ErrorKind::Required));
        assert_eq!(errors.get(Field::Phone), Some(ErrorKind::Required));
        assert_eq!(errors.get(Field::Message), Some(ErrorKind::Required));
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("anna@example.se"));
        assert!(is_valid_email("a.b+c@mail.example.com"));
        assert!(!is_valid_email("anna"));
        assert!(!is_valid_email("anna@example"));
        assert!(!is_valid_email("@example.se"));
        assert!(!is_valid_email("anna@.se"));
        assert!(!is_valid_email("anna@example."));
        assert!(!is_valid_email("an na@example.se"));
        assert!(!is_valid_email("a@b@c.se"));
        assert!(!is_valid_email(" anna@example.se"));
    }

    #[test]
    fn phone_format() {
        assert!(is_valid_phone("070-123 45 67"));
        assert!(is_valid_phone("+46 (0)70 1234567"));
        assert!(is_valid_phone("12345678"));
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone("070-123 45 6x"));
        assert!(!is_valid_phone("phone: 0701234567"));
    }

    #[test]
    fn invalid_formats_are_reported() {
        let errors = validate(&fields("Anna", "anna@", "12ab", "belysning", "Ny uteplats i sommar"));
        assert_eq!(errors.get(Field::Email), Some(ErrorKind::InvalidFormat));
        assert_eq!(errors.get(Field::Phone), Some(ErrorKind::InvalidFormat));
        assert_eq!(errors.message(Field::Phone), Some("Ogiltigt telefonnummer"));
        assert!(!errors.contains(Field::Name));
        assert!(!errors.contains(Field::Service));
    }

    #[test]
    fn validation_is_pure() {
        let input = fields("A", "bad", "", "", "kort");
        let first = validate(&input);
        let second = validate(&input);
        assert_eq!(first, second);
        assert_eq!(input, fields("A", "bad", "", "", "kort"));
    }

    #[test]
    fn lengths_count_utf16_units() {
        // One emoji is two UTF-16 units, which meets the two-character minimum.
        let errors = validate(&fields("😀", "a@b.se", "0701234567", "murar", "Trädgård 😀😀"));
        assert!(errors.is_empty(), "{errors:?}");
        let errors = validate(&fields("Å", "a@b.se", "0701234567", "murar", "Trädgård"));
        assert_eq!(errors.get(Field::Name), Some(ErrorKind::TooShort));
        assert_eq!(errors.get(Field::Message), Some(ErrorKind::TooShort));
    }

    #[test]
    fn phone_accepts_unicode_whitespace() {
        assert!(is_valid_phone("070\u{3000}123 45 67"));
        assert!(!is_valid_email("anna\u{3000}@example.se"));
    }

    #[test]
    fn field_names_parse() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        let err = "zip".parse::<Field>().unwrap_err();
        assert_eq!(err, UnknownField("zip".to_string()));
        assert_eq!(err.to_string(), "unknown form field `zip`");
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(fields("Anna", "a@b.se", "0701234567", "murar", "x")).unwrap();
        assert_eq!(json["service"], "murar");
        assert_eq!(json["name"], "Anna");
    }
}
