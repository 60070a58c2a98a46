//! Field-type dispatch: turns a [`Field`] into the validator its responses
//! are checked with.

use email_address::EmailAddress;
use fieldnum_common::NumericInput;
use fieldnum_parse::NumberParser;
use phonenumber::country;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::messages::keys;
use crate::{Field, FieldType, Messages, ValidatorError};

/// Outcome of checking one response. `message` is what the respondent is
/// told when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl Validation {
    fn new(valid: bool, message: &str) -> Self {
        Self {
            valid,
            message: message.to_string(),
        }
    }
}

/// A response validator for one field, built once per field and reused for
/// every response to it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValidator {
    /// Locale-aware numeric answer.
    Number { parser: NumberParser, message: String },
    /// Any text answer.
    Text { message: String },
    /// Fields that do not take an answer; every response is rejected.
    Statement { message: String },
    /// Response must carry the field's `md.ref`; both absent also matches.
    Notify {
        reference: Option<String>,
        message: String,
    },
    /// Syntactically valid email address.
    Email { message: String },
    /// Phone number valid for `country`, and a mobile number when `mobile`.
    Phone {
        country: Option<country::Id>,
        mobile: bool,
        message: String,
    },
    /// Response must be an attachment of the configured type with a URL.
    Upload {
        upload_type: Option<String>,
        message: String,
    },
}

impl FieldValidator {
    pub fn validate(&self, response: &Value) -> Validation {
        match self {
            FieldValidator::Number { parser, message } => {
                let valid = numeric_input(response).is_some_and(|input| parser.is_number(input));
                Validation::new(valid, message)
            }
            FieldValidator::Text { message } => Validation::new(response.is_string(), message),
            FieldValidator::Statement { message } => Validation::new(false, message),
            FieldValidator::Notify { reference, message } => {
                let got = response.get("ref").and_then(Value::as_str);
                Validation::new(got == reference.as_deref(), message)
            }
            FieldValidator::Email { message } => {
                let valid = response.as_str().is_some_and(EmailAddress::is_valid);
                Validation::new(valid, message)
            }
            FieldValidator::Phone {
                country,
                mobile,
                message,
            } => {
                let valid = phone_text(response)
                    .is_some_and(|text| is_phone(&text, *country, *mobile));
                Validation::new(valid, message)
            }
            FieldValidator::Upload {
                upload_type,
                message,
            } => {
                let kind = response.get("type").and_then(Value::as_str);
                let has_url = response
                    .pointer("/payload/url")
                    .and_then(Value::as_str)
                    .is_some_and(|url| !url.is_empty());
                let valid = kind.is_some() && kind == upload_type.as_deref() && has_url;
                Validation::new(valid, message)
            }
        }
    }

    /// The message reported on failure.
    pub fn message(&self) -> &str {
        match self {
            FieldValidator::Number { message, .. }
            | FieldValidator::Text { message }
            | FieldValidator::Statement { message }
            | FieldValidator::Notify { message, .. }
            | FieldValidator::Email { message }
            | FieldValidator::Phone { message, .. }
            | FieldValidator::Upload { message, .. } => message,
        }
    }
}

/// JSON answers the number parser accepts. Objects, arrays and `null` are
/// never numbers.
fn numeric_input(response: &Value) -> Option<NumericInput<'_>> {
    match response {
        Value::String(s) => Some(NumericInput::Text(s)),
        Value::Number(n) => n.as_f64().map(NumericInput::Number),
        Value::Bool(b) => Some(NumericInput::Boolean(*b)),
        _ => None,
    }
}

/// Phone answers arrive as text or, from some clients, as bare JSON numbers.
fn phone_text(response: &Value) -> Option<String> {
    match response {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_phone(text: &str, country: Option<country::Id>, mobile: bool) -> bool {
    let Ok(number) = phonenumber::parse(country, text) else {
        return false;
    };
    if !phonenumber::is_valid(&number) {
        return false;
    }
    !mobile
        || matches!(
            number.number_type(&phonenumber::metadata::DATABASE),
            phonenumber::Type::Mobile | phonenumber::Type::FixedLineOrMobile
        )
}

/// Validator for a `number` field, reading the locale from `md.locale`.
pub fn validate_number(field: &Field, messages: &Messages) -> FieldValidator {
    FieldValidator::Number {
        parser: NumberParser::for_locale(field.locale()),
        message: messages.builtin(keys::RANGE).to_string(),
    }
}

fn validate_text(messages: &Messages) -> FieldValidator {
    FieldValidator::Text {
        message: messages.builtin(keys::MUST_ENTER).to_string(),
    }
}

fn validate_statement(field: &Field, messages: &Messages) -> FieldValidator {
    let custom = field
        .md
        .as_ref()
        .and_then(|md| md.response_message.as_deref());
    FieldValidator::Statement {
        message: custom
            .unwrap_or_else(|| messages.builtin(keys::SHORT_TEXT_PLACEHOLDER))
            .to_string(),
    }
}

fn validate_notify(field: &Field, messages: &Messages) -> FieldValidator {
    FieldValidator::Notify {
        reference: field.md.as_ref().and_then(|md| md.reference.clone()),
        message: messages.builtin(keys::MUST_SELECT).to_string(),
    }
}

fn validate_email(messages: &Messages) -> FieldValidator {
    FieldValidator::Email {
        message: messages.builtin(keys::EMAIL_ADDRESS).to_string(),
    }
}

fn validate_phone(field: &Field, messages: &Messages) -> FieldValidator {
    let rules = field.md.as_ref().and_then(|md| md.validate.as_ref());
    let country = rules
        .and_then(|r| r.country.as_deref())
        .filter(|c| !c.is_empty())
        .and_then(|c| {
            c.to_ascii_uppercase()
                .parse::<country::Id>()
                .inspect_err(|_e| {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(field = %field.reference, country = c, "unknown phone region");
                })
                .ok()
        });
    FieldValidator::Phone {
        country,
        mobile: rules.is_some_and(|r| r.mobile),
        message: messages.builtin(keys::PHONE_NUMBER).to_string(),
    }
}

fn validate_upload(field: &Field, messages: &Messages) -> FieldValidator {
    FieldValidator::Upload {
        upload_type: field
            .md
            .as_ref()
            .and_then(|md| md.upload.as_ref())
            .map(|upload| upload.kind.clone()),
        message: messages.builtin(keys::MUST_ENTER).to_string(),
    }
}

/// Build the validator for `field`.
///
/// Fails only for field types without a validator, which means the form
/// configuration is wrong and should be rejected before any response is
/// processed.
pub fn validator(field: &Field, messages: &Messages) -> Result<FieldValidator, ValidatorError> {
    let kind = field.field_type().inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::warn!(field = %field.reference, error = %_e, "unsupported field type");
    })?;

    Ok(match kind {
        FieldType::Number => validate_number(field, messages),
        FieldType::ShortText | FieldType::LongText => validate_text(messages),
        FieldType::Statement
        | FieldType::ThankyouScreen
        | FieldType::Share
        | FieldType::Webview
        | FieldType::Wait => validate_statement(field, messages),
        FieldType::Notify => validate_notify(field, messages),
        FieldType::Email => validate_email(messages),
        FieldType::PhoneNumber => validate_phone(field, messages),
        FieldType::Upload => validate_upload(field, messages),
    })
}
