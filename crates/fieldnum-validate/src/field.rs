use std::fmt::{self, Display};
use std::str::FromStr;

use fieldnum_common::LocaleTag;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ValidatorError;

/// A form question as delivered by the form provider, with its custom
/// metadata already extracted into `md`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "ref")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<FieldMetadata>,
}

impl Field {
    pub fn new(kind: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: String::new(),
            reference: reference.into(),
            md: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_metadata(mut self, md: FieldMetadata) -> Self {
        self.md = Some(md);
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidatorError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ValidatorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn field_type(&self) -> Result<FieldType, ValidatorError> {
        self.kind.parse()
    }

    /// Locale the answer is expected in; `en-US` unless `md.locale` says
    /// otherwise.
    pub fn locale(&self) -> &str {
        self.md
            .as_ref()
            .and_then(|md| md.locale.as_deref())
            .unwrap_or(LocaleTag::DEFAULT)
    }
}

/// Custom per-field metadata. Keys this crate does not interpret are kept
/// in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload: Option<UploadOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<PhoneRules>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldMetadata {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_response_message(mut self, message: impl Into<String>) -> Self {
        self.response_message = Some(message.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_upload_type(mut self, kind: impl Into<String>) -> Self {
        self.upload = Some(UploadOptions { kind: kind.into() });
        self
    }

    pub fn with_phone_rules(mut self, country: impl Into<String>, mobile: bool) -> Self {
        self.validate = Some(PhoneRules {
            country: Some(country.into()),
            mobile,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOptions {
    #[serde(rename = "type")]
    pub kind: String,
}

/// `md.validate` of a phone question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRules {
    /// Region (ISO 3166-1 alpha-2) for numbers written without `+` and a
    /// country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Accept mobile numbers only.
    #[serde(default)]
    pub mobile: bool,
}

/// Field types that can be validated from the field descriptor alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Number,
    ShortText,
    LongText,
    Statement,
    ThankyouScreen,
    Share,
    Webview,
    Wait,
    Notify,
    Email,
    PhoneNumber,
    Upload,
}

impl FieldType {
    pub const ALL: [FieldType; 12] = [
        FieldType::Number,
        FieldType::ShortText,
        FieldType::LongText,
        FieldType::Statement,
        FieldType::ThankyouScreen,
        FieldType::Share,
        FieldType::Webview,
        FieldType::Wait,
        FieldType::Notify,
        FieldType::Email,
        FieldType::PhoneNumber,
        FieldType::Upload,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::ShortText => "short_text",
            FieldType::LongText => "long_text",
            FieldType::Statement => "statement",
            FieldType::ThankyouScreen => "thankyou_screen",
            FieldType::Share => "share",
            FieldType::Webview => "webview",
            FieldType::Wait => "wait",
            FieldType::Notify => "notify",
            FieldType::Email => "email",
            FieldType::PhoneNumber => "phone_number",
            FieldType::Upload => "upload",
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidatorError::UnknownFieldType(s.to_string()))
    }
}
