//! User-facing validation messages.
//!
//! A [`Messages`] table always holds every built-in key; form owners may
//! override any of them (typically to translate them) and may add keys of
//! their own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ValidatorError;

pub mod keys {
    pub const MUST_ENTER: &str = "label.error.mustEnter";
    pub const MUST_SELECT: &str = "label.error.mustSelect";
    pub const EMAIL_ADDRESS: &str = "label.error.emailAddress";
    pub const PHONE_NUMBER: &str = "label.error.phoneNumber";
    pub const RANGE: &str = "label.error.range";
    pub const BUTTON_HINT: &str = "label.buttonHint.default";
    pub const MUST_ACCEPT: &str = "label.error.mustAccept";
    pub const SHORT_TEXT_PLACEHOLDER: &str = "block.shortText.placeholder";
}

const DEFAULTS: &[(&str, &str)] = &[
    (
        keys::MUST_ENTER,
        "Sorry, that answer is not valid. Please try to answer the question again.",
    ),
    (
        keys::MUST_SELECT,
        "Sorry, please use the buttons provided to answer the question.",
    ),
    (
        keys::EMAIL_ADDRESS,
        "Sorry, please enter a valid email address.",
    ),
    (keys::PHONE_NUMBER, "Sorry, please enter a valid phone number."),
    (keys::RANGE, "Sorry, please enter a valid number."),
    (
        keys::BUTTON_HINT,
        "Hello, we just wanted to send a friendly follow up. If you would like to stop the survey, just ignore this message and we won't bother you again.",
    ),
    (
        keys::MUST_ACCEPT,
        "We're sorry, but this survey is now over and closed.",
    ),
    (
        keys::SHORT_TEXT_PLACEHOLDER,
        "Sorry, I can't accept any responses now.",
    ),
];

/// Message table: built-in defaults merged with caller overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Messages {
    entries: BTreeMap<String, String>,
}

impl Messages {
    /// Defaults with `overrides` applied on top.
    pub fn with_overrides<K, V>(overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut messages = Self::default();
        messages
            .entries
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        messages
    }

    /// Overrides given as a YAML mapping of key -> message.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidatorError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Overrides given as a JSON object of key -> message.
    pub fn from_json_str(json: &str) -> Result<Self, ValidatorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Message for a built-in key; defaults guarantee presence.
    pub(crate) fn builtin(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Generic "answer not valid" message.
    pub fn default_message(&self) -> &str {
        self.builtin(keys::MUST_ENTER)
    }

    /// Sent when the survey is closed.
    pub fn off_message(&self) -> &str {
        self.builtin(keys::MUST_ACCEPT)
    }

    /// Reminder sent to respondents who stopped answering.
    pub fn follow_up_message(&self) -> &str {
        self.builtin(keys::BUTTON_HINT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            entries: DEFAULTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for Messages {
    fn from(overrides: BTreeMap<String, String>) -> Self {
        Self::with_overrides(overrides)
    }
}

impl From<Messages> for BTreeMap<String, String> {
    fn from(messages: Messages) -> Self {
        messages.entries
    }
}
