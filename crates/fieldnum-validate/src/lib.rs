//! Response validation for chat-delivered form questions.
//!
//! [`validator`] picks the check for a field's type; every check answers
//! with a [`Validation`] carrying the message to send back when the answer is
//! rejected. Number fields use the locale-aware parser from
//! `fieldnum-parse`, with the locale taken from the field's `md.locale`.

mod error;
mod field;
pub mod messages;
mod validator;

pub use error::ValidatorError;
pub use field::{Field, FieldMetadata, FieldType, PhoneRules, UploadOptions};
pub use messages::Messages;
pub use validator::{FieldValidator, Validation, validate_number, validator};
