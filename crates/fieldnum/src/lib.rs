//! Meta crate that re-exports the fieldnum building blocks. Depend on this
//! crate and opt into layers via feature flags, keeping access to the
//! underlying crates when deeper integration is required.

#[cfg(feature = "common")]
pub use fieldnum_common as common;

#[cfg(feature = "parse")]
pub use fieldnum_parse as parse;

#[cfg(feature = "validate")]
pub use fieldnum_validate as validate;

#[cfg(feature = "common")]
pub use fieldnum_common::{LocaleError, LocaleSeparators, LocaleTag, NumericInput};

#[cfg(feature = "parse")]
pub use fieldnum_parse::{
    NumberParser, disambiguate, is_number, normalize, parse_number, resolve_separators,
    same_script,
};

#[cfg(feature = "validate")]
pub use fieldnum_validate::{
    Field, FieldMetadata, FieldType, FieldValidator, Messages, PhoneRules, Validation,
    ValidatorError, validate_number, validator,
};
