//! # formkit-validate
//!
//! Error messages for failed form validation rules.
//!
//! A [`ValidationError`] records which rule failed, for which field, with
//! which value and rule parameters. An [`ErrorFormatter`] turns it into a
//! message: a custom message registered on the field's validation context,
//! a localized message from a [`Localizer`], or a default
//! `"Validation rule <rule> failed for <label>"`. Templates may contain tags
//! (`:field`, `:label`, `:value`, `:rule`, `:param:N`) that are filled in
//! from the error.
//!
//! ## Example
//!
//! ```rust,ignore
//! use formkit_validate::prelude::*;
//! use std::sync::Arc;
//!
//! let field: Arc<dyn Field> = Arc::new(FormField::new("username", "User name"));
//! let error = ValidationError::new(field, "ab", "min_length", vec![Param::from(3_i64)]);
//!
//! let formatter = ErrorFormatter::builder()
//!     .localizer(Catalog::english())
//!     .build();
//!
//! assert_eq!(
//!     formatter.message(&error),
//!     "The field User name has to contain at least 3 characters."
//! );
//! ```
//!
//! ## Configuration
//!
//! [`ErrorFormatConfig::from_env`] reads:
//!
//! - `VALIDATION_OPEN_SINGLE_ERROR` - text put before each message
//! - `VALIDATION_CLOSE_SINGLE_ERROR` - text put after each message
//! - `VALIDATION_QUOTE_LABELS` - quote labels containing spaces

mod config;
mod error;
mod field;
mod formatter;
mod i18n;
mod tags;
mod value;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, ErrorFormatConfig, ENV_PREFIX};
pub use error::{
    ApiValidationError, BuildError, ErrorBody, FieldErrorResponse, FormattedError,
    ValidationError, ValidationErrors,
};
pub use field::{CustomMessages, Field, FormField, Label, RuleMessages};
pub use formatter::{ErrorFormatter, ErrorFormatterBuilder};
pub use i18n::{Catalog, CatalogError, Localizer, NAMESPACE};
pub use tags::replace_tags;
pub use value::{render_value, Param, ARRAY_PLACEHOLDER};

/// Prelude module for error formatting
pub mod prelude {
    pub use crate::config::ErrorFormatConfig;
    pub use crate::error::{ValidationError, ValidationErrors};
    pub use crate::field::{CustomMessages, Field, FormField, Label, RuleMessages};
    pub use crate::formatter::ErrorFormatter;
    pub use crate::i18n::{Catalog, Localizer};
    pub use crate::value::Param;
}
