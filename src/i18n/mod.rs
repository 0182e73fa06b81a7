//! Internationalization (i18n) for the two supported display languages.
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `locale`: Validated `Locale` type, default selection and header detection
//! - `strings`: Typed translation table, one struct per page section
//! - `validator`: Startup consistency checks for the translation table
//!
//! # Example
//!
//! ```rust,ignore
//! use franchise_site::i18n::Locale;
//!
//! let locale = Locale::detect(Some("zh-CN,zh;q=0.9"));
//! let title = locale.strings().market.title;
//! ```

mod locale;
mod registry;
pub mod strings;
mod validator;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::Translations;
pub use validator::{TranslationValidator, ValidationReport};
