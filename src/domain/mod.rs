//! Domain layer for the country picker.
//!
//! Core types independent of the Zellij runtime: the [`Country`] record, the
//! static ISO alpha-2 [`catalog`] it is built from, and the crate's error type.
//!
//! # Organization
//!
//! - [`catalog`]: Static ISO 3166-1 alpha-2 code/name table
//! - [`country`]: Country record and flag path derivation
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use countrypicker::domain::Country;
//!
//! let france = Country::new("FR", "France", "/flags");
//! assert_eq!(france.code, "fr");
//! assert_eq!(france.img_src, "/flags/fr.svg");
//! ```

pub mod catalog;
pub mod country;
pub mod error;

pub use country::{Country, FlagDiscovered};
pub use error::{PickerError, Result};
