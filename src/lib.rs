//! Small, independent utility functions packaged as a reusable library.
//!
//! The structural core is a pair of recursive transforms over a JSON-like
//! [`Value`] graph: key renaming ([`transform_keys`] and its case-named
//! wrappers) and deep value replacement ([`replace_value`]). Around them sit
//! leaf modules for arrays, strings, dates, numbers (including a Chinese
//! numeral formatter), statistics, colors, and regex format validators.
//!
//! Every function is synchronous and side-effect-free; validators return
//! `false` rather than erroring, and the few fallible operations return the
//! crate [`Result`].

pub mod array;
pub mod color;
pub mod date;
pub mod error;
pub mod format;
pub mod identity;
pub mod number;
pub mod replace;
pub mod statistics;
pub mod string;
pub mod transform;
pub mod value;

pub use error::{Error, Result};
pub use identity::is_valid_identity;
pub use replace::{replace_value, Matcher, Substitute};
pub use transform::{camel_case_keys, pascal_case_keys, snake_case_keys, transform_keys};
pub use value::{same_value_zero, Mapping, Value};
