//! Helpers for working with fieldless enums: testing flag combinations,
//! parsing strings into members, listing every member and picking a random
//! one.
//!
//! An enum opts in by deriving the member list, names and underlying values:
//!
//! ```
//! use enum_ext::{all_values, has_flags, parse_enum, Case, FlagSet};
//! use enum_iterator::Sequence;
//! use enum_primitive_derive::Primitive;
//! use parse_display::Display;
//!
//! #[derive(Sequence, Display, Primitive, Debug, Copy, Clone, PartialEq, Eq)]
//! enum Color {
//!     Red = 1,
//!     Green = 2,
//!     Blue = 4,
//! }
//!
//! let value = FlagSet::from(Color::Red) | Color::Green;
//! assert!(has_flags(value, [Color::Red]));
//! assert!(!has_flags(value, [Color::Blue]));
//!
//! assert_eq!(parse_enum::<Color>("red", Case::Insensitive), Ok(Color::Red));
//! assert_eq!(all_values::<Color>(), [Color::Red, Color::Green, Color::Blue]);
//! ```

mod case;
mod enumeration;
mod flags;
mod parse;
mod random;

#[cfg(test)]
mod fixtures;

pub use case::Case;
pub use enumeration::{all_values, enum_count, enum_names, from_value, Enumeration};
pub use flags::{has_flags, parse_flags, FlagSet};
pub use parse::{parse_enum, parse_enum_or, parse_enum_or_default, ParseEnumError, ParseEnumExt};
pub use random::{random_enum, random_enum_with, EmptyEnumError};
