use enum_iterator::all;
use std::any::type_name;
use thiserror::Error;

use crate::case::Case;
use crate::enumeration::Enumeration;

/// Errors produced while turning a string into an enum member
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// there was no string at all
    #[error("No input given to parse as {type_name}")]
    MissingInput { type_name: &'static str },

    /// the string was empty or only whitespace
    #[error("Cannot parse an empty string as {type_name}")]
    Empty { type_name: &'static str },

    /// an item was not the name of any member
    #[error("{input:?} is not a member of {type_name}")]
    UnknownName {
        input: String,
        type_name: &'static str,
    },

    /// a number, or a combination of members, that no member is declared with
    #[error("{input:?} is not a declared value of {type_name}")]
    UnknownValue {
        input: String,
        type_name: &'static str,
    },
}

impl ParseEnumError {
    pub(crate) fn missing_input<T>() -> Self {
        Self::MissingInput {
            type_name: type_name::<T>(),
        }
    }

    pub(crate) fn empty<T>() -> Self {
        Self::Empty {
            type_name: type_name::<T>(),
        }
    }

    pub(crate) fn unknown_name<T>(input: &str) -> Self {
        Self::UnknownName {
            input: input.to_string(),
            type_name: type_name::<T>(),
        }
    }

    pub(crate) fn unknown_value<T>(input: &str) -> Self {
        Self::UnknownValue {
            input: input.to_string(),
            type_name: type_name::<T>(),
        }
    }

    /// True when the error means no string was supplied
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }

    /// True when a string was supplied but matched nothing
    pub fn is_invalid_format(&self) -> bool {
        !self.is_missing_input()
    }
}

/// Parse `input` as a member of `T`.
///
/// The input is trimmed, then read as a comma separated list of items. Each
/// item is either a member name, compared according to `case`, or an integer
/// (anything starting with a digit, `+` or `-`). The values of all items are
/// OR-ed together and the result must be a declared member, so a single item
/// resolves to itself and `"Read, Write"` only parses if something like
/// `ReadWrite = 3` exists. Use [`crate::parse_flags`] for arbitrary
/// combinations.
pub fn parse_enum<T: Enumeration>(input: &str, case: Case) -> Result<T, ParseEnumError> {
    let trimmed = input.trim();
    let bits = combined_bits::<T>(trimmed, case)?;

    let member = T::from_bits(bits).ok_or_else(|| ParseEnumError::unknown_value::<T>(trimmed))?;
    tracing::trace!("Parsed {input:?} as {}::{member}", type_name::<T>());
    Ok(member)
}

/// Parse `input` as a member of `T`, returning `default` if there is no input
/// or it does not parse.
pub fn parse_enum_or<T: Enumeration>(input: Option<&str>, case: Case, default: T) -> T {
    let Some(input) = input else {
        tracing::debug!("No input to parse as {}, using {default}", type_name::<T>());
        return default;
    };

    match parse_enum(input, case) {
        Ok(member) => member,
        Err(e) => {
            tracing::debug!("{e}, using {default}");
            default
        }
    }
}

/// Parse `input` as a member of `T`, falling back to `T::default()`
pub fn parse_enum_or_default<T>(input: Option<&str>, case: Case) -> T
where
    T: Enumeration + Default,
{
    parse_enum_or(input, case, T::default())
}

/// OR together the values of every comma separated item in `trimmed`
pub(crate) fn combined_bits<T: Enumeration>(trimmed: &str, case: Case) -> Result<u64, ParseEnumError> {
    if trimmed.is_empty() {
        return Err(ParseEnumError::empty::<T>());
    }

    // a name may itself contain commas
    if let Some(member) = find_by_name::<T>(trimmed, case) {
        return Ok(member.bits());
    }

    trimmed.split(',').map(str::trim).try_fold(0, |acc, item| {
        item_bits::<T>(item, case).map(|bits| acc | bits)
    })
}

fn item_bits<T: Enumeration>(item: &str, case: Case) -> Result<u64, ParseEnumError> {
    let numeric = item.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '-');
    if numeric {
        if let Some(bits) = parse_integer(item) {
            return Ok(bits);
        }
    }

    // names like "2nd" start with a digit too
    find_by_name::<T>(item, case)
        .map(Enumeration::bits)
        .ok_or_else(|| match numeric {
            true => ParseEnumError::unknown_value::<T>(item),
            false => ParseEnumError::unknown_name::<T>(item),
        })
}

fn parse_integer(item: &str) -> Option<u64> {
    item.parse::<i64>()
        .map(|v| v as u64)
        .or_else(|_| item.parse::<u64>())
        .ok()
}

/// Find a member by name, preferring an exact match over a case-insensitive one
fn find_by_name<T: Enumeration>(item: &str, case: Case) -> Option<T> {
    if item.is_empty() {
        return None;
    }

    all::<T>()
        .find(|member| Case::Sensitive.matches(item, &member.name()))
        .or_else(|| match case {
            Case::Sensitive => None,
            Case::Insensitive => all::<T>().find(|member| case.matches(item, &member.name())),
        })
}

/// Parsing helpers as methods on strings and optional strings.
///
/// `None` stands in for a missing string: the strict methods fail with
/// [`ParseEnumError::MissingInput`] and the defaulting ones fall back.
pub trait ParseEnumExt {
    /// The string to parse, if there is one
    fn enum_input(&self) -> Option<&str>;

    /// Parse as a member of `T`, ignoring case
    fn parse_enum<T: Enumeration>(&self) -> Result<T, ParseEnumError> {
        self.parse_enum_with(Case::default())
    }

    /// Parse as a member of `T`, comparing names according to `case`
    fn parse_enum_with<T: Enumeration>(&self, case: Case) -> Result<T, ParseEnumError> {
        match self.enum_input() {
            Some(input) => parse_enum(input, case),
            None => Err(ParseEnumError::missing_input::<T>()),
        }
    }

    /// Parse as a member of `T`, ignoring case, or return `default`
    fn parse_enum_or<T: Enumeration>(&self, default: T) -> T {
        parse_enum_or(self.enum_input(), Case::default(), default)
    }

    /// Parse as a member of `T`, ignoring case, or return `T::default()`
    fn parse_enum_or_default<T: Enumeration + Default>(&self) -> T {
        parse_enum_or_default(self.enum_input(), Case::default())
    }
}

impl ParseEnumExt for str {
    fn enum_input(&self) -> Option<&str> {
        Some(self)
    }
}

impl ParseEnumExt for String {
    fn enum_input(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<S: AsRef<str>> ParseEnumExt for Option<S> {
    fn enum_input(&self) -> Option<&str> {
        self.as_ref().map(|s| s.as_ref())
    }
}
