//! Bitwise combinations of flags-style enum members.

use enum_iterator::all;
use std::cmp::Reverse;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::case::Case;
use crate::enumeration::Enumeration;
use crate::parse::{combined_bits, ParseEnumError};

/// An OR-combination of members of a flags enum such as
/// `Color { Red = 1, Green = 2, Blue = 4 }`.
///
/// A Rust enum cannot hold `Red | Green`, so combinations are kept here as
/// the raw bit pattern.
pub struct FlagSet<E> {
    bits: u64,
    marker: PhantomData<fn() -> E>,
}

impl<E> FlagSet<E> {
    /// A set with no bits set
    pub const fn empty() -> Self {
        Self::from_bits_retain(0)
    }

    /// A set holding exactly `bits`, whether or not members cover them
    pub const fn from_bits_retain(bits: u64) -> Self {
        Self {
            bits,
            marker: PhantomData,
        }
    }

    /// The raw bit pattern
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl<E: Enumeration> FlagSet<E> {
    /// Every bit used by any declared member
    pub fn all() -> Self {
        all::<E>().collect()
    }

    /// A set holding `bits`, if declared members cover every set bit
    pub fn from_bits(bits: u64) -> Option<Self> {
        (bits & !Self::all().bits == 0).then(|| Self::from_bits_retain(bits))
    }

    /// True if every bit of `flags` is set. A zero flag is always contained.
    pub fn contains(&self, flags: impl Into<Self>) -> bool {
        let flags = flags.into().bits;
        self.bits & flags == flags
    }

    /// True if every one of `flags` is set; an empty list is always true
    pub fn has_flags<I>(&self, flags: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        flags.into_iter().all(|flag| self.contains(flag))
    }

    pub fn insert(&mut self, flags: impl Into<Self>) {
        self.bits |= flags.into().bits;
    }

    pub fn remove(&mut self, flags: impl Into<Self>) {
        self.bits &= !flags.into().bits;
    }

    /// The declared members fully contained in this set, in declaration order.
    ///
    /// Zero-valued members are only yielded for the empty set.
    pub fn iter(&self) -> impl Iterator<Item = E> {
        let bits = self.bits;
        all::<E>().filter(move |member| match member.bits() {
            0 => bits == 0,
            b => bits & b == b,
        })
    }
}

/// Returns true if every one of `flags` is set in `value`.
///
/// `value` may be a single member or a [`FlagSet`]. An empty `flags` list is
/// vacuously true.
pub fn has_flags<E, V, I>(value: V, flags: I) -> bool
where
    E: Enumeration,
    V: Into<FlagSet<E>>,
    I: IntoIterator<Item = E>,
{
    value.into().has_flags(flags)
}

/// Parse a comma separated list of member names and integers into a
/// [`FlagSet`].
///
/// Unlike [`crate::parse_enum`] the combination does not have to be a
/// declared member, but every bit must belong to one.
pub fn parse_flags<E: Enumeration>(input: &str, case: Case) -> Result<FlagSet<E>, ParseEnumError> {
    let trimmed = input.trim();
    let bits = combined_bits::<E>(trimmed, case)?;

    let flags = FlagSet::from_bits(bits).ok_or_else(|| ParseEnumError::unknown_value::<E>(trimmed))?;
    tracing::trace!("Parsed {input:?} as {flags}");
    Ok(flags)
}

impl<E> Clone for FlagSet<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FlagSet<E> {}

impl<E> PartialEq for FlagSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E> Eq for FlagSet<E> {}

impl<E> Hash for FlagSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E> Default for FlagSet<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> fmt::Debug for FlagSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#x})", self.bits)
    }
}

/// Formats as member names joined by `", "`, largest members first taking
/// their bits, e.g. `"Read, Write"` or `"All"`. Bits no member covers make
/// the whole value print as a number.
impl<E: Enumeration> fmt::Display for FlagSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits == 0 {
            return match all::<E>().find(|member| member.bits() == 0) {
                Some(zero) => write!(f, "{zero}"),
                None => f.write_str("0"),
            };
        }

        let mut members: Vec<E> = all::<E>().filter(|member| member.bits() != 0).collect();
        members.sort_by_key(|member| Reverse(member.bits()));

        let mut remaining = self.bits;
        let mut taken = vec![];
        for member in members {
            let b = member.bits();
            if remaining & b == b {
                remaining &= !b;
                taken.push(member);
            }
        }

        if remaining != 0 {
            return write!(f, "{}", self.bits);
        }

        for (i, member) in taken.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}

impl<E: Enumeration> From<E> for FlagSet<E> {
    fn from(member: E) -> Self {
        Self::from_bits_retain(member.bits())
    }
}

impl<E: Enumeration> FromIterator<E> for FlagSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<E: Enumeration> Extend<E> for FlagSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for member in iter {
            self.insert(member);
        }
    }
}

impl<E: Enumeration> BitOr<E> for FlagSet<E> {
    type Output = Self;

    fn bitor(self, rhs: E) -> Self {
        Self::from_bits_retain(self.bits | rhs.bits())
    }
}

impl<E> BitOr for FlagSet<E> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits_retain(self.bits | rhs.bits)
    }
}

impl<E: Enumeration> BitOrAssign<E> for FlagSet<E> {
    fn bitor_assign(&mut self, rhs: E) {
        self.insert(rhs);
    }
}

impl<E> BitOrAssign for FlagSet<E> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl<E> BitAnd for FlagSet<E> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits_retain(self.bits & rhs.bits)
    }
}
