use enum_iterator::{all, Sequence};
use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt::Display;

use crate::flags::FlagSet;

/// A closed set of named integral constants.
///
/// Implemented for every type that can list its members in declaration order
/// ([`Sequence`]), name them ([`Display`]) and convert to and from its
/// underlying integer ([`FromPrimitive`] / [`ToPrimitive`]). In practice that
/// means a fieldless enum deriving `Sequence`, `parse_display::Display` and
/// `enum_primitive_derive::Primitive`.
pub trait Enumeration:
    Sequence + Copy + Eq + Display + FromPrimitive + ToPrimitive + 'static
{
    /// The name of this member, i.e. its `Display` output
    fn name(&self) -> String {
        self.to_string()
    }

    /// The underlying integer value of this member.
    ///
    /// Discriminants above `i64::MAX` wrap around.
    fn value(self) -> i64 {
        self.bits() as i64
    }

    /// The underlying value reinterpreted as a bit pattern
    fn bits(self) -> u64 {
        self.to_u64()
            .or_else(|| self.to_i64().map(|v| v as u64))
            .unwrap_or_default()
    }

    /// Find the member whose bit pattern is exactly `bits`
    fn from_bits(bits: u64) -> Option<Self> {
        Self::from_u64(bits).or_else(|| Self::from_i64(bits as i64))
    }

    /// Returns true if every one of `flags` is set in this member
    fn has_flags<I>(self, flags: I) -> bool
    where
        I: IntoIterator<Item = Self>,
    {
        FlagSet::from(self).has_flags(flags)
    }
}

impl<T> Enumeration for T where
    T: Sequence + Copy + Eq + Display + FromPrimitive + ToPrimitive + 'static
{
}

/// Every declared member of `T`, in declaration order
pub fn all_values<T: Enumeration>() -> Vec<T> {
    all::<T>().collect()
}

/// The names of every declared member of `T`, in declaration order
pub fn enum_names<T: Enumeration>() -> Vec<String> {
    all::<T>().map(|member| member.name()).collect()
}

/// The number of declared members of `T`
pub fn enum_count<T: Enumeration>() -> usize {
    T::CARDINALITY
}

/// The member of `T` whose underlying value is `value`, if one is declared
pub fn from_value<T: Enumeration>(value: i64) -> Option<T> {
    T::from_i64(value)
}
