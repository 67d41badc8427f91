//! Enums shared by the unit tests.

use enum_iterator::Sequence;
use enum_primitive_derive::Primitive;
use num_traits::{FromPrimitive, ToPrimitive};
use parse_display::Display;
use std::fmt;
use tracing::Level;

pub fn init_logging() {
    // several tests race to install it, only the first wins
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// flags style, as in `Red | Green`
#[derive(Sequence, Display, Primitive, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 1,
    Green = 2,
    Blue = 4,
}

#[derive(Sequence, Display, Primitive, Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Weekday {
    #[default]
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

/// flags with a zero member and a declared combination
#[derive(Sequence, Display, Primitive, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Permission {
    None = 0,
    Read = 1,
    Write = 2,
    Execute = 4,
    All = 7,
}

#[derive(Sequence, Display, Primitive, Debug, Copy, Clone, PartialEq, Eq)]
#[display(style = "kebab-case")]
pub enum Shade {
    LightGray = 10,
    DarkGray = 20,
}

/// names differing only by case
#[derive(Sequence, Display, Primitive, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Letter {
    #[display("x")]
    Lower = 1,
    #[display("X")]
    Upper = 2,
}

/// names that look like numbers or lists
#[derive(Sequence, Display, Primitive, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Oddity {
    #[display("a,b")]
    Ab = 1,
    #[display("2nd")]
    Second = 2,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Nothing {}

impl Sequence for Nothing {
    const CARDINALITY: usize = 0;

    fn next(&self) -> Option<Self> {
        match *self {}
    }

    fn previous(&self) -> Option<Self> {
        match *self {}
    }

    fn first() -> Option<Self> {
        None
    }

    fn last() -> Option<Self> {
        None
    }
}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl FromPrimitive for Nothing {
    fn from_i64(_n: i64) -> Option<Self> {
        None
    }

    fn from_u64(_n: u64) -> Option<Self> {
        None
    }
}

impl ToPrimitive for Nothing {
    fn to_i64(&self) -> Option<i64> {
        match *self {}
    }

    fn to_u64(&self) -> Option<u64> {
        match *self {}
    }
}
