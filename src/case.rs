use enum_iterator::Sequence;
use enum_primitive_derive::Primitive;
use parse_display::{Display, FromStr};

/// How member names are compared when parsing
#[derive(Sequence, Display, FromStr, Primitive, Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[display(style = "snake_case")]
pub enum Case {
    /// Names match regardless of letter case, exact matches win
    #[default]
    Insensitive = 0,

    /// Names must match exactly
    Sensitive = 1,
}

impl Case {
    /// Compare a candidate string against a member name
    pub fn matches(self, candidate: &str, name: &str) -> bool {
        match self {
            Case::Sensitive => candidate == name,
            Case::Insensitive => candidate
                .chars()
                .flat_map(char::to_lowercase)
                .eq(name.chars().flat_map(char::to_lowercase)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_matches() {
        assert!(Case::Insensitive.matches("rEd", "Red"));
        assert!(Case::Insensitive.matches("ÉTÉ", "été"));
        assert!(!Case::Insensitive.matches("Redd", "Red"));

        assert!(Case::Sensitive.matches("Red", "Red"));
        assert!(!Case::Sensitive.matches("red", "Red"));
    }

    #[test]
    fn test_case_display_fromstr() {
        assert_eq!(format!("{}", Case::Insensitive), "insensitive");
        assert_eq!("sensitive".parse::<Case>().unwrap(), Case::Sensitive);
        "Sensitive".parse::<Case>().unwrap_err();
    }

    #[test]
    fn test_case_default_ignores_case() {
        assert_eq!(Case::default(), Case::Insensitive);
    }
}
