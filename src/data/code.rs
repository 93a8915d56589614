//! Route code validation

use crate::data::{CodeError, RouteDataset};
use std::fmt;

/// A route code that is well formed and present in the dataset it was parsed against
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteCode(String);

impl RouteCode {
    /// Validate a (trimmed) token against the dataset
    pub fn parse(token: &str, dataset: &RouteDataset) -> Result<Self, CodeError> {
        if !is_well_formed(token) {
            return Err(CodeError::Malformed(token.to_string()));
        }
        if !dataset.contains(token) {
            return Err(CodeError::Unknown(token.to_string()));
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exactly two ASCII digits followed by one uppercase ASCII letter, e.g. `05B`
pub fn is_well_formed(token: &str) -> bool {
    match token.as_bytes() {
        [d1, d2, letter] => {
            d1.is_ascii_digit() && d2.is_ascii_digit() && letter.is_ascii_uppercase()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dataset() -> RouteDataset {
        RouteDataset::from_json_str(r#"{"05B": ["Plaza", "Mall"], "01A": ["Mall"]}"#).unwrap()
    }

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed("05B"));
        assert!(is_well_formed("99Z"));
        assert!(!is_well_formed("5B"));
        assert!(!is_well_formed("05b"));
        assert!(!is_well_formed("005B"));
        assert!(!is_well_formed("AB5"));
        assert!(!is_well_formed(""));
        // Non-ASCII digits and letters are rejected
        assert!(!is_well_formed("٠٥B"));
        assert!(!is_well_formed("05É"));
    }

    #[test]
    fn test_parse_known_code() {
        let dataset = create_test_dataset();
        let code = RouteCode::parse("05B", &dataset).unwrap();
        assert_eq!(code.as_str(), "05B");
        assert_eq!(code.to_string(), "05B");
    }

    #[test]
    fn test_parse_rejects_malformed_before_lookup() {
        let dataset = create_test_dataset();
        for token in ["5B", "05b", "005B", "AB5"] {
            assert_eq!(
                RouteCode::parse(token, &dataset),
                Err(CodeError::Malformed(token.to_string()))
            );
        }
    }

    #[test]
    fn test_parse_unknown_code() {
        let dataset = create_test_dataset();
        assert_eq!(
            RouteCode::parse("09Z", &dataset),
            Err(CodeError::Unknown("09Z".to_string()))
        );
    }
}
