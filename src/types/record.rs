//! Field access for list views and aggregation

use std::fmt;

/// A single field value read off a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    /// Text content, if this is a text field
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    /// Numeric content, if this is a numeric field
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// Whether this value matches a filter selection exactly.
    ///
    /// Text compares case-sensitively; numbers compare by their display form
    /// so that `"5"` selects a quantity of `5.0`.
    pub fn matches_exact(&self, selected: &str) -> bool {
        match self {
            FieldValue::Text(s) => *s == selected,
            FieldValue::Number(n) => selected
                .trim()
                .parse::<f64>()
                .map(|v| v == *n)
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A record that list views can search, filter and sort by field name.
///
/// Returning `None` means the field is missing on this record. Missing
/// values never match a search or filter and sort as the greatest value.
pub trait Record {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// A record carrying stock figures for aggregation
pub trait Stocked {
    fn quantity(&self) -> f64;
    fn price(&self) -> f64;

    /// Stock value of this record (price × quantity)
    fn value(&self) -> f64 {
        self.price() * self.quantity()
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

impl<T: Stocked + ?Sized> Stocked for &T {
    fn quantity(&self) -> f64 {
        (**self).quantity()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_is_case_sensitive_for_text() {
        assert!(FieldValue::Text("IT").matches_exact("IT"));
        assert!(!FieldValue::Text("IT").matches_exact("it"));
    }

    #[test]
    fn test_matches_exact_parses_numbers() {
        assert!(FieldValue::Number(5.0).matches_exact("5"));
        assert!(FieldValue::Number(2.5).matches_exact(" 2.5 "));
        assert!(!FieldValue::Number(5.0).matches_exact("five"));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Text("Laptop").to_string(), "Laptop");
        assert_eq!(FieldValue::Number(12.0).to_string(), "12");
    }
}
