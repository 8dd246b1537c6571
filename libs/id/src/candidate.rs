//! Untyped identifier candidates and the two validation flavors.
//!
//! A [`Candidate`] is whatever a page component scraped out of a route
//! segment, query string, form field, or API payload before anyone has
//! decided whether it is a real identifier.

use crate::types::EntityId;

/// An untyped value that may represent an entity identifier.
///
/// Route and query values are always [`Candidate::Text`]; values already
/// decoded from JSON payloads may be numeric. [`Candidate::Missing`]
/// stands in for an absent value (`None`, JSON `null`).
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// No value was supplied.
    Missing,
    /// An integer value.
    Int(i64),
    /// A floating-point value (JSON numbers outside the `i64` range).
    Float(f64),
    /// A textual value, e.g. from a URL or form field.
    Text(String),
    /// A boolean value. Never a valid identifier, but legal as a generic
    /// navigation parameter.
    Bool(bool),
}

impl Candidate {
    /// Strict identifier predicate.
    ///
    /// True iff the candidate is already numeric, finite, integer-valued,
    /// strictly positive, and representable as `i64`. Textual candidates
    /// are always false, numeric strings included; use
    /// [`Candidate::to_valid_id`] for input that originates as text.
    #[must_use]
    pub fn is_valid_id(&self) -> bool {
        match self {
            Candidate::Int(n) => *n > 0,
            Candidate::Float(f) => {
                // `i64::MAX as f64` rounds up to 2^63, which is one past
                // the largest representable i64, so the bound must be
                // strict.
                f.is_finite() && f.fract() == 0.0 && *f > 0.0 && *f < i64::MAX as f64
            }
            _ => false,
        }
    }

    /// Coercing identifier conversion.
    ///
    /// Accepts what [`Candidate::is_valid_id`] accepts, plus textual
    /// candidates in canonical positive-integer form (`^[1-9][0-9]*$`).
    /// Everything else, including empty text, signed or decimal numbers,
    /// leading zeros, and the literal words `"NaN"` / `"undefined"` /
    /// `"null"`, yields `None`.
    #[must_use]
    pub fn to_valid_id(&self) -> Option<EntityId> {
        match self {
            Candidate::Int(n) => EntityId::new(*n).ok(),
            Candidate::Float(f) if self.is_valid_id() => EntityId::new(*f as i64).ok(),
            Candidate::Text(s) => EntityId::parse_str(s).ok(),
            _ => None,
        }
    }

    /// Returns true if no value was supplied.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Candidate::Missing)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::Missing => write!(f, "<missing>"),
            Candidate::Int(n) => write!(f, "{n}"),
            Candidate::Float(x) => write!(f, "{x}"),
            Candidate::Text(s) => write!(f, "{s}"),
            Candidate::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Candidate {
    fn from(n: i64) -> Self {
        Candidate::Int(n)
    }
}

impl From<i32> for Candidate {
    fn from(n: i32) -> Self {
        Candidate::Int(i64::from(n))
    }
}

impl From<u32> for Candidate {
    fn from(n: u32) -> Self {
        Candidate::Int(i64::from(n))
    }
}

impl From<f64> for Candidate {
    fn from(x: f64) -> Self {
        Candidate::Float(x)
    }
}

impl From<bool> for Candidate {
    fn from(b: bool) -> Self {
        Candidate::Bool(b)
    }
}

impl From<&str> for Candidate {
    fn from(s: &str) -> Self {
        Candidate::Text(s.to_string())
    }
}

impl From<String> for Candidate {
    fn from(s: String) -> Self {
        Candidate::Text(s)
    }
}

impl From<EntityId> for Candidate {
    fn from(id: EntityId) -> Self {
        Candidate::Int(id.get())
    }
}

impl<T: Into<Candidate>> From<Option<T>> for Candidate {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Candidate::Missing,
        }
    }
}

impl From<&serde_json::Value> for Candidate {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Candidate::Missing,
            Value::Bool(b) => Candidate::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Candidate::Int(i),
                None => Candidate::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Candidate::Text(s.clone()),
            // Compound payload values carry no identifier meaning; keep
            // their compact JSON text for diagnostics.
            other => Candidate::Text(other.to_string()),
        }
    }
}

impl From<serde_json::Value> for Candidate {
    fn from(value: serde_json::Value) -> Self {
        Candidate::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strict_predicate_accepts_positive_integers() {
        assert!(Candidate::Int(1).is_valid_id());
        assert!(Candidate::Int(42).is_valid_id());
        assert!(Candidate::Float(5.0).is_valid_id());
    }

    #[test]
    fn strict_predicate_rejects_non_positive_and_non_integral() {
        assert!(!Candidate::Int(0).is_valid_id());
        assert!(!Candidate::Int(-7).is_valid_id());
        assert!(!Candidate::Float(1.5).is_valid_id());
        assert!(!Candidate::Float(f64::NAN).is_valid_id());
        assert!(!Candidate::Float(f64::INFINITY).is_valid_id());
        assert!(!Candidate::Float(-2.0).is_valid_id());
    }

    #[test]
    fn strict_predicate_rejects_all_text() {
        // Numeric strings are not numbers; coercion is a separate step.
        assert!(!Candidate::from("5").is_valid_id());
        assert!(!Candidate::from("abc").is_valid_id());
        assert!(!Candidate::Missing.is_valid_id());
        assert!(!Candidate::Bool(true).is_valid_id());
    }

    #[test]
    fn coercion_parses_canonical_numeric_text() {
        assert_eq!(Candidate::from("5").to_valid_id().map(|id| id.get()), Some(5));
        assert_eq!(
            Candidate::from("123456").to_valid_id().map(|id| id.get()),
            Some(123456)
        );
    }

    #[test]
    fn coercion_rejects_non_canonical_text() {
        for s in [
            "", "0", "-3", "+3", "1.5", "007", " 5", "5 ", "abc", "12ab", "NaN", "undefined",
            "null", "9999999999999999999999",
        ] {
            assert_eq!(Candidate::from(s).to_valid_id(), None, "input: {s:?}");
        }
    }

    #[test]
    fn coercion_passes_through_valid_numbers() {
        assert_eq!(Candidate::Int(9).to_valid_id().map(|id| id.get()), Some(9));
        assert_eq!(Candidate::Float(4.0).to_valid_id().map(|id| id.get()), Some(4));
        assert_eq!(Candidate::Int(0).to_valid_id(), None);
        assert_eq!(Candidate::Float(2.5).to_valid_id(), None);
        assert_eq!(Candidate::Missing.to_valid_id(), None);
        assert_eq!(Candidate::Bool(false).to_valid_id(), None);
    }

    #[test]
    fn floats_at_the_i64_boundary_are_rejected() {
        // 2^63 is one past i64::MAX; accepting it would saturate the
        // conversion and silently yield a different identifier.
        let two_pow_63 = 9223372036854775808.0f64;
        assert!(!Candidate::Float(two_pow_63).is_valid_id());
        assert_eq!(Candidate::Float(two_pow_63).to_valid_id(), None);
        assert_eq!(Candidate::Float(f64::MAX).to_valid_id(), None);

        // The largest integer-valued f64 below 2^63 still converts
        // exactly.
        let below = 9223372036854774784.0f64;
        assert!(Candidate::Float(below).is_valid_id());
        assert_eq!(
            Candidate::Float(below).to_valid_id().map(|id| id.get()),
            Some(9223372036854774784)
        );
    }

    #[test]
    fn json_numbers_past_i64_never_coerce() {
        // Arrives as Float via the JSON conversion; must not saturate to
        // i64::MAX and leak into a URL.
        let candidate = Candidate::from(serde_json::json!(9223372036854775808u64));
        assert_eq!(candidate, Candidate::Float(9223372036854775808.0));
        assert!(!candidate.is_valid_id());
        assert_eq!(candidate.to_valid_id(), None);
    }

    #[test]
    fn json_values_map_onto_candidates() {
        assert_eq!(Candidate::from(serde_json::json!(null)), Candidate::Missing);
        assert_eq!(Candidate::from(serde_json::json!(3)), Candidate::Int(3));
        assert_eq!(
            Candidate::from(serde_json::json!("17")),
            Candidate::Text("17".to_string())
        );
        assert_eq!(
            Candidate::from(serde_json::json!({"a": 1})),
            Candidate::Text("{\"a\":1}".to_string())
        );
    }

    proptest! {
        // Canonical positive-integer text always coerces to its value.
        #[test]
        fn canonical_digit_strings_coerce(s in "[1-9][0-9]{0,17}") {
            let expected: i64 = s.parse().unwrap();
            let id = Candidate::from(s.as_str()).to_valid_id();
            prop_assert_eq!(id.map(|id| id.get()), Some(expected));
        }

        // Any string containing a non-digit character never coerces.
        #[test]
        fn strings_with_non_digits_never_coerce(
            prefix in "[0-9]{0,4}",
            junk in "[^0-9]",
            suffix in "[0-9a-z]{0,4}",
        ) {
            let s = format!("{prefix}{junk}{suffix}");
            prop_assert_eq!(Candidate::from(s.as_str()).to_valid_id(), None);
        }

        // Leading zeros are non-canonical and never coerce.
        #[test]
        fn leading_zeros_never_coerce(s in "0[0-9]{1,10}") {
            prop_assert_eq!(Candidate::from(s.as_str()).to_valid_id(), None);
        }
    }
}
