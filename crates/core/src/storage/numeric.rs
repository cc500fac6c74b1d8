//! Conversion of store-native decimal numbers into JSON numbers.

use serde_json::Number;

/// Converts a decimal string as stored by the key-value store into a JSON
/// number.
///
/// Whole values become integers and everything else becomes a float, so
/// `"10.0"` reads back as `10` and `"0.5"` as `0.5`. Integers that fit in
/// `i64`/`u64` are parsed exactly; larger whole values go through `f64` and
/// stay integers only while they fit in `i64`.
///
/// Returns `None` for strings that are not finite numbers.
pub fn decimal_to_number(decimal: &str) -> Option<Number> {
    let decimal = decimal.trim();

    if let Ok(n) = decimal.parse::<i64>() {
        return Some(n.into());
    }
    if let Ok(n) = decimal.parse::<u64>() {
        return Some(n.into());
    }

    let value: f64 = decimal.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    // i64::MAX is not representable in f64; the nearest value above it is 2^63.
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        return Some((value as i64).into());
    }

    Number::from_f64(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(decimal: &str) -> serde_json::Value {
        serde_json::Value::Number(decimal_to_number(decimal).unwrap())
    }

    #[test]
    fn test_zero_is_integer() {
        assert_eq!(convert("0"), serde_json::json!(0));
        assert!(decimal_to_number("0").unwrap().is_i64());
    }

    #[test]
    fn test_half_is_float() {
        let n = decimal_to_number("0.5").unwrap();
        assert!(n.is_f64());
        assert_eq!(n.as_f64(), Some(0.5));
    }

    #[test]
    fn test_negative_integer() {
        assert_eq!(convert("-3"), serde_json::json!(-3));
    }

    #[test]
    fn test_whole_decimal_becomes_integer() {
        let n = decimal_to_number("10.0").unwrap();
        assert!(n.is_i64());
        assert_eq!(n.to_string(), "10");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(convert("1E+2"), serde_json::json!(100));
        assert_eq!(convert("-2.5e-1"), serde_json::json!(-0.25));
    }

    #[test]
    fn test_large_integers_are_exact() {
        assert_eq!(convert("9007199254740993"), serde_json::json!(9_007_199_254_740_993_i64));
        assert_eq!(convert("18446744073709551615"), serde_json::json!(u64::MAX));
    }

    #[test]
    fn test_negative_zero_is_integer_zero() {
        assert_eq!(convert("-0.0").to_string(), "0");
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(decimal_to_number("abc").is_none());
        assert!(decimal_to_number("").is_none());
        assert!(decimal_to_number("NaN").is_none());
        assert!(decimal_to_number("inf").is_none());
    }
}
