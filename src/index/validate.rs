use crate::error::LocatorError;
use crate::index::constants::{
    FIELD_LETTER_MAX, MAX_LOCATOR_LENGTH, MIN_LOCATOR_LENGTH, SUBSQUARE_LETTER_MAX,
};
use serde_json::Value;

/// Checks whether a string is a well-formed Maidenhead locator.
///
/// Accepts 4, 6, 8 or 10 characters in any letter case, e.g. `JN11`,
/// `JN11AJ`, `jn11aj12` or `JN11AJ12XX`.
///
/// # Process
///
/// 1. Rejects an odd number of characters with [`LocatorError::OddLength`]
/// 2. Rejects fewer than 4 or more than 10 characters with [`LocatorError::LengthOutOfRange`]
/// 3. Uppercases the input and matches it against the locator grammar
///
/// The grammar, anchored at both ends:
///
/// | Positions | Content                                                  |
/// |-----------|----------------------------------------------------------|
/// | 0-1       | letters `A`-`R` (longitude field, latitude field)        |
/// | 2-3       | digits `0`-`9`                                           |
/// | 4-5       | optional: letters `A`-`X`                                |
/// | 6-7       | optional, only after 4-5: digits `0`-`9`                 |
/// | 8-9       | optional, only after 6-7: letters `A`-`X`                |
///
/// A single letter after the first four characters also satisfies the
/// grammar. Uppercasing may lengthen the input (`ß` becomes `SS`, `ﬀ`
/// becomes `FF`), so the uppercased form must keep the length that passed
/// the checks above; a five-character match is therefore always rejected.
///
/// # Example
/// ```
/// use maidenhead_rs::validate_locator;
///
/// assert!(validate_locator("JN11aj").unwrap());
/// assert!(!validate_locator("JN11AJDL").unwrap());
/// assert!(validate_locator("JN1").is_err());
/// ```
///
/// # Errors
///
/// - [`LocatorError::OddLength`] - odd number of characters
/// - [`LocatorError::LengthOutOfRange`] - fewer than 4 or more than 10 characters
pub fn validate_locator(locator: &str) -> Result<bool, LocatorError> {
    let length = locator.chars().count();
    if length % 2 == 1 {
        return Err(LocatorError::OddLength(length));
    }
    if !(MIN_LOCATOR_LENGTH..=MAX_LOCATOR_LENGTH).contains(&length) {
        return Err(LocatorError::LengthOutOfRange(length));
    }

    let locator = locator.to_uppercase();
    Ok(locator.len() == length && matches_grammar(locator.as_bytes()))
}

/// Validates a locator taken from a JSON payload.
///
/// Anything other than a JSON string fails with [`LocatorError::NotText`].
///
/// # Example
/// ```
/// use maidenhead_rs::{validate_locator_value, LocatorError};
/// use serde_json::json;
///
/// assert_eq!(validate_locator_value(&json!("JN11")), Ok(true));
/// assert_eq!(validate_locator_value(&json!(123)), Err(LocatorError::NotText));
/// ```
pub fn validate_locator_value(locator: &Value) -> Result<bool, LocatorError> {
    match locator.as_str() {
        Some(s) => validate_locator(s),
        None => Err(LocatorError::NotText),
    }
}

fn is_field_letter(b: u8) -> bool {
    (b'A'..=FIELD_LETTER_MAX).contains(&b)
}

fn is_subsquare_letter(b: u8) -> bool {
    (b'A'..=SUBSQUARE_LETTER_MAX).contains(&b)
}

/// Matches already-uppercased bytes against the full locator grammar.
pub(crate) fn matches_grammar(locator: &[u8]) -> bool {
    let [lon_field, lat_field, lon_square, lat_square, rest @ ..] = locator else {
        return false;
    };
    if !is_field_letter(*lon_field)
        || !is_field_letter(*lat_field)
        || !lon_square.is_ascii_digit()
        || !lat_square.is_ascii_digit()
    {
        return false;
    }

    match rest {
        [] => true,
        [a] => is_subsquare_letter(*a),
        [a, b] => is_subsquare_letter(*a) && is_subsquare_letter(*b),
        [a, b, c, d] => {
            is_subsquare_letter(*a)
                && is_subsquare_letter(*b)
                && c.is_ascii_digit()
                && d.is_ascii_digit()
        }
        [a, b, c, d, e, f] => {
            is_subsquare_letter(*a)
                && is_subsquare_letter(*b)
                && c.is_ascii_digit()
                && d.is_ascii_digit()
                && is_subsquare_letter(*e)
                && is_subsquare_letter(*f)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_valid_locators() -> Result<(), LocatorError> {
        assert!(validate_locator("JN11")?);
        assert!(validate_locator("JN11AJ")?);
        assert!(validate_locator("JN11aj")?);
        assert!(validate_locator("jn11aj12")?);
        assert!(validate_locator("JN11AJ12XX")?);
        assert!(validate_locator("AA00")?);
        assert!(validate_locator("RR99XX99XX")?);
        Ok(())
    }

    #[test]
    fn test_letters_where_digits_belong() -> Result<(), LocatorError> {
        // positions 6-7 must be digits
        assert!(!validate_locator("jn11ajdl")?);
        assert!(!validate_locator("JN11AJDLXX")?);
        assert!(!validate_locator("JNAA")?);
        Ok(())
    }

    #[test]
    fn test_out_of_alphabet() -> Result<(), LocatorError> {
        assert!(!validate_locator("SN11")?);
        assert!(!validate_locator("JS11")?);
        assert!(!validate_locator("11JN")?);
        assert!(!validate_locator("JN11YA")?);
        assert!(!validate_locator("JN11AY")?);
        assert!(!validate_locator("JN11AJ12YX")?);
        assert!(!validate_locator("JN1 ")?);
        assert!(!validate_locator("JN11A1")?);
        Ok(())
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(validate_locator("JN1"), Err(LocatorError::OddLength(3)));
        assert_eq!(validate_locator("JN11A"), Err(LocatorError::OddLength(5)));
        assert_eq!(
            validate_locator("JN11AJ12XXY"),
            Err(LocatorError::OddLength(11))
        );
        assert_eq!(validate_locator("J"), Err(LocatorError::OddLength(1)));
    }

    #[test]
    fn test_length_out_of_range() {
        assert_eq!(validate_locator(""), Err(LocatorError::LengthOutOfRange(0)));
        assert_eq!(
            validate_locator("JN"),
            Err(LocatorError::LengthOutOfRange(2))
        );
        let result = validate_locator("JN11AJ12XXYY");
        assert_eq!(result, Err(LocatorError::LengthOutOfRange(12)));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn test_length_counts_characters() {
        // four characters, five bytes
        assert_eq!(validate_locator("JN1é"), Ok(false));
        assert_eq!(validate_locator("JNé"), Err(LocatorError::OddLength(3)));
    }

    #[test]
    fn test_uppercasing_that_changes_length() {
        // "ﬀ11a" uppercases to "FF11A", which only the single-letter branch matches
        assert_eq!(validate_locator("\u{FB00}11a"), Ok(false));
        assert_eq!(validate_locator("\u{FB01}11a"), Ok(false));
        assert_eq!(validate_locator("JN1\u{DF}"), Ok(false));
        assert_eq!(validate_locator("JN11a\u{DF}"), Ok(false));
        assert_eq!(validate_locator("\u{FB00}11aj1"), Ok(false));
        assert_eq!(
            validate_locator("\u{FB00}11"),
            Err(LocatorError::OddLength(3))
        );
    }

    #[test]
    fn test_uppercasing_that_keeps_length() {
        // dotless i uppercases to ASCII I
        assert_eq!(validate_locator("JN11\u{131}j"), Ok(true));
    }

    #[test]
    fn test_single_trailing_letter_branch() {
        assert!(matches_grammar(b"JN11A"));
        assert!(!matches_grammar(b"JN11Y"));
        assert!(!matches_grammar(b"JN11AJ1"));
        assert!(!matches_grammar(b"JN1"));
    }

    #[test]
    fn test_json_values() {
        assert_eq!(validate_locator_value(&json!("jn11aj")), Ok(true));
        assert_eq!(validate_locator_value(&json!("JN11AJDL")), Ok(false));
        assert_eq!(
            validate_locator_value(&json!("JN1")),
            Err(LocatorError::OddLength(3))
        );

        for value in [json!(123), json!(null), json!(["JN11"]), json!({"grid": "JN11"})] {
            let err = validate_locator_value(&value).unwrap_err();
            assert_eq!(err, LocatorError::NotText);
            assert_eq!(err.kind(), ErrorKind::Type);
        }
    }
}
