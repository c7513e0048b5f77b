use crate::coord::LatLon;
use crate::error::LocatorError;
use crate::index::decode::maidenhead_to_coordinates;
use log::{debug, warn};
use rayon::prelude::*;

/// Configuration for decoding many locators at once.
///
/// # Example
/// ```
/// use maidenhead_rs::DecodeOptions;
///
/// let options = DecodeOptions::new().corner().skip_invalid(true);
/// assert!(!options.grid_center);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Return cell centers rather than southwest corners
    pub grid_center: bool,
    /// Turn invalid locators into `None` instead of failing the batch
    pub skip_invalid: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            grid_center: true,
            skip_invalid: false,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode to the southwest corner of each cell.
    pub fn corner(mut self) -> Self {
        self.grid_center = false;
        self
    }

    /// Decode to the center of each cell (default).
    pub fn center(mut self) -> Self {
        self.grid_center = true;
        self
    }

    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// Decodes a slice of locators in parallel.
///
/// The output has one entry per input, in input order. Without
/// `skip_invalid` the first failing locator (in input order) aborts the
/// batch with its error; with it, failures are logged and yield `None`.
///
/// # Example
/// ```
/// use maidenhead_rs::{decode_locators, DecodeOptions};
///
/// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
/// let options = DecodeOptions::new().skip_invalid(true);
/// let decoded = decode_locators(&["JN11", "nope", "IO91wm"], &options)?;
///
/// assert_eq!(decoded.len(), 3);
/// assert!(decoded[1].is_none());
/// # Ok(())
/// # }
/// ```
pub fn decode_locators<S>(
    locators: &[S],
    options: &DecodeOptions,
) -> Result<Vec<Option<LatLon>>, LocatorError>
where
    S: AsRef<str> + Sync,
{
    let decoded: Vec<Result<LatLon, LocatorError>> = locators
        .par_iter()
        .map(|locator| {
            maidenhead_to_coordinates(locator.as_ref(), options.grid_center).map(LatLon::from)
        })
        .collect();

    let mut positions = Vec::with_capacity(decoded.len());
    let mut rejected = 0usize;

    for (locator, result) in locators.iter().zip(decoded) {
        match result {
            Ok(pos) => positions.push(Some(pos)),
            Err(e) if options.skip_invalid => {
                warn!("Skipping locator {:?}: {}", locator.as_ref(), e);
                rejected += 1;
                positions.push(None);
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Decoded {} locators ({} rejected)",
        positions.len() - rejected,
        rejected
    );
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DecodeOptions::default();
        assert!(options.grid_center);
        assert!(!options.skip_invalid);
        assert_eq!(DecodeOptions::new().corner().center(), options);
    }

    #[test]
    fn test_decode_preserves_order() -> Result<(), LocatorError> {
        let locators = vec!["JN11".to_string(), "AA00".to_string(), "RR99".to_string()];
        let decoded = decode_locators(&locators, &DecodeOptions::new().corner())?;

        assert_eq!(
            decoded,
            vec![
                Some(LatLon::new(41.0, 2.0)),
                Some(LatLon::new(-90.0, -180.0)),
                Some(LatLon::new(89.0, 178.0)),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_matches_single_decode() -> Result<(), LocatorError> {
        let locators = ["JN11aj", "FN31pr21", "IO91wm", "KP20le45XX"];
        let decoded = decode_locators(&locators, &DecodeOptions::new())?;

        for (locator, pos) in locators.iter().zip(decoded) {
            let expected = maidenhead_to_coordinates(locator, true)?;
            assert_eq!(pos.map(|p| (p.latitude, p.longitude)), Some(expected));
        }
        Ok(())
    }

    #[test]
    fn test_first_error_in_input_order() {
        let locators = ["JN11", "JN1", "ZZ00", "IO91"];
        let result = decode_locators(&locators, &DecodeOptions::new());
        assert_eq!(result, Err(LocatorError::OddLength(3)));
    }

    #[test]
    fn test_skip_invalid() -> Result<(), LocatorError> {
        let locators = ["JN11", "JN1", "ZZ00", "IO91"];
        let decoded = decode_locators(&locators, &DecodeOptions::new().skip_invalid(true))?;

        assert_eq!(decoded.len(), 4);
        assert!(decoded[0].is_some());
        assert!(decoded[1].is_none());
        assert!(decoded[2].is_none());
        assert!(decoded[3].is_some());
        Ok(())
    }

    #[test]
    fn test_uppercasing_that_changes_length() -> Result<(), LocatorError> {
        // "ﬀ11a" uppercases to the five-character "FF11A"
        let locators = ["JN11", "\u{FB00}11a", "JN11a\u{DF}"];

        let decoded = decode_locators(&locators, &DecodeOptions::new().skip_invalid(true))?;
        assert_eq!(decoded, vec![Some(LatLon::new(41.5, 3.0)), None, None]);

        assert_eq!(
            decode_locators(&locators, &DecodeOptions::new()),
            Err(LocatorError::WrongFormat("\u{FB00}11a".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_empty_batch()-> Result<(), LocatorError> {
        let locators: Vec<&str> = Vec::new();
        assert!(decode_locators(&locators, &DecodeOptions::new())?.is_empty());
        Ok(())
    }
}
