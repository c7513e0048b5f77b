/// Broad classification of a [`LocatorError`].
///
/// Callers exposing the codec through another layer (form validation, API
/// payloads) use this to decide between "wrong type of input" and "input of
/// the right type with a bad value".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not text, or text that is not a locator at all.
    Type,
    /// The input is text of the wrong shape, or a value outside its domain.
    Value,
    /// Building an output representation failed.
    Conversion,
}

/// Error type for maidenhead-rs operations.
#[derive(Debug, PartialEq)]
pub enum LocatorError {
    /// The locator is not a string.
    NotText,
    /// The locator has an odd number of characters.
    OddLength(usize),
    /// The locator length is outside the 4-10 character range.
    LengthOutOfRange(usize),
    /// The locator does not match the Maidenhead grammar.
    WrongFormat(String),
    /// The requested encoding precision is not 4, 6 or 8 characters.
    InvalidPrecision(usize),
    /// Latitude or longitude is outside the valid range (or NaN).
    CoordinateOutOfRange { latitude: f64, longitude: f64 },
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// Arrow array or record batch assembly failed.
    ArrowError(String),
}

impl LocatorError {
    /// Returns the [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LocatorError::NotText | LocatorError::WrongFormat(_) => ErrorKind::Type,
            LocatorError::OddLength(_)
            | LocatorError::LengthOutOfRange(_)
            | LocatorError::InvalidPrecision(_)
            | LocatorError::CoordinateOutOfRange { .. }
            | LocatorError::GeometryParseError(_) => ErrorKind::Value,
            LocatorError::ArrowError(_) => ErrorKind::Conversion,
        }
    }
}

impl std::fmt::Display for LocatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocatorError::NotText => write!(f, "locator must be a string"),
            LocatorError::OddLength(len) => write!(
                f,
                "locator must have an even number of characters (got {})",
                len
            ),
            LocatorError::LengthOutOfRange(len) => write!(
                f,
                "locator must have between 4 and 10 characters (got {})",
                len
            ),
            LocatorError::WrongFormat(locator) => {
                write!(f, "Wrong locator format: {}", locator)
            }
            LocatorError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
            LocatorError::CoordinateOutOfRange {
                latitude,
                longitude,
            } => write!(
                f,
                "Coordinate out of range: lat {}, lon {}",
                latitude, longitude
            ),
            LocatorError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            LocatorError::ArrowError(msg) => write!(f, "Arrow error: {}", msg),
        }
    }
}

impl std::error::Error for LocatorError {}
