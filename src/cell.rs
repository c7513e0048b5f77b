use crate::coord::{Coordinate, LatLon, round_coordinate};
use crate::error::LocatorError;
use crate::geom::{create_cell_polygon, create_cell_rect, geometry_positions, parse_geometry};
use crate::index::constants::{GRID_ORIGIN_LATITUDE, GRID_ORIGIN_LONGITUDE};
use crate::index::{
    cell_span, center_offset, coordinates_to_maidenhead, southwest_corner, validate_locator,
};
use crate::io::arrow::GridCellsToArrow;
use arrow_array::RecordBatch;
use geo_types::{Geometry, Point, Polygon, Rect};
use geoarrow_array::array::PolygonArray;

/// A single Maidenhead grid cell.
///
/// Each `GridCell` is the rectangle a locator addresses: a 2° x 1° square for
/// four characters, a subsquare for six, an extended square for eight.
///
/// # Example
///
/// ```
/// use maidenhead_rs::GridCell;
///
/// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
/// let cell = GridCell::from_locator("jn11aj")?;
/// assert_eq!(cell.locator(), "JN11AJ");
///
/// let center = cell.center();
/// println!("Center: ({}, {})", center.latitude, center.longitude);
///
/// // Outline for drawing the square on a map
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    locator: String,
    precision: usize,
    // x = longitude, y = latitude, unrounded
    southwest: Point<f64>,
    lon_span: f64,
    lat_span: f64,
}

impl GridCell {
    /// Create a GridCell from a locator in any letter case.
    ///
    /// # Errors
    ///
    /// Fails like [`maidenhead_to_coordinates`](crate::maidenhead_to_coordinates)
    /// on malformed locators.
    pub fn from_locator(locator: &str) -> Result<Self, LocatorError> {
        if !validate_locator(locator)? {
            return Err(LocatorError::WrongFormat(locator.to_string()));
        }
        let canonical = locator.to_uppercase();
        let wrong_format = || LocatorError::WrongFormat(locator.to_string());
        let (latitude, longitude) =
            southwest_corner(canonical.as_bytes()).ok_or_else(wrong_format)?;
        let (lon_span, lat_span) = cell_span(canonical.len()).ok_or_else(wrong_format)?;

        Ok(Self {
            precision: canonical.len(),
            locator: canonical,
            southwest: Point::new(longitude, latitude),
            lon_span,
            lat_span,
        })
    }

    /// Create the GridCell of the given precision containing a WGS84 (lon/lat) position.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::GridCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
    /// // From tuple
    /// let cell = GridCell::from_wgs84(&(2.041667, 41.395883), 6)?;
    /// // From Point
    /// let same = GridCell::from_wgs84(&Point::new(2.041667, 41.395883), 6)?;
    /// assert_eq!(cell.locator(), "JN11AJ");
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, precision: usize) -> Result<Self, LocatorError> {
        let locator = coordinates_to_maidenhead(coord.y(), coord.x(), precision)?;
        Self::from_locator(&locator)
    }

    /// Create GridCells from an arbitrary `geo_types::Geometry` in lon/lat.
    ///
    /// One cell per station position, see
    /// [`geometry_positions`](crate::geometry_positions).
    pub fn from_geometry(geom: Geometry<f64>, precision: usize) -> Result<Vec<Self>, LocatorError> {
        geometry_positions(geom)?
            .iter()
            .map(|pt| Self::from_wgs84(pt, precision))
            .collect()
    }

    /// Create GridCells from a WKT or GeoJSON string.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::GridCell;
    ///
    /// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
    /// let cells = GridCell::from_geometry_str("POINT(-0.1276 51.5072)", 6)?;
    /// assert_eq!(cells[0].locator(), "IO91WM");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_geometry_str(s: &str, precision: usize) -> Result<Vec<Self>, LocatorError> {
        Self::from_geometry(parse_geometry(s)?, precision)
    }

    /// Canonical (uppercase) locator.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Locator length: 4, 6, 8 or 10.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Unrounded southwest corner, x = longitude, y = latitude.
    pub fn southwest(&self) -> Point<f64> {
        self.southwest
    }

    /// Returns the cell size as `(lon_degrees, lat_degrees)`.
    ///
    /// Ten-character cells report the 8-character size.
    pub fn span(&self) -> (f64, f64) {
        (self.lon_span, self.lat_span)
    }

    /// Southwest corner rounded to six decimals, as returned by
    /// `maidenhead_to_coordinates(locator, false)`.
    pub fn southwest_corner(&self) -> LatLon {
        LatLon::new(
            round_coordinate(self.southwest.y()),
            round_coordinate(self.southwest.x()),
        )
    }

    /// Cell center rounded to six decimals, as returned by
    /// `maidenhead_to_coordinates(locator, true)`.
    pub fn center(&self) -> LatLon {
        let (delta_latitude, delta_longitude) = center_offset(self.precision);
        LatLon::new(
            round_coordinate(self.southwest.y() + delta_latitude),
            round_coordinate(self.southwest.x() + delta_longitude),
        )
    }

    /// Returns the enclosing cell one precision step up, or `None` for a
    /// 4-character square.
    pub fn parent(&self) -> Option<GridCell> {
        if self.precision <= 4 {
            return None;
        }
        Self::from_locator(&self.locator[..self.precision - 2]).ok()
    }

    /// Whether a lon/lat position falls inside this cell.
    ///
    /// South and west edges are inclusive, north and east edges exclusive,
    /// except on the outer edge of the grid (latitude 90, longitude 180).
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let (lon_span, lat_span) = self.span();
        let west = self.southwest.x();
        let south = self.southwest.y();
        let east = west + lon_span;
        let north = south + lat_span;

        let (x, y) = (coord.x(), coord.y());
        let within_lon = x >= west && (x < east || (x == east && x >= -GRID_ORIGIN_LONGITUDE));
        let within_lat = y >= south && (y < north || (y == north && y >= -GRID_ORIGIN_LATITUDE));
        within_lon && within_lat
    }

    /// Returns the bounding rectangle of this cell.
    pub fn to_rect(&self) -> Rect<f64> {
        let (lon_span, lat_span) = self.span();
        create_cell_rect(self.southwest.0, lon_span, lat_span)
    }

    /// Converts this cell to a rectangular polygon.
    ///
    /// Returns a `geo_types::Polygon` with a closed five-point ring,
    /// suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let (lon_span, lat_span) = self.span();
        create_cell_polygon(self.southwest.0, lon_span, lat_span)
    }

    /// Returns the cell outline as WKT.
    pub fn to_wkt(&self) -> String {
        use wkt::ToWkt;
        self.to_polygon().wkt_string()
    }

    /// Returns the cell outline as a GeoJSON geometry string.
    pub fn to_geojson(&self) -> String {
        let geom = geojson::Geometry::from(&self.to_polygon());
        geom.to_string()
    }

    /// Converts this cell to an Arrow PolygonArray.
    pub fn to_arrow_polygons(&self) -> PolygonArray {
        std::slice::from_ref(self).to_arrow_polygons()
    }

    /// Converts this cell to an Arrow RecordBatch with all attributes.
    pub fn to_record_batch(&self) -> Result<RecordBatch, LocatorError> {
        std::slice::from_ref(self).to_record_batch()
    }
}
