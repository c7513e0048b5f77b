use crate::error::LocatorError;
use geo::{Centroid, CoordsIter};
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a lon/lat geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
/// Every vertex must lie on the locator grid, otherwise the first one outside
/// it is reported as [`LocatorError::CoordinateOutOfRange`].
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let trimmed = s.trim();
    let geom = if trimmed.starts_with('{') {
        parse_geojson(trimmed)?
    } else {
        parse_wkt(trimmed)?
    };

    if let Some(c) = geom
        .coords_iter()
        .find(|c| !(-90.0..=90.0).contains(&c.y) || !(-180.0..=180.0).contains(&c.x))
    {
        return Err(LocatorError::CoordinateOutOfRange {
            latitude: c.y,
            longitude: c.x,
        });
    }
    Ok(geom)
}

/// Parses a geometry string into the positions that locate stations.
///
/// # Example
/// ```
/// use maidenhead_rs::parse_positions;
///
/// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
/// let positions = parse_positions("MULTIPOINT((2.04 41.39), (-0.1276 51.5072))")?;
/// assert_eq!(positions.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn parse_positions(s: &str) -> Result<Vec<Point<f64>>, LocatorError> {
    geometry_positions(parse_geometry(s)?)
}

/// Narrows a geometry to station positions.
///
/// Points are kept as they are, polygons contribute their centroid and
/// collections contribute one position per member. Lines have no single
/// position and are rejected.
pub fn geometry_positions(geom: Geometry<f64>) -> Result<Vec<Point<f64>>, LocatorError> {
    match geom {
        Geometry::Point(pt) => Ok(vec![pt]),
        Geometry::MultiPoint(mp) => Ok(mp.0),
        Geometry::Polygon(poly) => Ok(poly.centroid().into_iter().collect()),
        Geometry::MultiPolygon(mp) => Ok(mp.0.iter().filter_map(|p| p.centroid()).collect()),
        Geometry::Rect(rect) => Ok(vec![rect.center().into()]),
        Geometry::GeometryCollection(gc) => {
            let mut positions = Vec::new();
            for g in gc.0 {
                positions.extend(geometry_positions(g)?);
            }
            Ok(positions)
        }
        _ => Err(LocatorError::GeometryParseError(
            "Geometry has no station position".to_string(),
        )),
    }
}

fn parse_geojson(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| LocatorError::GeometryParseError(e.to_string()))?;

    let geometry = match geojson {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feat) => feat.geometry.ok_or_else(|| {
            LocatorError::GeometryParseError("Feature has no geometry".to_string())
        })?,
        GeoJson::FeatureCollection(_) => {
            return Err(LocatorError::GeometryParseError(
                "FeatureCollection not supported, use individual geometries".to_string(),
            ));
        }
    };

    Geometry::try_from(geometry).map_err(|e| LocatorError::GeometryParseError(e.to_string()))
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| LocatorError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        LocatorError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geojson_point() -> Result<(), LocatorError> {
        let json = r#"{"type":"Point","coordinates":[2.041667,41.395833]}"#;
        let positions = parse_positions(json)?;
        assert_eq!(positions.len(), 1);
        assert!((positions[0].x() - 2.041667).abs() < 1e-9);
        assert!((positions[0].y() - 41.395833).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), LocatorError> {
        let json = r#"{"type":"Feature","properties":{"call":"EA3XYZ"},"geometry":{"type":"Point","coordinates":[2.0,41.0]}}"#;
        assert_eq!(parse_positions(json)?, vec![Point::new(2.0, 41.0)]);
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature_without_geometry() {
        let json = r#"{"type":"Feature","properties":{},"geometry":null}"#;
        assert!(matches!(
            parse_geometry(json),
            Err(LocatorError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_parse_feature_collection_rejected() {
        let json = r#"{"type":"FeatureCollection","features":[]}"#;
        assert!(parse_geometry(json).is_err());
    }

    #[test]
    fn test_polygon_narrows_to_centroid() -> Result<(), LocatorError> {
        let positions = parse_positions("POLYGON((2 41, 4 41, 4 42, 2 42, 2 41))")?;
        assert_eq!(positions.len(), 1);
        assert!((positions[0].x() - 3.0).abs() < 1e-9);
        assert!((positions[0].y() - 41.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_collection_flattens() -> Result<(), LocatorError> {
        let wkt = "GEOMETRYCOLLECTION(POINT(2.04 41.39), MULTIPOINT((-0.1276 51.5072), (151.2093 -33.8688)))";
        assert_eq!(parse_positions(wkt)?.len(), 3);
        Ok(())
    }

    #[test]
    fn test_line_has_no_position() {
        assert!(matches!(
            parse_positions("LINESTRING(0 0, 1 1)"),
            Err(LocatorError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_off_grid_coordinates_rejected() {
        // easting/northing pasted where lon/lat belongs
        assert_eq!(
            parse_geometry("POINT(383640 398260)"),
            Err(LocatorError::CoordinateOutOfRange {
                latitude: 398260.0,
                longitude: 383640.0,
            })
        );
        assert!(matches!(
            parse_geometry(r#"{"type":"Point","coordinates":[2.0,95.0]}"#),
            Err(LocatorError::CoordinateOutOfRange { .. })
        ));
        // one bad vertex is enough even if the centroid would be on the grid
        assert!(matches!(
            parse_positions("POLYGON((170 0, 190 0, 190 1, 170 1, 170 0))"),
            Err(LocatorError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_grid_edges_accepted() -> Result<(), LocatorError> {
        assert_eq!(parse_positions("POINT(180 90)")?, vec![Point::new(180.0, 90.0)]);
        assert_eq!(
            parse_positions("POINT(-180 -90)")?,
            vec![Point::new(-180.0, -90.0)]
        );
        Ok(())
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_geometry("not a geometry").is_err());
        assert!(parse_geometry("{ broken json").is_err());
    }
}
