use geo_types::{Coord, LineString, Polygon, Rect};

/// Builds the rectangular outline of a grid cell.
///
/// The ring starts at the southwest corner and runs counter-clockwise
/// (southeast, northeast, northwest) before closing on the first vertex.
pub fn create_cell_polygon(southwest: Coord<f64>, lon_span: f64, lat_span: f64) -> Polygon<f64> {
    let east = southwest.x + lon_span;
    let north = southwest.y + lat_span;

    let coords = vec![
        southwest,
        Coord { x: east, y: southwest.y },
        Coord { x: east, y: north },
        Coord { x: southwest.x, y: north },
        southwest,
    ];

    Polygon::new(LineString::from(coords), vec![])
}

/// Builds the bounding rectangle of a grid cell.
pub fn create_cell_rect(southwest: Coord<f64>, lon_span: f64, lat_span: f64) -> Rect<f64> {
    Rect::new(
        southwest,
        Coord {
            x: southwest.x + lon_span,
            y: southwest.y + lat_span,
        },
    )
}
