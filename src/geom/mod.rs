mod parse;
mod polygon;

pub use parse::{geometry_positions, parse_geometry, parse_positions};
pub use polygon::{create_cell_polygon, create_cell_rect};
