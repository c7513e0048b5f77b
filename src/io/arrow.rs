use crate::cell::GridCell;
use crate::error::LocatorError;
use arrow_array::{Float64Array, RecordBatch, StringArray, UInt8Array};
use arrow_schema::{DataType, Field, Schema};
use geoarrow_array::IntoArrow;
use geoarrow_array::array::{PointArray, PolygonArray};
use geoarrow_array::builder::{PointBuilder, PolygonBuilder};
use geoarrow_schema::{Crs, Dimension, Metadata, PointType, PolygonType};
use rayon::prelude::*;
use std::sync::Arc;

fn wgs84_metadata() -> Arc<Metadata> {
    let crs = Crs::from_authority_code("EPSG:4326".to_string());
    Arc::new(Metadata::new(crs, None))
}

/// Trait for converting collections of [`GridCell`]s to Arrow arrays.
///
/// Implemented for `[GridCell]` (and so for `Vec<GridCell>`).
pub trait GridCellsToArrow {
    /// Converts cell centers to an Arrow PointArray.
    fn to_arrow_points(&self) -> PointArray;
    /// Converts cells to an Arrow PolygonArray of cell outlines.
    fn to_arrow_polygons(&self) -> PolygonArray;
    /// Converts cells to a RecordBatch with locator, precision, center_lat, center_lon and geometry.
    fn to_record_batch(&self) -> Result<RecordBatch, LocatorError>;
}

impl GridCellsToArrow for [GridCell] {
    fn to_arrow_points(&self) -> PointArray {
        let point = PointType::new(Dimension::XY, wgs84_metadata());
        let mut builder = PointBuilder::with_capacity(point, self.len());

        for cell in self {
            builder.push_point(Some(&cell.center().to_point()));
        }
        builder.finish()
    }

    fn to_arrow_polygons(&self) -> PolygonArray {
        let poly = PolygonType::new(Dimension::XY, wgs84_metadata());
        let polygons: Vec<_> = self.par_iter().map(|c: &GridCell| c.to_polygon()).collect();
        PolygonBuilder::from_polygons(&polygons, poly).finish()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, LocatorError> {
        let polygon_array = self.to_arrow_polygons();
        let centers: Vec<_> = self.par_iter().map(|c: &GridCell| c.center()).collect();

        let locators: StringArray = self.iter().map(|c| Some(c.locator())).collect();
        let precisions: UInt8Array = self.iter().map(|c| Some(c.precision() as u8)).collect();
        let latitudes: Float64Array = centers.iter().map(|p| Some(p.latitude)).collect();
        let longitudes: Float64Array = centers.iter().map(|p| Some(p.longitude)).collect();

        let geometry_field = polygon_array.extension_type().to_field("geometry", false);
        let schema = Schema::new(vec![
            Field::new("locator", DataType::Utf8, false),
            Field::new("precision", DataType::UInt8, false),
            Field::new("center_lat", DataType::Float64, false),
            Field::new("center_lon", DataType::Float64, false),
            geometry_field,
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(locators),
                Arc::new(precisions),
                Arc::new(latitudes),
                Arc::new(longitudes),
                Arc::new(polygon_array.into_arrow()),
            ],
        )
        .map_err(|e| LocatorError::ArrowError(e.to_string()))
    }
}
