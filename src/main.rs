use log::info;
use maidenhead_rs::{GridCell, LocatorError, maidenhead_to_coordinates};

fn main() -> Result<(), LocatorError> {
    env_logger::init();

    for locator in ["JN11", "jn11aj", "IO91wm", "FN31pr21"] {
        let corner = maidenhead_to_coordinates(locator, false)?;
        let center = maidenhead_to_coordinates(locator, true)?;
        info!("Decoded {}", locator);

        println!("Locator: {}", locator);
        println!("Corner: ({}, {})", corner.0, corner.1);
        println!("Center: ({}, {})", center.0, center.1);

        let cell = GridCell::from_locator(locator)?;
        println!("Polygon: {}", cell.to_wkt());
    }

    let cell = GridCell::from_wgs84(&(-2.2479699500757597, 53.48082746395233), 8)?;
    println!("Manchester: {}", cell.locator());

    Ok(())
}
