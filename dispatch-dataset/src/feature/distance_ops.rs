use geo::{line_string, Haversine, Length, LineString, Point};

use crate::dataset::DatasetRow;

/// adds `driver_distance`: great-circle distance in km from the driver's
/// position to the pickup point. rows with an unknown driver position get NaN
/// so the column stays numeric without inventing a distance.
pub fn driver_distance_to_pickup(rows: Vec<DatasetRow>) -> Vec<DatasetRow> {
    rows.into_iter()
        .map(|mut row| {
            let pickup = Point::new(row.pickup_longitude, row.pickup_latitude);
            let distance = match (row.driver_latitude, row.driver_longitude) {
                (Some(lat), Some(lon)) => haversine_km(Point::new(lon, lat), pickup),
                _ => f64::NAN,
            };
            row.driver_distance = Some(distance);
            row
        })
        .collect()
}

/// haversine distance on the mean-radius sphere, in kilometers
fn haversine_km(src_point: Point<f64>, dst_point: Point<f64>) -> f64 {
    let line: LineString<f64> = line_string![src_point.0, dst_point.0];
    let meters = uom::si::f64::Length::new::<uom::si::length::meter>(Haversine.length(&line));
    meters.get::<uom::si::length::kilometer>()
}
