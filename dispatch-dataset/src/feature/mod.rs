mod distance_ops;
mod history_ops;
mod time_ops;

pub use distance_ops::driver_distance_to_pickup;
pub use history_ops::driver_historical_completed_bookings;
pub use time_ops::{hour_of_day, robust_hour_of_iso_date};
