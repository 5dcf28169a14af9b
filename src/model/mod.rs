pub mod flight_path;
pub mod parachute;
