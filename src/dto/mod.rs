//! Page-data structs bridging services with templates.

pub mod agreements;
pub mod bookings;
pub mod vehicles;
