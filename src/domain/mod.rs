//! Entities as consumed from the remote MobiGO API.

pub mod agreement;
pub mod booking;
pub mod staff;
pub mod vehicle;
