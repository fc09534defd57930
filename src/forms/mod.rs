//! Form definitions backing the admin routes.

pub mod agreement;
pub mod auth;
pub mod booking;
pub mod vehicle;
