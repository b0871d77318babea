//! Page components, one per route.

pub mod bucket;
pub mod buckets;
pub mod login;
pub mod logout;
