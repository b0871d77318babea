//! Network layer: REST calls to the gateway and auth services.

pub mod api;
