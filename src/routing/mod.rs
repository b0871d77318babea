//! Route metadata and the navigation guard.
//!
//! The guard is pure decision logic over a [`route::RouteTable`] and the
//! session store; wiring it to the browser router lives in `app`.

pub mod guard;
pub mod route;
