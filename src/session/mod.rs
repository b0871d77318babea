//! Client-side session: state, persistence, and the store tying them
//! together.
//!
//! DESIGN
//! ======
//! `state` holds the plain data and its pure transitions, `persist` the
//! storage backends, and `store` the context object the rest of the app
//! talks to. Splitting them keeps transitions unit-testable without any
//! storage I/O.

pub mod persist;
pub mod state;
pub mod store;
