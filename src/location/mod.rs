//! Device location subsystem.
//!
//! A provider reports the current position; the resolver wraps it in a single
//! awaited call with a timeout and a permission gate.

pub mod providers;
pub mod resolver;
pub mod types;

pub use providers::{FixedProvider, IpProvider, LocationProvider, UnavailableProvider};
pub use resolver::LocationResolver;
pub use types::{Fix, LocationError, LocationSource};
