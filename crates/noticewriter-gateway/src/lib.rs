//! Record sources: the HTTP client for the records service and a JSON fixture
//! source for offline use.

pub mod fixture;

#[cfg(feature = "http")]
pub mod http;

pub use fixture::{Fixture, FixtureError, FixtureSource};

#[cfg(feature = "http")]
pub use http::{ApiClient, ApiError, DEFAULT_BASE_URL};
