//! Request-state builder for PostgREST-style interfaces.
//!
//! Every operation consumes a [`RequestState`] and returns the next
//! snapshot, so a request is assembled as one chain:
//!
//! ```ignore
//! use pgrest::builder;
//!
//! let users = builder::init("public")
//!     .auth("service-token")
//!     .from("users")
//!     .select(&["id", "name"])
//!     .gt("age", "18")
//!     .order("created_at", true, false)
//!     .limit(20, 0)
//!     .call(&transport)
//!     .await?;
//! ```
//!
//! Filters on the same column accumulate (`gt` and `lt` bounds coexist as
//! repeated query parameters), [`RequestState::not`] negates exactly the next
//! filter, and the verb is owned by the shape operations: `select` reads as
//! GET, `insert`/`rpc` POST, `update` PATCH, `delete` DELETE.

mod filter;
mod modify;
mod params;
mod state;

pub use filter::{sanitize_param, sanitize_pattern_param};
pub use params::ParamMap;
pub use state::{DEFAULT_BASE_URL, Method, RequestState};

/// Create the initial request state for a schema.
///
/// # Example
/// ```
/// let state = pgrest::builder::init("public").from("users");
/// assert_eq!(state.path(), "http://localhost:3000/users");
/// ```
pub fn init(schema: &str) -> RequestState {
    RequestState::init(schema)
}

/// Create the initial request state for a schema against a custom base URL.
pub fn init_with_base_url(schema: &str, base_url: &str) -> RequestState {
    RequestState::init_with_base_url(schema, base_url)
}

#[cfg(test)]
mod tests;
