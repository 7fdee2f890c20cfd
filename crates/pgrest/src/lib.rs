//! # pgrest
//!
//! A chainable request builder for PostgREST-style REST interfaces.
//!
//! ## Features
//!
//! - **State-threaded builder**: every call consumes a [`RequestState`] and
//!   returns the next snapshot — no hidden global state
//! - **Filter composition**: `<operator>.<criteria>` predicates merge per
//!   column, with negation and multi-valued parameters
//! - **Abstract transport**: the core builds the request shape; a
//!   [`Transport`] implementation owns the wire
//! - **Deferred errors**: a chain never fails mid-build; serialization
//!   problems surface at dispatch
//!
//! ## Usage
//!
//! ```ignore
//! use pgrest::builder;
//!
//! // Filtered read
//! let adults = builder::init("public")
//!     .from("users")
//!     .select(&["id", "name"])
//!     .gte("age", "18")
//!     .order("age", true, false)
//!     .limit(20, 0)
//!     .call(&transport)
//!     .await?;
//!
//! // Upsert
//! builder::init("public")
//!     .from("users")
//!     .insert(&rows, true)
//!     .call(&transport)
//!     .await?;
//!
//! // Stored procedure
//! builder::init("public")
//!     .rpc("compute_totals", &params)
//!     .call(&transport)
//!     .await?;
//! ```

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod transport;

pub use builder::{
    DEFAULT_BASE_URL, Method, ParamMap, RequestState, init, init_with_base_url, sanitize_param,
    sanitize_pattern_param,
};
pub use dispatch::dispatch;
pub use error::{RestError, RestResult};
pub use transport::{BasicAuth, OutboundRequest, RequestOptions, Response, Transport};
