//! Request-state accumulator: the value threaded through every builder call.

use crate::builder::params::ParamMap;
use crate::error::RestError;
use crate::transport::{BasicAuth, RequestOptions};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Base URL used by [`RequestState::init`] when none is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP verb of the finished request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Wire representation of the verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(RestError::unsupported_method(other)),
        }
    }
}

/// The accumulated request description.
///
/// Created once by [`RequestState::init`], threaded through an arbitrary
/// number of consuming builder calls (each returning the next snapshot), and
/// consumed exactly once by [`RequestState::call`].
///
/// Builder calls never fail mid-chain: a body that cannot be serialized is
/// recorded as a deferred build error and surfaced at dispatch.
#[derive(Clone, Debug)]
pub struct RequestState {
    /// Header name → value; seeded with the four profile/content headers
    pub(crate) headers: BTreeMap<String, String>,
    /// Accumulated URL string, grown by `/segment` appends
    pub(crate) path: String,
    /// Current logical schema name
    pub(crate) schema: String,
    /// Verb the dispatcher will use
    pub(crate) method: Method,
    /// When set, the next filter application is wrapped in `not.`
    pub(crate) negate_next: bool,
    /// JSON payload; empty object until an insert/update/delete/rpc sets it
    pub(crate) body: Value,
    /// Filter parameters, multi-valued per column
    pub(crate) params: ParamMap,
    /// Transport-level hints, opaque to the core
    pub(crate) options: RequestOptions,
    /// First deferred build failure, surfaced at dispatch
    pub(crate) build_error: Option<String>,
}

impl RequestState {
    /// Create the initial state for a schema against the default base URL.
    pub fn init(schema: &str) -> Self {
        Self::init_with_base_url(schema, DEFAULT_BASE_URL)
    }

    /// Create the initial state for a schema against a custom base URL.
    ///
    /// Headers are seeded with `Accept`/`Content-Type: application/json` and
    /// the `Accept-Profile`/`Content-Profile` pair for the schema.
    pub fn init_with_base_url(schema: &str, base_url: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept-Profile".to_string(), schema.to_string());
        headers.insert("Content-Profile".to_string(), schema.to_string());
        Self {
            headers,
            path: base_url.to_string(),
            schema: schema.to_string(),
            method: Method::Get,
            negate_next: false,
            body: Value::Object(Map::new()),
            params: ParamMap::new(),
            options: RequestOptions::default(),
            build_error: None,
        }
    }

    /// Attach a bearer token via the `Authorization` header.
    pub fn auth(mut self, token: &str) -> Self {
        self.headers
            .insert("Authorization".to_string(), format!("Bearer {token}"));
        self
    }

    /// Attach basic-auth credentials as a transport hint.
    ///
    /// The credential material is opaque to the core and handed verbatim to
    /// the transport. Mutually exclusive with [`RequestState::auth`] by
    /// construction: this method never touches the `Authorization` header.
    pub fn auth_basic(mut self, username: &str, password: &str) -> Self {
        self.options.basic_auth = Some(BasicAuth {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    /// Switch to another schema.
    ///
    /// Rewrites both profile headers and resets the verb to GET — a schema
    /// switch is always a read reset.
    pub fn schema(mut self, name: &str) -> Self {
        self.schema = name.to_string();
        self.headers
            .insert("Accept-Profile".to_string(), name.to_string());
        self.headers
            .insert("Content-Profile".to_string(), name.to_string());
        self.method = Method::Get;
        self
    }

    /// Select a table by appending `/table` to the path.
    ///
    /// Repeated calls keep appending; call once per logical resource.
    pub fn from(mut self, table: &str) -> Self {
        self.path.push('/');
        self.path.push_str(table);
        self
    }

    /// Call a stored procedure: appends `/function`, sets the body to the
    /// given parameters and forces POST.
    pub fn rpc<T: Serialize>(mut self, function: &str, params: &T) -> Self {
        self.path.push('/');
        self.path.push_str(function);
        self.method = Method::Post;
        self.set_body(params)
    }

    /// Serialize a payload into the body, deferring failures to dispatch.
    pub(crate) fn set_body<T: Serialize>(mut self, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => self.body = value,
            Err(e) => {
                if self.build_error.is_none() {
                    self.build_error = Some(format!("body serialization failed: {e}"));
                }
            }
        }
        self
    }

    // ==================== Accessors ====================

    /// The verb the dispatcher will use.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The accumulated URL string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The current logical schema name.
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// All headers.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Look up a single header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// The accumulated filter parameters.
    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// The JSON payload.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Transport-level hints.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// The first deferred build failure, if any.
    pub fn build_error(&self) -> Option<&str> {
        self.build_error.as_deref()
    }
}
