//! Transport boundary: the single capability the core depends on.

use crate::builder::Method;
use crate::error::{RestError, RestResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Basic-auth credential material, handed verbatim to the transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Transport-level hints carried on the request state.
///
/// Opaque to the core: nothing here influences how the request shape is
/// built, only how the transport attaches it to the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Credentials the transport should attach as basic auth, if any.
    pub basic_auth: Option<BasicAuth>,
}

/// The finished request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    /// The accumulated path, without query string.
    pub url: String,
    pub headers: BTreeMap<String, String>,
    /// Flattened `(key, value)` pairs; repeated keys carry one encoded
    /// filter each, in application order.
    pub query: Vec<(String, String)>,
    /// JSON payload; `None` for GET.
    pub body: Option<Value>,
    pub options: RequestOptions,
}

impl OutboundRequest {
    /// Render the full request URL with the query string attached.
    pub fn url_with_query(&self) -> RestResult<Url> {
        let mut url = Url::parse(&self.url)?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// A decoded response from the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl Response {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> RestResult<T> {
        serde_json::from_value(self.body.clone()).map_err(|e| RestError::encoding(e.to_string()))
    }
}

/// The external capability that puts a finished request on the wire.
///
/// Implementations own connection handling, credential attachment, JSON wire
/// encoding and response decoding. The core makes exactly one `send` call per
/// dispatch and surfaces the outcome unchanged; retry, timeout and
/// cancellation policy all live behind this trait.
pub trait Transport: Send + Sync {
    /// Issue the request and return the decoded response.
    fn send(
        &self,
        request: OutboundRequest,
    ) -> impl std::future::Future<Output = RestResult<Response>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: OutboundRequest,
    ) -> impl std::future::Future<Output = RestResult<Response>> + Send {
        (*self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;

    #[test]
    fn test_url_with_query_repeats_keys() {
        let request = builder::init("public")
            .from("users")
            .gt("age", "20")
            .lt("age", "30")
            .into_request();

        let url = request.url_with_query().expect("valid url");
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/users?age=gt.20&age=lt.30"
        );
    }

    #[test]
    fn test_url_without_params_has_no_query() {
        let request = builder::init("public").from("users").into_request();
        let url = request.url_with_query().expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:3000/users");
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let request = builder::init_with_base_url("public", "not a url")
            .from("users")
            .into_request();
        assert!(matches!(
            request.url_with_query(),
            Err(RestError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_response_json_decoding() {
        let response = Response {
            status: 200,
            headers: BTreeMap::new(),
            body: serde_json::json!({"id": 1}),
        };
        assert!(response.is_success());

        #[derive(Deserialize)]
        struct Row {
            id: i64,
        }
        let row: Row = response.json().expect("decodes");
        assert_eq!(row.id, 1);

        let err = response.json::<Vec<String>>().unwrap_err();
        assert!(err.is_encoding());
    }
}
