//! Terminal dispatch: one finished state, one transport call.

use crate::builder::{Method, RequestState};
use crate::error::{RestError, RestResult};
use crate::transport::{OutboundRequest, Response, Transport};

/// Dispatch a finished state through the transport.
///
/// Free-function form of [`RequestState::call`].
pub async fn dispatch(state: RequestState, transport: &impl Transport) -> RestResult<Response> {
    state.call(transport).await
}

impl RequestState {
    /// Consume the state and issue the request through the transport.
    ///
    /// Deferred build errors surface here before anything touches the wire.
    /// Exactly one transport call is made; its outcome is returned unchanged,
    /// with no retries and no recovery.
    pub async fn call(self, transport: &impl Transport) -> RestResult<Response> {
        self.validate()?;
        let request = self.into_request();
        tracing::debug!(
            target: "pgrest.dispatch",
            method = %request.method,
            url = %request.url,
            query_params = request.query.len(),
            has_body = request.body.is_some(),
            "dispatching request"
        );
        transport.send(request).await
    }

    fn validate(&self) -> RestResult<()> {
        match self.build_error() {
            Some(message) => Err(RestError::encoding(message)),
            None => Ok(()),
        }
    }

    /// Convert the state into the outbound request shape.
    ///
    /// The forwarding matrix is keyed purely on the verb: GET carries no
    /// body, every write verb forwards the accumulated body alongside
    /// headers, query parameters and transport options.
    pub fn into_request(self) -> OutboundRequest {
        let body = match self.method {
            Method::Get => None,
            Method::Post | Method::Patch | Method::Delete => Some(self.body),
        };
        OutboundRequest {
            method: self.method,
            url: self.path,
            headers: self.headers,
            query: self.params.to_query(),
            body,
            options: self.options,
        }
    }
}
