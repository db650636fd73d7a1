use super::{error::*, request::*};

use {
    bytes::*,
    http::{header::*, response::*, *},
    http_body::*,
    http_body_util::*,
    std::result::Result,
    tower::BoxError,
};

/// Content type prefixes for which we compute entity tags.
pub const ETAG_CONTENT_TYPES: &[&str] = &["text/html", "application/json"];

//
// EtagResponse
//

/// Response that can be annotated with an entity tag.
#[allow(async_fn_in_trait)]
pub trait EtagResponse
where
    Self: Sized,
{
    /// Check if we should skip computing an entity tag.
    ///
    /// We only handle successful (200) GET and HEAD responses with HTML or JSON content.
    fn should_skip_etag(&self, request: &ConditionalRequest) -> bool;

    /// Read the body while keeping the response usable.
    ///
    /// Returns the response, with an equivalent body, together with the body's bytes. Trailers
    /// are discarded.
    async fn duplicate_body(self) -> Result<(Self, Bytes), EtagError>;

    /// Convert into a 304 (Not Modified) response with an empty body.
    ///
    /// The headers are moved over.
    fn into_not_modified(self) -> Self;
}

impl<BodyT> EtagResponse for Response<BodyT>
where
    BodyT: Body + From<Bytes>,
    BodyT::Error: Into<BoxError>,
{
    fn should_skip_etag(&self, request: &ConditionalRequest) -> bool {
        if !request.is_get_or_head() {
            tracing::debug!("skip (method={})", request.method);
            return true;
        }

        let status = self.status();
        if status != StatusCode::OK {
            tracing::debug!("skip (status={})", status.as_u16());
            return true;
        }

        let content_type = self
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .unwrap_or_default();

        if !ETAG_CONTENT_TYPES
            .iter()
            .any(|prefix| content_type.starts_with(prefix))
        {
            tracing::debug!("skip ({}={:?})", CONTENT_TYPE, content_type);
            return true;
        }

        false
    }

    async fn duplicate_body(self) -> Result<(Self, Bytes), EtagError> {
        let (parts, body) = self.into_parts();

        let bytes = body
            .collect()
            .await
            .map_err(|error| EtagError::ReadBody(error.into()))?
            .to_bytes();

        Ok((Response::from_parts(parts, bytes.clone().into()), bytes))
    }

    fn into_not_modified(self) -> Self {
        let (parts, _body) = self.into_parts();

        let mut response = Response::new(Bytes::new().into());
        *response.status_mut() = StatusCode::NOT_MODIFIED;
        *response.version_mut() = parts.version;
        *response.headers_mut() = parts.headers;
        response
    }
}
