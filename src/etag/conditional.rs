use super::{configuration::*, error::*, matching::*, request::*, response::*, tag::*};

use {
    bytes::*,
    http::{header::*, response::*},
    http_body::*,
    sha1::Digest,
    std::result::Result,
    tower::BoxError,
};

//
// ConditionalResponse
//

/// Outcome of [conditional_response].
#[derive(Debug)]
pub enum ConditionalResponse<BodyT> {
    /// Not eligible. The response is untouched.
    PassThrough(Response<BodyT>),

    /// The original response with `ETag` (and possibly `Cache-Control`) headers added.
    Annotated(Response<BodyT>),

    /// A new 304 (Not Modified) response carrying the same headers.
    NotModified(Response<BodyT>),
}

impl<BodyT> ConditionalResponse<BodyT> {
    /// Whether we are [NotModified](Self::NotModified).
    pub fn is_not_modified(&self) -> bool {
        matches!(self, Self::NotModified(_))
    }

    /// Response.
    pub fn response(&self) -> &Response<BodyT> {
        match self {
            Self::PassThrough(response)
            | Self::Annotated(response)
            | Self::NotModified(response) => response,
        }
    }

    /// Into response.
    pub fn into_response(self) -> Response<BodyT> {
        match self {
            Self::PassThrough(response)
            | Self::Annotated(response)
            | Self::NotModified(response) => response,
        }
    }
}

/// Handles `ETag` and `If-None-Match`.
///
/// Eligible responses are successful (200) GET and HEAD responses with HTML or JSON content.
/// Anything else is passed through untouched.
///
/// For eligible responses we:
///
/// 1. Add a `Cache-Control` header according to the options, unless the response already has
///    one.
/// 2. Read the body (keeping the response usable) and add an `ETag` header computed from it.
/// 3. If the request's `If-None-Match` matches the entity tag then return a new 304 (Not
///    Modified) response with the same headers. Otherwise return the annotated response.
///
/// Errors are returned as is. Note that by then the response has been consumed.
pub async fn conditional_response<BodyT, DigestT>(
    request: &ConditionalRequest,
    mut response: Response<BodyT>,
    options: &EtagOptions,
) -> Result<ConditionalResponse<BodyT>, EtagError>
where
    BodyT: Body + From<Bytes>,
    BodyT::Error: Into<BoxError>,
    DigestT: Digest,
{
    let configuration = options.resolve();

    if response.should_skip_etag(request) {
        return Ok(ConditionalResponse::PassThrough(response));
    }

    let headers = response.headers_mut();
    if !headers.contains_key(CACHE_CONTROL)
        && let Some(cache_control) = &configuration.cache_control
    {
        headers.insert(CACHE_CONTROL, HeaderValue::from_str(cache_control)?);
    }

    let (mut response, body) = response.duplicate_body().await?;
    let text = String::from_utf8_lossy(&body);

    if annotate_and_match::<DigestT>(
        request.if_none_match(),
        &text,
        response.headers_mut(),
        configuration.weak,
    )? {
        tracing::debug!("not modified");
        Ok(ConditionalResponse::NotModified(response.into_not_modified()))
    } else {
        tracing::debug!("annotated");
        Ok(ConditionalResponse::Annotated(response))
    }
}

/// Sets the `ETag` header for the text and checks it against the client validator.
///
/// Can be used by handlers that have the content at hand and want to skip rendering the
/// response when it would be 304 (Not Modified) anyway.
pub fn annotate_and_match<DigestT>(
    if_none_match: Option<&str>,
    text: &str,
    headers: &mut HeaderMap,
    weak: bool,
) -> Result<bool, EtagError>
where
    DigestT: Digest,
{
    let entity_tag = EntityTag::compute_with::<DigestT>(text, weak);
    headers.insert(ETAG, entity_tag.to_header_value()?);
    Ok(entity_tags_match(weak, if_none_match, &entity_tag))
}
