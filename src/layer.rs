use super::{etag::*, service::*};

use {
    sha1::Sha1,
    std::{marker::*, time::*},
    tower::*,
};

//
// EtagLayer
//

/// HTTP `ETag` layer with `If-None-Match` support.
///
/// This layer configures and installs an [EtagService].
///
/// The digest used for entity tags is provided as a generic type parameter. Any
/// [Digest](sha1::Digest) implementation will do, though note that clients will only be able to
/// match tags produced by the same digest. The default is SHA-1.
///
/// Requirements
/// ============
///
/// The response body type must implement [From]\<[Bytes](bytes::Bytes)\>. (This is the case with
/// [axum](https://github.com/tokio-rs/axum).)
///
/// Request handling
/// ================
///
/// 1. A request arrives. We capture its method and `If-None-Match` header and pass it on to the
///    inner service.
///
/// 2. Check if the response is eligible. It must be:
///
///    * For a GET or HEAD request
///    * Status 200 (OK)
///    * `Content-Type` starting with "text/html" or "application/json"
///
///    If not, the response is passed through untouched. END.
///
/// 3. If the response does not have a `Cache-Control` header then we add one. The default is
///    "private, no-cache, max-age=0, must-revalidate". See [cache_control](Self::cache_control),
///    [without_cache_control](Self::without_cache_control), and [max_age](Self::max_age).
///
/// 4. Read the body and compute its entity tag, which we set as the `ETag` header. The response
///    body remains intact.
///
/// 5. If the request's `If-None-Match` matches the entity tag then send a 304 (Not Modified)
///    response with an empty body and the same headers. END.
///
/// 6. Otherwise send the original response with the added headers. END.
///
/// Matching uses weak comparison by default, in which case the `W/` marker is ignored. With
/// strong comparison a weak validator never matches. See [weak](Self::weak).
///
/// Note that the entire body is read into memory in order to compute the entity tag, so this
/// layer is best suited for rendered pages and API responses rather than large files.
pub struct EtagLayer<DigestT = Sha1> {
    options: EtagOptions,
    digest: PhantomData<fn() -> DigestT>,
}

impl<DigestT> EtagLayer<DigestT> {
    /// Constructor.
    pub fn new(options: EtagOptions) -> Self {
        Self {
            options,
            digest: PhantomData,
        }
    }

    /// Replace all options.
    pub fn options(mut self, options: EtagOptions) -> Self {
        self.options = options;
        self
    }

    /// Explicit `Cache-Control` header value.
    ///
    /// When set, [max_age](Self::max_age) is ignored. An existing `Cache-Control` header on the
    /// response is never overwritten.
    ///
    /// The default is "private, no-cache, max-age=0, must-revalidate".
    pub fn cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.options = self.options.cache_control(cache_control);
        self
    }

    /// Do not add a `Cache-Control` header.
    pub fn without_cache_control(mut self) -> Self {
        self.options = self.options.without_cache_control();
        self
    }

    /// `max-age` in seconds for the default `Cache-Control` header.
    ///
    /// The default is 0.
    pub fn max_age(mut self, max_age: u64) -> Self {
        self.options = self.options.max_age(max_age);
        self
    }

    /// `max-age` for the default `Cache-Control` header.
    ///
    /// Sub-second precision is truncated.
    pub fn max_age_duration(mut self, max_age: Duration) -> Self {
        self.options = self.options.max_age_duration(max_age);
        self
    }

    /// Whether to generate weak entity tags and use weak comparison.
    ///
    /// The default is true.
    pub fn weak(mut self, weak: bool) -> Self {
        self.options = self.options.weak(weak);
        self
    }
}

impl<DigestT> Default for EtagLayer<DigestT> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<DigestT> Clone for EtagLayer<DigestT> {
    fn clone(&self) -> Self {
        // Can't #[derive(Clone)] because DigestT isn't Clone
        Self::new(self.options.clone())
    }
}

impl<InnerServiceT, DigestT> Layer<InnerServiceT> for EtagLayer<DigestT> {
    type Service = EtagService<InnerServiceT, DigestT>;

    fn layer(&self, inner_service: InnerServiceT) -> Self::Service {
        EtagService::new(inner_service, self.options.clone())
    }
}
