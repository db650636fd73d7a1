use super::etag::*;

use {
    bytes::*,
    http::{request::*, response::*},
    http_body::*,
    kutil::std::future::*,
    sha1::{Digest, Sha1},
    std::{marker::*, mem, result::Result, task::*},
    tower::*,
};

//
// EtagService
//

/// HTTP `ETag` service with `If-None-Match` support.
///
/// You will often be using [EtagLayer](super::EtagLayer) rather than this service directly,
/// thus this service's functionality is documented there.
pub struct EtagService<InnerServiceT, DigestT = Sha1> {
    inner_service: InnerServiceT,
    options: EtagOptions,
    digest: PhantomData<fn() -> DigestT>,
}

impl<InnerServiceT, DigestT> EtagService<InnerServiceT, DigestT> {
    /// Constructor.
    pub fn new(inner_service: InnerServiceT, options: EtagOptions) -> Self {
        Self {
            inner_service,
            options,
            digest: PhantomData,
        }
    }

    /// Options.
    pub fn options(&self) -> &EtagOptions {
        &self.options
    }

    // Clone while keeping `inner_service`.
    //
    // See: https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
    fn clone_and_keep_inner_service(&mut self) -> Self
    where
        InnerServiceT: Clone,
    {
        let mut clone = self.clone();
        clone.inner_service = mem::replace(&mut self.inner_service, clone.inner_service);
        clone
    }

    // Handle request.
    async fn handle<RequestBodyT, ResponseBodyT>(
        mut self,
        request: Request<RequestBodyT>,
    ) -> Result<Response<ResponseBodyT>, BoxError>
    where
        InnerServiceT: Service<Request<RequestBodyT>, Response = Response<ResponseBodyT>>,
        InnerServiceT::Error: Into<BoxError>,
        ResponseBodyT: Body + From<Bytes>,
        ResponseBodyT::Error: Into<BoxError>,
        DigestT: Digest,
    {
        // Capture request data before moving the request to the inner service
        let conditional_request = request.conditional_request();

        let upstream_response = self
            .inner_service
            .call(request)
            .await
            .map_err(Into::<BoxError>::into)?;

        let response = conditional_response::<_, DigestT>(
            &conditional_request,
            upstream_response,
            &self.options,
        )
        .await?;

        Ok(response.into_response())
    }
}

impl<InnerServiceT, DigestT> Clone for EtagService<InnerServiceT, DigestT>
where
    InnerServiceT: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.inner_service.clone(), self.options.clone())
    }
}

impl<InnerServiceT, RequestBodyT, ResponseBodyT, DigestT> Service<Request<RequestBodyT>>
    for EtagService<InnerServiceT, DigestT>
where
    InnerServiceT: 'static
        + Service<Request<RequestBodyT>, Response = Response<ResponseBodyT>>
        + Clone
        + Send,
    InnerServiceT::Future: Send,
    InnerServiceT::Error: Into<BoxError>,
    RequestBodyT: 'static + Send,
    ResponseBodyT: 'static + Body + From<Bytes> + Send,
    ResponseBodyT::Data: Send,
    ResponseBodyT::Error: Into<BoxError>,
    DigestT: 'static + Digest,
{
    type Response = Response<ResponseBodyT>;
    type Error = BoxError;
    type Future = CapturedFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, context: &mut Context) -> Poll<Result<(), Self::Error>> {
        self.inner_service.poll_ready(context).map_err(Into::into)
    }

    fn call(&mut self, request: Request<RequestBodyT>) -> Self::Future {
        // The future must own us, so we clone (see `clone_and_keep_inner_service`)
        let cloned_self = self.clone_and_keep_inner_service();
        capture_async! { cloned_self.handle(request).await }
    }
}
