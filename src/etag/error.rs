use {http::header::*, thiserror::*, tower::BoxError};

//
// EtagError
//

/// ETag error.
#[derive(Debug, Error)]
pub enum EtagError {
    /// Could not read the response body.
    #[error("read body: {0}")]
    ReadBody(#[source] BoxError),

    /// Invalid header value.
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}
