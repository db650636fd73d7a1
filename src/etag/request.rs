use http::{header::*, *};

//
// ConditionalRequest
//

/// The parts of a request we need for deciding on a conditional response.
///
/// Captured before the request is moved to the inner service.
#[derive(Clone, Debug)]
pub struct ConditionalRequest {
    /// Method.
    pub method: Method,

    /// `If-None-Match` header value.
    pub if_none_match: Option<HeaderValue>,
}

impl ConditionalRequest {
    /// Constructor.
    pub fn new(method: Method, if_none_match: Option<HeaderValue>) -> Self {
        Self {
            method,
            if_none_match,
        }
    }

    /// `If-None-Match` as a string.
    ///
    /// Values that are not valid header strings are treated as absent.
    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match
            .as_ref()
            .and_then(|if_none_match| if_none_match.to_str().ok())
    }

    /// Whether the method is GET or HEAD.
    pub fn is_get_or_head(&self) -> bool {
        (self.method == Method::GET) || (self.method == Method::HEAD)
    }
}

//
// ToConditionalRequest
//

/// To [ConditionalRequest].
pub trait ToConditionalRequest {
    /// To [ConditionalRequest].
    fn conditional_request(&self) -> ConditionalRequest;
}

impl<RequestBodyT> ToConditionalRequest for Request<RequestBodyT> {
    fn conditional_request(&self) -> ConditionalRequest {
        ConditionalRequest::new(
            self.method().clone(),
            self.headers().get(IF_NONE_MATCH).cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_method_and_if_none_match() {
        let request = Request::builder()
            .method(Method::HEAD)
            .header("if-none-match", "W/\"abc\"")
            .body(())
            .unwrap();

        let conditional_request = request.conditional_request();
        assert_eq!(conditional_request.method, Method::HEAD);
        assert!(conditional_request.is_get_or_head());
        assert_eq!(conditional_request.if_none_match(), Some("W/\"abc\""));
    }

    #[test]
    fn absent_if_none_match() {
        let request = Request::post("/").body(()).unwrap();

        let conditional_request = request.conditional_request();
        assert!(!conditional_request.is_get_or_head());
        assert_eq!(conditional_request.if_none_match(), None);
    }

    #[test]
    fn opaque_if_none_match_is_absent() {
        let conditional_request = ConditionalRequest::new(
            Method::GET,
            Some(HeaderValue::from_bytes(b"\"\xff\"").unwrap()),
        );
        assert_eq!(conditional_request.if_none_match(), None);
    }
}
