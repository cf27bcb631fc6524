use crate::{Cause, ErrorKind, RestError};

impl RestError {
    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message, [])
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message, [])
    }

    /// 403 Forbidden
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message, [])
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message, [])
    }

    /// 405 Method Not Allowed
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, message, [])
    }

    /// 406 Not Acceptable
    pub fn not_acceptable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAcceptable, message, [])
    }

    /// 408 Request Timeout
    pub fn request_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestTimeout, message, [])
    }

    /// 409 Conflict
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message, [])
    }

    /// 410 Gone
    pub fn gone(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Gone, message, [])
    }

    /// 411 Length Required
    pub fn length_required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LengthRequired, message, [])
    }

    /// 412 Precondition Failed
    pub fn precondition_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PreconditionFailed, message, [])
    }

    /// 413 Payload Too Large
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PayloadTooLarge, message, [])
    }

    /// 415 Unsupported Media Type
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedMediaType, message, [])
    }

    /// 417 Expectation Failed
    pub fn expectation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpectationFailed, message, [])
    }

    /// 426 Upgrade Required
    pub fn upgrade_required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpgradeRequired, message, [])
    }

    /// 429 Too Many Requests
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooManyRequests, message, [])
    }

    /// 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message, [])
    }

    /// 501 Not Implemented
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, message, [])
    }

    /// 502 Bad Gateway
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadGateway, message, [])
    }

    /// 503 Service Unavailable
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message, [])
    }

    /// 504 Gateway Timeout
    pub fn gateway_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::GatewayTimeout, message, [])
    }

    /// 505 HTTP Version Not Supported
    pub fn http_version_not_supported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HttpVersionNotSupported, message, [])
    }

    /// 400 Bad Request with field-level causes
    pub fn bad_request_validation(message: impl Into<String>, causes: impl IntoIterator<Item = Cause>) -> Self {
        Self::new(ErrorKind::BadRequest, message, causes)
    }

    /// 409 Conflict with field-level causes
    pub fn conflict_validation(message: impl Into<String>, causes: impl IntoIterator<Item = Cause>) -> Self {
        Self::new(ErrorKind::Conflict, message, causes)
    }

    /// 422 Unprocessable Entity
    ///
    /// Always carries causes, since the request was well-formed but some of
    /// its fields were rejected.
    pub fn unprocessable_entity(message: impl Into<String>, causes: impl IntoIterator<Item = Cause>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message, causes)
    }
}
