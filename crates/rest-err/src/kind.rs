use http::StatusCode;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Category of a [`RestError`](crate::RestError)
///
/// Each variant owns exactly one HTTP status code and one short error
/// class string, so a status code and its class can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    PayloadTooLarge,
    UnsupportedMediaType,
    ExpectationFailed,
    UnprocessableEntity,
    UpgradeRequired,
    TooManyRequests,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Gone => StatusCode::GONE,
            Self::LengthRequired => StatusCode::LENGTH_REQUIRED,
            Self::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::ExpectationFailed => StatusCode::EXPECTATION_FAILED,
            Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UpgradeRequired => StatusCode::UPGRADE_REQUIRED,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Self::BadGateway => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::HttpVersionNotSupported => StatusCode::HTTP_VERSION_NOT_SUPPORTED,
        }
    }

    /// Short machine-readable error class (e.g. `not found`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::NotAcceptable => "not acceptable",
            Self::RequestTimeout => "request timeout",
            Self::Conflict => "conflict",
            Self::Gone => "gone",
            Self::LengthRequired => "length required",
            Self::PreconditionFailed => "precondition failed",
            Self::PayloadTooLarge => "payload too large",
            Self::UnsupportedMediaType => "unsupported media type",
            Self::ExpectationFailed => "expectation failed",
            Self::UnprocessableEntity => "unprocessable entity",
            Self::UpgradeRequired => "upgrade required",
            Self::TooManyRequests => "too many requests",
            Self::InternalServerError => "internal server error",
            Self::NotImplemented => "not implemented",
            Self::BadGateway => "bad gateway",
            Self::ServiceUnavailable => "service unavailable",
            Self::GatewayTimeout => "gateway timeout",
            Self::HttpVersionNotSupported => "http version not supported",
        }
    }

    /// Look up the kind that owns a status code
    ///
    /// Returns `None` for codes without a dedicated kind.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        Self::iter().find(|kind| kind.status_code() == status)
    }

    /// Look up a kind by its raw numeric status code
    pub fn from_code(code: u16) -> Option<Self> {
        StatusCode::from_u16(code).ok().and_then(Self::from_status)
    }

    /// Whether this kind is a 4xx
    pub fn is_client_error(self) -> bool {
        self.status_code().is_client_error()
    }

    /// Whether this kind is a 5xx
    pub fn is_server_error(self) -> bool {
        self.status_code().is_server_error()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorKind> for StatusCode {
    fn from(kind: ErrorKind) -> Self {
        kind.status_code()
    }
}

/// Whether a raw status code falls in `[400, 500)`
pub const fn is_client_error_code(code: u16) -> bool {
    matches!(code, 400..=499)
}

/// Whether a raw status code falls in `[500, 600)`
pub const fn is_server_error_code(code: u16) -> bool {
    matches!(code, 500..=599)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn status_and_class_are_unique_per_kind() {
        let codes: HashSet<_> = ErrorKind::iter().map(ErrorKind::status_code).collect();
        let classes: HashSet<_> = ErrorKind::iter().map(ErrorKind::as_str).collect();

        assert_eq!(codes.len(), ErrorKind::COUNT);
        assert_eq!(classes.len(), ErrorKind::COUNT);
    }

    #[test]
    fn from_status_inverts_status_code() {
        for kind in ErrorKind::iter() {
            assert_eq!(ErrorKind::from_status(kind.status_code()), Some(kind));
        }
    }

    #[test]
    fn unsupported_codes_have_no_kind() {
        assert_eq!(ErrorKind::from_code(200), None);
        assert_eq!(ErrorKind::from_code(418), None);
        assert_eq!(ErrorKind::from_code(999), None);
        assert_eq!(ErrorKind::from_code(42), None);
    }

    #[test]
    fn every_kind_is_client_or_server() {
        for kind in ErrorKind::iter() {
            assert_ne!(kind.is_client_error(), kind.is_server_error(), "{kind}");
        }
    }

    #[test]
    fn code_ranges() {
        assert!(!is_client_error_code(399));
        assert!(is_client_error_code(400));
        assert!(is_client_error_code(499));
        assert!(!is_client_error_code(500));

        assert!(!is_server_error_code(499));
        assert!(is_server_error_code(500));
        assert!(is_server_error_code(599));
        assert!(!is_server_error_code(600));

        for code in [0, 200, 302, 600, 700] {
            assert!(!is_client_error_code(code));
            assert!(!is_server_error_code(code));
        }
    }
}
