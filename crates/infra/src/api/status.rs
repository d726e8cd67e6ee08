//! Status-code classification
//!
//! Decides how the engine routes a response: into the success target, into
//! the structured error target, or into a failure.

/// Routing class of an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// Decode into the success target
    Success,
    /// Decode into the structured error target; the call itself succeeds
    DomainError,
    /// Rate limited; the call fails without reading the body
    Throttled,
    /// Any other status; the call fails without reading the body
    Fatal,
}

/// Statuses whose body matches the caller's success schema.
pub const SUCCESS_STATUSES: [u16; 4] = [200, 201, 207, 204];

/// Statuses that carry the structured error body, 500 included.
pub const DOMAIN_ERROR_STATUSES: [u16; 5] = [400, 401, 403, 404, 500];

/// Classify a numeric status code.
pub fn classify(status: u16) -> StatusClass {
    match status {
        200 | 201 | 207 | 204 => StatusClass::Success,
        400 | 401 | 403 | 404 | 500 => StatusClass::DomainError,
        429 => StatusClass::Throttled,
        _ => StatusClass::Fatal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        for status in SUCCESS_STATUSES {
            assert_eq!(classify(status), StatusClass::Success, "status {status}");
        }
    }

    #[test]
    fn test_domain_error_statuses() {
        for status in DOMAIN_ERROR_STATUSES {
            assert_eq!(classify(status), StatusClass::DomainError, "status {status}");
        }
    }

    #[test]
    fn test_throttled() {
        assert_eq!(classify(429), StatusClass::Throttled);
    }

    #[test]
    fn test_everything_else_is_fatal() {
        for status in [100, 202, 203, 205, 301, 302, 304, 402, 405, 409, 422, 501, 502, 503, 504] {
            assert_eq!(classify(status), StatusClass::Fatal, "status {status}");
        }
    }
}
