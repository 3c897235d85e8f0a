/// Route key of the dispatch table.
///
/// Matching is exact and case-sensitive on both method and path.
use std::fmt;

use lambda_http::http::Method;

/// (HTTP method, path) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub method: Method,
    pub path: String,
}

impl Route {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let route = Route::new(Method::GET, "/v1/healthcheck");
        assert_eq!(route.to_string(), "GET /v1/healthcheck");
    }

    #[test]
    fn test_equality_is_exact() {
        let route = Route::new(Method::GET, "/v1/healthcheck");

        assert_eq!(route, Route::new(Method::GET, "/v1/healthcheck"));
        assert_ne!(route, Route::new(Method::GET, "/v1/healthcheck/"));
        assert_ne!(route, Route::new(Method::GET, "/V1/HealthCheck"));
        assert_ne!(route, Route::new(Method::POST, "/v1/healthcheck"));
    }
}
