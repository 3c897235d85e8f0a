// ルーティングテーブル
//
// (HTTPメソッド, パス) の組をハンドラー関数に対応付ける。
// ルートの追加は条件分岐ではなくテーブルへの登録で行う。

use std::collections::HashMap;
use std::fmt;

use lambda_http::http::Method;
use thiserror::Error;

use crate::application::HealthcheckHandler;
use crate::domain::{ApiRequest, ApiResponse, Route};

/// ヘルスチェックエンドポイントのパス
pub const HEALTHCHECK_PATH: &str = "/v1/healthcheck";

/// ルートハンドラーのエラー型
#[derive(Debug, Error)]
pub enum HandlerError {
    /// レスポンスボディのシリアライズに失敗
    #[error("failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// その他のハンドラー内部エラー
    #[error("handler failed: {0}")]
    Internal(String),
}

/// ルートハンドラー関数
///
/// リクエストを受け取りレスポンスを返す。状態は持たない。
pub type RouteHandler = fn(&ApiRequest) -> Result<ApiResponse, HandlerError>;

/// ルート検索結果
pub enum RouteMatch {
    /// メソッドとパスが一致するハンドラー
    Found(RouteHandler),
    /// パスは登録済みだがメソッドが一致しない（登録済みメソッド一覧）
    MethodNotAllowed(Vec<Method>),
    /// パスが未登録
    NotFound,
}

/// (メソッド, パス) → ハンドラーのルーティングテーブル
#[derive(Clone, Default)]
pub struct Router {
    routes: HashMap<Route, RouteHandler>,
}

impl Router {
    /// 空のルーターを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 標準ルートを登録したルーターを作成
    ///
    /// - GET /v1/healthcheck
    pub fn default_routes() -> Self {
        Self::new().route(Method::GET, HEALTHCHECK_PATH, HealthcheckHandler::handle)
    }

    /// ルートを登録
    ///
    /// 同じ (メソッド, パス) を再登録した場合は後の登録で置き換える。
    pub fn route(mut self, method: Method, path: impl Into<String>, handler: RouteHandler) -> Self {
        self.routes.insert(Route::new(method, path), handler);
        self
    }

    /// メソッドとパスに一致するハンドラーを検索
    ///
    /// 一致判定は完全一致（大文字小文字を区別する）。
    pub fn find(&self, method: &Method, path: &str) -> RouteMatch {
        if let Some(handler) = self.routes.get(&Route::new(method.clone(), path)) {
            return RouteMatch::Found(*handler);
        }

        let mut allowed: Vec<Method> = self
            .routes
            .keys()
            .filter(|route| route.path == path)
            .map(|route| route.method.clone())
            .collect();

        if allowed.is_empty() {
            return RouteMatch::NotFound;
        }

        allowed.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        RouteMatch::MethodNotAllowed(allowed)
    }

    /// 登録済みルート数
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// ルートが未登録かどうか
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// 登録済みルートを文字列順で取得
    pub fn routes(&self) -> Vec<&Route> {
        let mut routes: Vec<&Route> = self.routes.keys().collect();
        routes.sort_by_key(|route| route.to_string());
        routes
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api_request::tests::sample_event;
    use lambda_http::http::StatusCode;

    fn created(_request: &ApiRequest) -> Result<ApiResponse, HandlerError> {
        Ok(ApiResponse::new(StatusCode::CREATED))
    }

    fn accepted(_request: &ApiRequest) -> Result<ApiResponse, HandlerError> {
        Ok(ApiResponse::new(StatusCode::ACCEPTED))
    }

    fn call(found: RouteMatch, method: &str, path: &str) -> ApiResponse {
        let request = ApiRequest::from_event(sample_event(method, path)).unwrap();
        match found {
            RouteMatch::Found(handler) => handler(&request).unwrap(),
            _ => panic!("ルートが見つかるべき: {method} {path}"),
        }
    }

    #[test]
    fn test_default_routes_contains_healthcheck_only() {
        let router = Router::default_routes();

        assert_eq!(router.len(), 1);
        assert_eq!(
            router.routes(),
            vec![&Route::new(Method::GET, HEALTHCHECK_PATH)]
        );

        let response = call(router.find(&Method::GET, HEALTHCHECK_PATH), "GET", HEALTHCHECK_PATH);
        assert_eq!(response.status_code, 200);
    }

    #[test]
    fn test_new_router_is_empty() {
        let router = Router::new();

        assert!(router.is_empty());
        assert!(matches!(router.find(&Method::GET, "/"), RouteMatch::NotFound));
    }

    #[test]
    fn test_find_unknown_path() {
        let router = Router::default_routes();

        assert!(matches!(
            router.find(&Method::GET, "/v1/unknown"),
            RouteMatch::NotFound
        ));
    }

    #[test]
    fn test_find_is_exact_match() {
        let router = Router::default_routes();

        for path in ["/v1/healthcheck/", "/V1/HEALTHCHECK", "/v1", "v1/healthcheck"] {
            assert!(
                matches!(router.find(&Method::GET, path), RouteMatch::NotFound),
                "{path}は一致しないべき"
            );
        }
    }

    #[test]
    fn test_find_wrong_method_lists_allowed_methods() {
        let router = Router::default_routes().route(Method::DELETE, HEALTHCHECK_PATH, accepted);

        match router.find(&Method::POST, HEALTHCHECK_PATH) {
            RouteMatch::MethodNotAllowed(allowed) => {
                assert_eq!(allowed, vec![Method::DELETE, Method::GET]);
            }
            _ => panic!("MethodNotAllowedになるべき"),
        }
    }

    #[test]
    fn test_find_lowercase_method_does_not_match() {
        let router = Router::default_routes();
        let lower = Method::from_bytes(b"get").unwrap();

        assert!(matches!(
            router.find(&lower, HEALTHCHECK_PATH),
            RouteMatch::MethodNotAllowed(_)
        ));
    }

    #[test]
    fn test_additional_routes_are_dispatched_independently() {
        let router = Router::default_routes()
            .route(Method::POST, "/v1/items", created)
            .route(Method::PUT, "/v1/items", accepted);

        assert_eq!(router.len(), 3);
        assert_eq!(call(router.find(&Method::POST, "/v1/items"), "POST", "/v1/items").status_code, 201);
        assert_eq!(call(router.find(&Method::PUT, "/v1/items"), "PUT", "/v1/items").status_code, 202);
    }

    #[test]
    fn test_reregistering_route_replaces_handler() {
        let router = Router::new()
            .route(Method::POST, "/v1/items", created)
            .route(Method::POST, "/v1/items", accepted);

        assert_eq!(router.len(), 1);
        assert_eq!(call(router.find(&Method::POST, "/v1/items"), "POST", "/v1/items").status_code, 202);
    }

    #[test]
    fn test_debug_lists_routes() {
        let router = Router::default_routes();
        let debug = format!("{router:?}");

        assert!(debug.contains("/v1/healthcheck"), "{debug}");
    }

    #[test]
    fn test_handler_error_display() {
        let err = HandlerError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "handler failed: boom");
    }
}
