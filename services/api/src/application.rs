// アプリケーション層モジュール
pub mod dispatcher;
pub mod healthcheck_handler;
pub mod router;

// 再エクスポート
pub use dispatcher::Dispatcher;
pub use healthcheck_handler::{HealthStatus, HealthcheckHandler, API_AVAILABLE};
pub use router::{HandlerError, RouteHandler, RouteMatch, Router, HEALTHCHECK_PATH};
