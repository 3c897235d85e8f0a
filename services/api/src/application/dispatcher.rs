/// リクエストディスパッチャー
///
/// API Gatewayから受け取ったイベントをルーティングテーブルで照合し、
/// 一致したハンドラーのレスポンスを返す。
/// 不正入力、未登録ルート、ハンドラー障害はすべてここでレスポンスに変換し、
/// 呼び出し元にエラーを伝播させない。
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use lambda_runtime::Context;
use serde_json::Value;
use tracing::{error, info, info_span, warn};

use crate::application::{RouteHandler, RouteMatch, Router};
use crate::domain::{ApiRequest, ApiResponse};

/// 500レスポンスで呼び出し元に返すメッセージ（内部詳細はログのみに出力）
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// ステートレスなリクエストディスパッチャー
///
/// 呼び出し間で可変状態を共有しないため、並行に呼び出しても安全。
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// ルーティングテーブル
    router: Router,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Router::default_routes())
    }
}

impl Dispatcher {
    /// ルーティングテーブルを指定してディスパッチャーを作成
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// ルーティングテーブルへの参照を取得
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// イベントを処理してレスポンスを返す
    ///
    /// # 処理フロー
    /// 1. 呼び出し単位のspanを開始し、受信イベントをそのままログ出力
    /// 2. リクエストエンベロープを構築（失敗時は400）
    /// 3. HTTPメソッドを解釈（失敗時は400）
    /// 4. ルートを照合（未登録パスは404、メソッド不一致は405）
    /// 5. ハンドラーを実行（エラーまたはpanic時は500）
    ///
    /// # 引数
    /// * `event` - API Gatewayプロキシ統合イベント
    /// * `context` - Lambda呼び出しコンテキスト（request_idをspanに付与する以外は参照しない）
    pub fn dispatch(&self, event: Value, context: &Context) -> ApiResponse {
        let span = info_span!("dispatch", request_id = %context.request_id);
        let _guard = span.enter();

        // ディスパッチ前に受信イベントを記録（失敗したリクエストの調査用）
        info!(event = %event, "Incoming API request");

        let response = self.route(event);

        match response.status_code {
            500.. => error!(status_code = response.status_code, "リクエスト処理失敗"),
            400..=499 => warn!(status_code = response.status_code, "リクエスト拒否"),
            _ => info!(status_code = response.status_code, "リクエスト処理完了"),
        }

        response
    }

    /// エンベロープを解釈してハンドラーに委譲
    fn route(&self, event: Value) -> ApiResponse {
        let request = match ApiRequest::from_event(event) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "リクエストエンベロープが不正");
                return ApiResponse::bad_request(err.to_string());
            }
        };

        let method = match request.method() {
            Ok(method) => method,
            Err(err) => {
                warn!(error = %err, "HTTPメソッドが不正");
                return ApiResponse::bad_request(err.to_string());
            }
        };

        match self.router.find(&method, &request.path) {
            RouteMatch::Found(handler) => {
                info!(method = %method, path = %request.path, "ルート一致");
                Self::invoke(handler, &request)
            }
            RouteMatch::MethodNotAllowed(allowed) => ApiResponse::method_not_allowed(
                format!("Method {} is not allowed for {}", method, request.path),
                &allowed,
            ),
            RouteMatch::NotFound => {
                ApiResponse::not_found(format!("No route for {} {}", method, request.path))
            }
        }
    }

    /// ハンドラーを実行し、エラーとpanicを500レスポンスに変換
    fn invoke(handler: RouteHandler, request: &ApiRequest) -> ApiResponse {
        match panic::catch_unwind(AssertUnwindSafe(|| handler(request))) {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                error!(error = %err, "ハンドラーがエラーを返却");
                ApiResponse::internal_error(INTERNAL_ERROR_MESSAGE)
            }
            Err(payload) => {
                error!(panic = panic_message(payload.as_ref()), "ハンドラーがpanic");
                ApiResponse::internal_error(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

/// panicペイロードからメッセージを取り出す
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
