/// ヘルスチェックハンドラー
///
/// GET /v1/healthcheck に対してAPIの稼働状態を返す。
/// リクエストの内容（ヘッダー、クエリ、ボディ）は参照しない。
use lambda_http::http::StatusCode;
use serde::Serialize;

use crate::application::HandlerError;
use crate::domain::{ApiRequest, ApiResponse};

/// 稼働中を示すステータスメッセージ
pub const API_AVAILABLE: &str = "API Available";

/// ヘルスチェックレスポンスボディ
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// ヘルスチェックハンドラー
pub struct HealthcheckHandler;

impl HealthcheckHandler {
    /// ヘルスチェックリクエストを処理
    ///
    /// # Returns
    /// デフォルトヘッダー付きのHTTP 200レスポンス
    /// （ボディ: `{"status": "API Available"}`）
    pub fn handle(_request: &ApiRequest) -> Result<ApiResponse, HandlerError> {
        let status = HealthStatus {
            status: API_AVAILABLE,
        };

        Ok(ApiResponse::json(StatusCode::OK, &status)?)
    }
}
