/// API Gatewayレスポンスエンベロープ
///
/// プロキシ統合の戻り値として`statusCode`, `headers`, `isBase64Encoded`, `body`
/// の4キーを持つJSONにシリアライズされる。
use std::collections::BTreeMap;

use lambda_http::http::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::json_body::to_json_body;

/// 全レスポンスに付与するデフォルトヘッダー
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
/// - Access-Control-Allow-Credentials: true
pub const DEFAULT_HEADERS: [(&str, &str); 3] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Credentials", "true"),
];

/// エラーレスポンスのボディ
///
/// JSON形式で`error`（エラー種別）と`message`（詳細メッセージ）を含む。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// エラー種別（例: "bad_request", "not_found", "method_not_allowed", "internal_error"）
    pub error: String,
    /// 詳細なエラーメッセージ
    pub message: String,
}

/// Lambdaから返却するレスポンスエンベロープ
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// レスポンスヘッダー
    pub headers: BTreeMap<String, String>,
    /// bodyがBase64エンコード済みかどうか
    pub is_base64_encoded: bool,
    /// シリアライズ済みのボディ
    pub body: String,
}

impl ApiResponse {
    /// デフォルトヘッダー付きの空ボディレスポンスを作成
    pub fn new(status: StatusCode) -> Self {
        let headers = DEFAULT_HEADERS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Self {
            status_code: status.as_u16(),
            headers,
            is_base64_encoded: false,
            body: String::new(),
        }
    }

    /// 値をJSONボディとして持つレスポンスを作成
    pub fn json<T>(status: StatusCode, value: &T) -> Result<Self, serde_json::Error>
    where
        T: ?Sized + Serialize,
    {
        Ok(Self::new(status).with_body(to_json_body(value)?))
    }

    /// ボディを設定
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// ヘッダーを設定（ビルダー形式）
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(key, value);
        self
    }

    /// ヘッダーを設定
    ///
    /// 大文字小文字のみ異なる既存ヘッダーは置き換える。
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
        self.headers.insert(key, value.into());
    }

    /// ヘッダー値を取得（大文字小文字を区別しない）
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// エラーレスポンスを作成
    pub fn error(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        let body = ApiErrorBody {
            error: error.into(),
            message: message.into(),
        };

        // 文字列2つの構造体はシリアライズに失敗しない
        Self::new(status).with_body(to_json_body(&body).unwrap_or_default())
    }

    /// 400 Bad Requestエラーを作成
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(StatusCode::BAD_REQUEST, "bad_request", message)
    }

    /// 404 Not Foundエラーを作成
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(StatusCode::NOT_FOUND, "not_found", message)
    }

    /// 405 Method Not Allowedエラーを作成
    ///
    /// `Allow`ヘッダーにパスで受け付けるメソッドを列挙する。
    pub fn method_not_allowed(message: impl Into<String>, allowed: &[Method]) -> Self {
        let allow = allowed
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Self::error(StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed", message)
            .with_header("Allow", allow)
    }

    /// 500 Internal Server Errorを作成
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }
}
