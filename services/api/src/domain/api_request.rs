/// API Gatewayリクエストエンベロープ
///
/// REST API (プロキシ統合) からLambdaに渡されるイベントを型付きで保持する。
/// 必須キーが欠けたイベントは不正入力として扱う。
use std::collections::HashMap;

use lambda_http::http::Method;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// リクエストエンベロープの解釈エラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RequestError {
    /// 必須キーの欠落、または型の不一致
    #[error("malformed request event: {0}")]
    Malformed(String),

    /// httpMethodがHTTPメソッドとして解釈できない
    #[error("invalid http method: {0:?}")]
    InvalidMethod(String),
}

/// API Gatewayから受け取るリクエストエンベロープ
///
/// キーはすべて必須。`null`を取りうるフィールドは`Option`で保持するが、
/// キー自体が存在しない場合はデシリアライズに失敗する。
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// リクエストパス
    pub path: String,
    /// HTTPメソッド（文字列のまま保持）
    pub http_method: String,
    /// 単一値ヘッダー
    #[serde(deserialize_with = "Option::deserialize")]
    pub headers: Option<HashMap<String, String>>,
    /// 複数値ヘッダー
    #[serde(deserialize_with = "Option::deserialize")]
    pub multi_value_headers: Option<HashMap<String, Vec<String>>>,
    /// クエリ文字列パラメータ
    #[serde(deserialize_with = "Option::deserialize")]
    pub query_string_parameters: Option<HashMap<String, String>>,
    /// 複数値クエリ文字列パラメータ
    #[serde(deserialize_with = "Option::deserialize")]
    pub multi_value_query_string_parameters: Option<HashMap<String, Vec<String>>>,
    /// パステンプレート変数
    #[serde(deserialize_with = "Option::deserialize")]
    pub path_parameters: Option<HashMap<String, String>>,
    /// ステージ変数
    #[serde(deserialize_with = "Option::deserialize")]
    pub stage_variables: Option<HashMap<String, String>>,
    /// 呼び出し元メタデータ（解釈せずに保持する）
    pub request_context: Value,
    /// リクエストボディ（パースしない）
    #[serde(deserialize_with = "Option::deserialize")]
    pub body: Option<String>,
}

impl ApiRequest {
    /// Lambdaイベントペイロードからリクエストを構築
    ///
    /// # 戻り値
    /// * `Ok(ApiRequest)` - 全必須キーが揃っている場合
    /// * `Err(RequestError::Malformed)` - キー欠落または型不一致
    pub fn from_event(event: Value) -> Result<Self, RequestError> {
        serde_json::from_value(event).map_err(|err| RequestError::Malformed(err.to_string()))
    }

    /// httpMethodを`Method`に変換
    ///
    /// 大文字小文字は区別する（`get`は`GET`と一致しない拡張メソッドになる）。
    pub fn method(&self) -> Result<Method, RequestError> {
        Method::from_bytes(self.http_method.as_bytes())
            .map_err(|_| RequestError::InvalidMethod(self.http_method.clone()))
    }
}
