// ログ設定
//
// 環境変数からログのフィルタと出力形式を読み込む。
// - RUST_LOG: ログフィルタ（デフォルト: info）
// - LOG_FORMAT: 出力形式（`text`で人間向け形式、それ以外はJSON）

/// デフォルトのログフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON形式（CloudWatch Logs向け）
    #[default]
    Json,
    /// 1行の人間向け形式（ローカル実行向け）
    Text,
}

impl LogFormat {
    /// 文字列から出力形式を判定
    ///
    /// `text`（大文字小文字を区別しない）のみTextとし、それ以外はJSONとする。
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("text") {
            LogFormat::Text
        } else {
            LogFormat::Json
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// EnvFilter形式のフィルタ文字列
    filter: String,
    /// 出力形式
    format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILTER, LogFormat::Json)
    }
}

impl LoggingConfig {
    /// 環境変数から設定を読み込み
    ///
    /// 未設定または空文字の場合はデフォルト値を使用する。
    pub fn from_env() -> Self {
        let filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let format = std::env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Self { filter, format }
    }

    /// 明示的な値で作成（テスト用）
    pub fn new(filter: impl Into<String>, format: LogFormat) -> Self {
        Self {
            filter: filter.into(),
            format,
        }
    }

    /// フィルタ文字列を取得
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// 出力形式を取得
    pub fn format(&self) -> LogFormat {
        self.format
    }
}
