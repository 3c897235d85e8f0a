/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式での出力をサポートする。
use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::{LogFormat, LoggingConfig};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// 環境変数の設定でログサブスクライバーを初期化する
///
/// この関数は複数回呼び出しても安全で、最初の呼び出しのみ初期化を実行する。
///
/// # 使用例
/// ```ignore
/// use api::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging() {
    init_logging_with(&LoggingConfig::from_env());
}

/// 指定した設定でログサブスクライバーを初期化する
///
/// フィルタ文字列が不正な場合はデフォルトのinfoを使用する。
/// 既に別のサブスクライバーが登録されている場合は何もしない。
pub fn init_logging_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let env_filter = build_env_filter(config);

        match config.format() {
            LogFormat::Json => {
                // JSON形式のログレイヤー（Lambda/CloudWatch向け）
                // spanのrequest_idを各ログに含める
                let json_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(false);

                let _ = tracing_subscriber::registry()
                    .with(env_filter)
                    .with(json_layer)
                    .try_init();
            }
            LogFormat::Text => {
                let fmt_layer = tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .compact();

                let _ = tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init();
            }
        }
    });
}

/// 設定からEnvFilterを構築（不正なフィルタはデフォルトにフォールバック）
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(config.filter()).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
