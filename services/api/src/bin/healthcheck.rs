/// ヘルスチェックAPI Lambdaエントリポイント
///
/// API Gateway REST API (プロキシ統合) 経由のリクエストを受け取り、
/// ディスパッチャーで処理したレスポンスエンベロープを返却する。
use api::application::Dispatcher;
use api::domain::ApiResponse;
use api::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let dispatcher = Dispatcher::default();
    info!(routes = ?dispatcher.router(), "ヘルスチェックLambda関数を初期化");

    // ディスパッチャーはwarm start間で再利用する（可変状態は持たない）
    let dispatcher = &dispatcher;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(dispatcher, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// すべての結果（不正入力、未登録ルート、ハンドラー障害を含む）は
/// レスポンスエンベロープとして返却し、Lambdaのエラーにはしない。
async fn handler(dispatcher: &Dispatcher, event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    let (payload, context) = event.into_parts();

    Ok(dispatcher.dispatch(payload, &context))
}
