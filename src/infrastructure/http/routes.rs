//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /ping                GET     存活检查
//! - /phrases             GET     列出所有词汇短语
//! - /phrases             POST    创建词汇短语（文本重复时返回已有记录）
//! - /phrases/:phrase_id  DELETE  删除词汇短语
//! - /texts               POST    触发生成工作流，返回持久化的记录
//! - /texts               GET     列出生成文本（最新的在前）
//! - /texts/:text_id      GET     获取生成文本详情
//! - /audio/:file_id      GET     按标识符回放存储的音频

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(phrase_routes())
        .merge(text_routes())
        .merge(audio_routes())
}

/// Phrase 路由
fn phrase_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/phrases",
            get(handlers::list_phrases).post(handlers::create_phrase),
        )
        .route("/phrases/:phrase_id", delete(handlers::delete_phrase))
}

/// Text 路由
fn text_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/texts",
            get(handlers::list_texts).post(handlers::create_text),
        )
        .route("/texts/:text_id", get(handlers::get_text))
}

/// Audio 路由
fn audio_routes() -> Router<Arc<AppState>> {
    Router::new().route("/audio/:file_id", get(handlers::get_audio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    use crate::infrastructure::adapters::{
        FakeLlmClient, FakeLlmClientConfig, FakeTtsClient, FakeTtsClientConfig, FileMediaStore,
    };
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqlitePhraseRepository, SqliteTextRepository,
    };

    const TEST_REPLY: &str = "\
[SPANISH TEXT]
Tomamos mate y comimos asado.
[ENGLISH TRANSLATION]
We drank mate and ate asado.
[VOCABULARY USAGE]
- mate, asado
";

    /// 组装带 fake 外部服务和内存数据库的完整 Router
    async fn test_app(media_dir: &TempDir) -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let state = AppState::new(
            Arc::new(SqlitePhraseRepository::new(pool.clone())),
            Arc::new(SqliteTextRepository::new(pool)),
            Arc::new(FileMediaStore::new(media_dir.path()).await.unwrap()),
            Arc::new(FakeLlmClient::new(FakeLlmClientConfig {
                raw_reply: TEST_REPLY.to_string(),
            })),
            Arc::new(FakeTtsClient::new(FakeTtsClientConfig {
                audio_data: vec![7u8; 500],
            })),
        );

        create_routes().with_state(Arc::new(state))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let media_dir = TempDir::new().unwrap();
        let app = test_app(&media_dir).await;

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_phrase_create_list_delete() {
        let media_dir = TempDir::new().unwrap();
        let app = test_app(&media_dir).await;

        // 创建
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/phrases",
                serde_json::json!({"text": "mate"}),
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["errno"], 0);
        let phrase_id = body["data"]["id"].as_i64().unwrap();

        // 重复创建返回已有记录
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/phrases",
                serde_json::json!({"text": "mate"}),
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["data"]["id"].as_i64().unwrap(), phrase_id);

        // 列表
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/phrases")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        // 删除
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/phrases/{}", phrase_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["errno"], 0);

        // 删除不存在的短语返回 404
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/phrases/{}", phrase_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["errno"], 404);
    }

    #[tokio::test]
    async fn test_generate_text_and_fetch_audio() {
        let media_dir = TempDir::new().unwrap();
        let app = test_app(&media_dir).await;

        // 触发生成工作流
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/texts",
                serde_json::json!({"vocabulary": ["mate", "asado"]}),
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["passage"], "Tomamos mate y comimos asado.");
        assert_eq!(body["data"]["translation"], "We drank mate and ate asado.");
        let file_id = body["data"]["audio_file_id"].as_str().unwrap().to_string();
        let text_id = body["data"]["id"].as_i64().unwrap();

        // 详情
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/texts/{}", text_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["data"]["id"].as_i64().unwrap(), text_id);

        // 音频回放：内容与合成结果逐字节一致
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/audio/{}", file_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "audio/mpeg"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes.to_vec(), vec![7u8; 500]);
    }

    #[tokio::test]
    async fn test_generate_text_with_empty_vocabulary_is_rejected() {
        let media_dir = TempDir::new().unwrap();
        let app = test_app(&media_dir).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/texts",
                serde_json::json!({"vocabulary": []}),
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["errno"], 400);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let media_dir = TempDir::new().unwrap();
        let app = test_app(&media_dir).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/texts/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["errno"], 404);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/audio/missing.mp3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["errno"], 404);
    }
}
