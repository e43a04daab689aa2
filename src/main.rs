//! Usuaya - 西班牙语学习辅助后端
//!
//! 组装链路:
//! - Persistence: SQLite（phrases / texts）
//! - Adapters: Anthropic 文本生成、ElevenLabs 语音合成、文件媒体存储
//! - HTTP: axum RESTful API

use std::sync::Arc;

use usuaya::config::{load_config, print_config};
use usuaya::infrastructure::adapters::{
    AnthropicClient, AnthropicClientConfig, ElevenLabsClient, ElevenLabsClientConfig,
    FileMediaStore,
};
use usuaya::infrastructure::http::{AppState, HttpServer, ServerConfig};
use usuaya::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqlitePhraseRepository, SqliteTextRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},usuaya={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Usuaya - 西班牙语学习辅助后端");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let phrase_repo = Arc::new(SqlitePhraseRepository::new(pool.clone()));
    let text_repo = Arc::new(SqliteTextRepository::new(pool.clone()));

    // 创建文件媒体存储（目录不存在时创建）
    let media_store = Arc::new(
        FileMediaStore::new(&config.storage.media_dir)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to init media store: {}", e))?,
    );

    // 创建 Anthropic 文本生成客户端（凭证缺失是启动硬错误）
    let llm_config = AnthropicClientConfig {
        model: config.llm.model.clone(),
        max_tokens: config.llm.max_tokens,
        temperature: config.llm.temperature,
        timeout_secs: config.llm.timeout_secs,
        ..Default::default()
    };
    let text_generator = Arc::new(
        AnthropicClient::from_env(llm_config)
            .map_err(|e| anyhow::anyhow!("Failed to init text generator: {}", e))?,
    );

    // 创建 ElevenLabs 语音合成客户端（凭证缺失时降级，启动不失败）
    let tts_config = ElevenLabsClientConfig {
        voice_id: config.tts.voice_id.clone(),
        model_id: config.tts.model_id.clone(),
        timeout_secs: config.tts.timeout_secs,
        ..Default::default()
    };
    let synthesizer = Arc::new(
        ElevenLabsClient::from_env(tts_config)
            .map_err(|e| anyhow::anyhow!("Failed to init synthesizer: {}", e))?,
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        phrase_repo,
        text_repo,
        media_store,
        text_generator,
        synthesizer,
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
