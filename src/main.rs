//! tts-server - 即时合成 HTTP 服务
//!
//! `GET /tts?text=<string>&lang=<code>&slow=<bool>` → audio/mpeg

use wordtts::config::{load_config, print_config};
use wordtts::infrastructure::adapters::create_speech_engine;
use wordtts::infrastructure::http::{AppState, HttpServer, ServerConfig};
use wordtts::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("wordtts - TTS render service");
    print_config(&config);

    let tts_engine = create_speech_engine(&config.tts)?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(tts_engine, config.server.default_lang.clone());
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
