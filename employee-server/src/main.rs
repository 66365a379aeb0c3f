use employee_server::{Config, Server, ServerState, init_logger, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env (文件不存在时忽略)
    dotenv::dotenv().ok();

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 初始化日志 (guard 必须存活到进程结束)
    let log_dir = config.log_dir();
    let log_dir = config.is_production().then_some(log_dir.as_path());
    let _log_guard = init_logger(&config.log_level, config.log_json, log_dir)?;

    print_banner();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Employee Server starting..."
    );

    // 4. 初始化服务器状态 (打开存储)
    let state = ServerState::initialize(&config)?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
