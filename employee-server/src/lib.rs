//! Employee Server - 员工管理 REST 服务
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): 员工 CRUD 与健康检查
//! - **存储** (`db`): `EmployeeStore` 接口，内存与 redb 两种后端
//! - **核心** (`core`): 配置、状态、错误
//! - **服务器** (`server`): axum-server 启动、优雅关闭、请求日志中间件
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── db/            # 存储接口与后端
//! ├── api/           # HTTP 处理器
//! ├── routes/        # 路由与中间件装配
//! ├── server/        # 服务器与中间件
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod server;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, ServerError, ServerState};
pub use db::{EmployeeStore, MemoryEmployeeStore, RedbEmployeeStore, RepoError};
pub use routes::{build_app, build_router};
pub use server::Server;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___ ___  ____  / /___  __  _____  ___
  / __/ / __ `__ \/ __ \/ / __ \/ / / / _ \/ _ \
 / /___/ / / / / / /_/ / / /_/ / /_/ /  __/  __/
/_____/_/ /_/ /_/ .___/_/\____/\__, /\___/\___/
               /_/            /____/
    "#
    );
}
