use std::sync::Arc;
use std::time::Instant;

use crate::core::{Config, Result};
use crate::db::{self, EmployeeStore};

/// 服务器状态 - 持有所有请求共享的引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一份。路由本身不持有可变状态，
/// 存储是唯一的共享可变资源。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | employees | Arc<dyn EmployeeStore> | 员工存储 |
/// | started_at | Instant | 启动时间 |
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config)?;
/// let employees = state.employees.find_all().await?;
/// ```
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工存储 (memory / redb)
    pub employees: Arc<dyn EmployeeStore>,
    /// 启动时间，用于计算 uptime
    pub started_at: Instant,
}

impl ServerState {
    /// 用已有存储构造状态
    ///
    /// 测试中可直接注入任意 [`EmployeeStore`] 实现
    pub fn new(config: Config, employees: Arc<dyn EmployeeStore>) -> Self {
        Self {
            config,
            employees,
            started_at: Instant::now(),
        }
    }

    /// 按配置打开存储并初始化状态
    ///
    /// 存储后端未知或 redb 文件无法打开时返回错误
    pub fn initialize(config: &Config) -> Result<Self> {
        let employees = db::open_store(config)?;
        tracing::info!(
            backend = employees.backend(),
            environment = %config.environment,
            "Server state initialized"
        );
        Ok(Self::new(config.clone(), employees))
    }

    /// 已运行秒数
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("backend", &self.employees.backend())
            .field("started_at", &self.started_at)
            .finish()
    }
}
