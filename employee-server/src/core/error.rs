use thiserror::Error;

use crate::db::repository::RepoError;

/// 启动与运行期错误 (非请求级别)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("存储初始化失败: {0}")]
    Storage(#[from] RepoError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器级 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
