use thiserror::Error;

use crate::auth::JwtError;

/// 启动与运行期错误 (不面向 HTTP 客户端)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JwtError> for ServerError {
    fn from(err: JwtError) -> Self {
        ServerError::Config(err.to_string())
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
