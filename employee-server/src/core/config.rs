use crate::auth::JwtConfig;

/// Value of `DATABASE_PATH` selecting the in-memory engine
pub const IN_MEMORY_DATABASE: &str = "memory";

/// 服务配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | DATABASE_PATH | ./data/employees.db | RocksDB 目录, `memory` 为内存库 |
/// | DATABASE_NAMESPACE | assessment | SurrealDB namespace |
/// | DATABASE_NAME | assessment_db | SurrealDB database |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志文件目录 (可选) |
/// | ENVIRONMENT | development | 运行环境 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
/// | PAGE_SIZE | 5 | 默认分页大小 |
/// | MAX_PAGE_SIZE | 50 | 分页大小上限 |
///
/// JWT 相关变量见 [`JwtConfig`]。
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=memory HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库目录 (RocksDB) 或 `memory`
    pub database_path: String,
    /// SurrealDB namespace
    pub database_namespace: String,
    /// SurrealDB database
    pub database_name: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 默认分页大小
    pub page_size: u32,
    /// 分页大小上限
    pub max_page_size: u32,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_parse("HTTP_PORT", 8000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/employees.db".into()),
            database_namespace: std::env::var("DATABASE_NAMESPACE")
                .unwrap_or_else(|_| "assessment".into()),
            database_name: std::env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "assessment_db".into()),
            jwt: JwtConfig::from_env(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment,
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
            page_size: env_parse("PAGE_SIZE", 5),
            max_page_size: env_parse("MAX_PAGE_SIZE", 50),
        }
    }

    /// 测试配置: 内存数据库 + 固定 JWT 密钥
    pub fn for_tests(jwt_secret: impl Into<String>) -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 0,
            database_path: IN_MEMORY_DATABASE.into(),
            database_namespace: "test".into(),
            database_name: "test".into(),
            jwt: JwtConfig {
                secret: jwt_secret.into(),
                ..JwtConfig::default()
            },
            log_level: "debug".into(),
            log_dir: None,
            environment: "test".into(),
            shutdown_timeout_ms: 1000,
            page_size: 5,
            max_page_size: 50,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否使用内存数据库
    pub fn is_in_memory(&self) -> bool {
        self.database_path == IN_MEMORY_DATABASE
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
