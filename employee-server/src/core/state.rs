use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::EmployeeRepository;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是廉价克隆 (配置 + 数据库句柄 + Arc)，handler 之间无共享可变状态。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 手动构造 (测试中配合已打开的数据库使用)
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 校验 JWT 配置 (生产环境缺少密钥直接失败)
    /// 2. 打开数据库并应用 schema
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.jwt.validate(config.is_production())?;

        let db_service = DbService::new(config).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db_service.db, jwt_service))
    }

    /// 员工仓储
    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.db.clone())
    }
}
