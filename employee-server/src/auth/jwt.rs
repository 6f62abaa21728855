//! JWT 令牌服务
//!
//! 令牌由外部身份提供方签发 (HS256, 共享密钥)，本服务只负责验证。
//! `generate_token` 用于本地开发和测试。

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 默认签发者
pub const DEFAULT_ISSUER: &str = "identity-provider";
/// 默认受众
pub const DEFAULT_AUDIENCE: &str = "employee-service";
/// 生产环境密钥最小长度
pub const MIN_SECRET_LEN: usize = 32;

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// 共享密钥 (生产环境至少 32 字节)
    pub secret: String,
    /// 本地签发令牌的过期时间 (分钟)
    pub expiration_minutes: i64,
    /// 令牌签发者
    pub issuer: String,
    /// 令牌受众
    pub audience: String,
    /// 密钥是否为启动时临时生成 (未设置 JWT_SECRET)
    #[serde(skip)]
    pub ephemeral: bool,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_minutes: 60,
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            ephemeral: false,
        }
    }
}

impl JwtConfig {
    /// 从环境变量加载
    ///
    /// | 环境变量 | 默认值 |
    /// |----------|--------|
    /// | JWT_SECRET | 临时生成 (仅开发环境可用) |
    /// | JWT_EXPIRATION_MINUTES | 60 |
    /// | JWT_ISSUER | identity-provider |
    /// | JWT_AUDIENCE | employee-service |
    pub fn from_env() -> Self {
        let (secret, ephemeral) = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => (secret, false),
            _ => (generate_secure_printable_jwt_secret(), true),
        };

        Self {
            secret,
            ephemeral,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| DEFAULT_AUDIENCE.to_string()),
        }
    }

    /// 校验配置; 生产环境必须提供足够长的 JWT_SECRET
    ///
    /// 在日志初始化之后调用，开发环境的警告才会输出。
    pub fn validate(&self, production: bool) -> Result<(), JwtError> {
        if !production {
            if self.ephemeral {
                tracing::warn!("⚠️  JWT_SECRET not set! Using a temporary key for development.");
            } else if self.secret.len() < MIN_SECRET_LEN {
                tracing::warn!("JWT secret is shorter than {} characters", MIN_SECRET_LEN);
            }
            return Ok(());
        }
        if self.ephemeral {
            return Err(JwtError::ConfigError(
                "JWT_SECRET environment variable must be set in production".to_string(),
            ));
        }
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(JwtError::ConfigError(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_SECRET_LEN
            )));
        }
        Ok(())
    }
}

/// 令牌 Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 调用方 ID (Subject)
    pub sub: String,
    /// 显示名称 (可选)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 过期时间戳
    pub exp: i64,
    /// 签发时间戳
    #[serde(default)]
    pub iat: i64,
    /// 签发者
    pub iss: String,
    /// 受众
    pub aud: String,
}

/// JWT 错误
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("无效令牌: {0}")]
    InvalidToken(String),

    #[error("令牌已过期")]
    ExpiredToken,

    #[error("无效签名")]
    InvalidSignature,

    #[error("令牌生成失败: {0}")]
    GenerationFailed(String),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

/// 生成可打印的安全 JWT 密钥 (用于开发环境)
pub fn generate_secure_printable_jwt_secret() -> String {
    const ALLOWED: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 64];
    if rng.fill(&mut bytes).is_err() {
        // 随机数生成失败时退回到固定开发密钥
        return "EmployeeServiceDevelopmentKeyDoNotUseInProduction".to_string();
    }

    bytes
        .iter()
        .map(|b| ALLOWED[(*b as usize) % ALLOWED.len()] as char)
        .collect()
}

/// JWT 令牌服务
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// 使用指定配置创建 JWT 服务
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 签发令牌 (开发和测试用)
    pub fn generate_token(&self, subject: &str, name: Option<&str>) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: subject.to_string(),
            name: name.map(str::to_string),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        self.encode_claims(&claims)
    }

    /// 编码任意 Claims
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// 验证并解码令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// 从 Authorization 头提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// 当前调用方 (从 JWT Claims 解析)
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 调用方 ID
    pub id: String,
    /// 显示名称
    pub name: Option<String>,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
        }
    }
}
