//! AWS 客户端的配置模块。
//!
//! 该模块负责从环境变量加载和校验配置。
//!
//! # 环境变量
//!
//! * `AWS_ACCESS_KEY_ID` - AWS 访问密钥 ID（必需）
//! * `AWS_SECRET_ACCESS_KEY` - AWS 秘密访问密钥（必需）
//! * `S3_BUCKET_NAME` - S3 存储桶名称（必需）
//! * `AWS_REGION` - AWS 区域（默认：us-east-1）
//! * `APP_DEV` - 开发模式开关（默认：false）

pub mod env;
pub mod validate;

pub use env::{EnvSource, ProcessEnv};
pub use validate::{ValidatedCredentials, validate};

use crate::error::ConfigError;
use env::non_empty_var;
use tracing::debug;

/// AWS 区域的环境变量名
pub const REGION_VAR: &str = "AWS_REGION";

/// 开发模式的环境变量名
pub const DEVELOPMENT_VAR: &str = "APP_DEV";

/// 未设置区域时使用的默认区域
pub const DEFAULT_REGION: &str = "us-east-1";

/// 解析 AWS 区域，未设置或为空时返回 [`DEFAULT_REGION`]。
pub fn resolve_region(source: &impl EnvSource) -> String {
    non_empty_var(source, REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string())
}

/// 解析开发模式开关。
///
/// 只有 `1`、`true`、`yes`、`on`（不区分大小写）视为开启，其余情况均为 `false`。
pub fn resolve_development(source: &impl EnvSource) -> bool {
    source.var(DEVELOPMENT_VAR).is_some_and(|value| {
        ["1", "true", "yes", "on"]
            .iter()
            .any(|truthy| value.eq_ignore_ascii_case(truthy))
    })
}

/// 已校验的 AWS 配置，加载后不可变。
///
/// 只能通过 [`AwsConfig::from_env_source`] 或 [`AwsConfig::from_env`] 获得，
/// 因此持有 `AwsConfig` 即意味着凭据已通过校验：
///
/// ```compile_fail
/// use aws_clients::AwsConfig;
///
/// let config = AwsConfig {
///     region: "us-east-1".to_string(),
///     is_development: false,
///     credentials: todo!(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    region: String,
    is_development: bool,
    credentials: ValidatedCredentials,
}

impl AwsConfig {
    #[cfg(test)]
    pub(crate) fn new(
        region: String,
        is_development: bool,
        credentials: ValidatedCredentials,
    ) -> Self {
        Self {
            region,
            is_development,
            credentials,
        }
    }

    /// 从给定的环境来源加载配置。
    ///
    /// # Errors
    ///
    /// 必需的环境变量缺失时返回 [`ConfigError::MissingVariables`]。
    pub fn from_env_source(source: &impl EnvSource) -> Result<Self, ConfigError> {
        let region = resolve_region(source);
        let is_development = resolve_development(source);
        debug!(region = %region, is_development, "resolved aws region and mode");

        let credentials = validate(source)?;

        Ok(Self {
            region,
            is_development,
            credentials,
        })
    }

    /// 从进程环境变量加载配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_source(&ProcessEnv)
    }

    /// AWS 区域
    pub fn region(&self) -> &str {
        &self.region
    }

    /// 是否处于开发模式
    pub fn is_development(&self) -> bool {
        self.is_development
    }

    /// 已校验的凭据
    pub fn credentials(&self) -> &ValidatedCredentials {
        &self.credentials
    }

    /// 存储桶名称
    pub fn bucket_name(&self) -> &str {
        self.credentials.bucket_name()
    }
}
