//! AWS 客户端初始化库
//!
//! 从环境变量读取并校验 AWS 配置，构建预配置好的客户端：
//! - S3 对象存储客户端（强制路径风格寻址）
//! - Rekognition 图像识别客户端
//! - 两者均为最多 3 次尝试的自适应重试
//!
//! 必需的环境变量缺失时初始化失败，不会构建任何客户端。

pub mod clients;
pub mod config;
pub mod error;
pub mod utils;

pub use clients::AwsContext;
pub use config::{AwsConfig, EnvSource, ProcessEnv};
pub use error::ConfigError;

/// 从给定的环境来源完成全部初始化。
///
/// # 参数
///
/// * `source` - 环境变量来源
///
/// # Errors
///
/// 必需的环境变量缺失时返回 [`ConfigError::MissingVariables`]。
pub fn init_with(source: &impl EnvSource) -> Result<AwsContext, ConfigError> {
    let config = AwsConfig::from_env_source(source)?;
    Ok(AwsContext::from_config(config))
}

/// 从进程环境变量完成全部初始化。
///
/// 应由进程入口调用一次，并将返回的 [`AwsContext`] 传递给需要客户端的组件。
pub fn init() -> Result<AwsContext, ConfigError> {
    init_with(&ProcessEnv)
}
