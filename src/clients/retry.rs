//! 重试策略模块
//!
//! 两个客户端使用同一策略：最多尝试 3 次，自适应重试模式。
//! 退避与限流的具体行为由 AWS SDK 负责。

use aws_config::retry::RetryConfig;

/// 单个请求的最大尝试次数（包含首次请求）
pub const MAX_ATTEMPTS: u32 = 3;

/// 构建客户端共用的重试配置。
pub fn retry_config() -> RetryConfig {
    RetryConfig::adaptive().with_max_attempts(MAX_ATTEMPTS)
}
