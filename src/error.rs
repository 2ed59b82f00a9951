//! 配置错误类型。

use thiserror::Error;

/// 加载 AWS 配置时可能出现的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 一个或多个必需的环境变量缺失（未设置或为空字符串）。
    ///
    /// 变量按声明顺序保存其展示名称。
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}
