//! 环境变量来源。
//!
//! 配置加载通过 [`EnvSource`] 读取变量，而不是直接调用 `std::env`，
//! 这样测试可以注入任意环境而无需修改进程状态。

use std::collections::HashMap;
use std::env;

#[cfg(test)]
use mockall::automock;

/// 可读取环境变量的来源。
#[cfg_attr(test, automock)]
pub trait EnvSource {
    /// 读取变量值，未设置（或不是合法 Unicode）时返回 `None`。
    fn var(&self, key: &str) -> Option<String>;
}

/// 当前进程的环境变量。
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// 读取变量，并把空字符串视为未设置。
pub fn non_empty_var(source: &impl EnvSource, key: &str) -> Option<String> {
    source.var(key).filter(|value| !value.is_empty())
}
