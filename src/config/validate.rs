//! 必需环境变量的校验。

use super::env::{EnvSource, non_empty_var};
use crate::error::ConfigError;
use crate::utils::redact::mask_secret;
use std::fmt;

/// AWS 访问密钥 ID 的环境变量名
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";

/// AWS 秘密访问密钥的环境变量名
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// S3 存储桶名称的环境变量名
pub const BUCKET_NAME_VAR: &str = "S3_BUCKET_NAME";

/// 一个必需变量：展示名称与读取到的原始值。
struct RequiredVariable {
    display_name: &'static str,
    value: Option<String>,
}

impl RequiredVariable {
    fn read(source: &impl EnvSource, display_name: &'static str, key: &str) -> Self {
        Self {
            display_name,
            value: non_empty_var(source, key),
        }
    }
}

/// 校验通过的凭据与存储桶名称，三个字段均保证非空。
///
/// 只能通过 [`validate`] 获得，crate 外部无法直接构造：
///
/// ```compile_fail
/// use aws_clients::config::ValidatedCredentials;
///
/// let credentials = ValidatedCredentials {
///     access_key_id: String::new(),
///     secret_access_key: String::new(),
///     bucket_name: String::new(),
/// };
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedCredentials {
    access_key_id: String,
    secret_access_key: String,
    bucket_name: String,
}

impl ValidatedCredentials {
    #[cfg(test)]
    pub(crate) fn new(access_key_id: &str, secret_access_key: &str, bucket_name: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            bucket_name: bucket_name.to_string(),
        }
    }

    /// 访问密钥 ID
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// 秘密访问密钥
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// 存储桶名称
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

impl fmt::Debug for ValidatedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCredentials")
            .field("access_key_id", &mask_secret(&self.access_key_id))
            .field("secret_access_key", &"<redacted>")
            .field("bucket_name", &self.bucket_name)
            .finish()
    }
}

/// 校验三个必需的环境变量。
///
/// 未设置或为空字符串的变量视为缺失。值不做任何修剪或大小写转换。
///
/// # 返回值
///
/// 三个原始值组成的 [`ValidatedCredentials`]。
///
/// # Errors
///
/// 有变量缺失时返回 [`ConfigError::MissingVariables`]，按访问密钥 ID、
/// 秘密访问密钥、存储桶名称的顺序列出所有缺失变量的展示名称。
pub fn validate(source: &impl EnvSource) -> Result<ValidatedCredentials, ConfigError> {
    let [access_key_id, secret_access_key, bucket_name] = [
        RequiredVariable::read(source, "AWS Access Key ID", ACCESS_KEY_ID_VAR),
        RequiredVariable::read(source, "AWS Secret Access Key", SECRET_ACCESS_KEY_VAR),
        RequiredVariable::read(source, "S3 Bucket Name", BUCKET_NAME_VAR),
    ];

    match (access_key_id.value, secret_access_key.value, bucket_name.value) {
        (Some(access_key_id), Some(secret_access_key), Some(bucket_name)) => {
            Ok(ValidatedCredentials {
                access_key_id,
                secret_access_key,
                bucket_name,
            })
        }
        (a, s, b) => {
            let missing = [
                (access_key_id.display_name, a.is_none()),
                (secret_access_key.display_name, s.is_none()),
                (bucket_name.display_name, b.is_none()),
            ]
            .into_iter()
            .filter(|(_, is_missing)| *is_missing)
            .map(|(name, _)| name)
            .collect();

            Err(ConfigError::MissingVariables(missing))
        }
    }
}
