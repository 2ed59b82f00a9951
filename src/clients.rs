//! AWS 客户端模块
//!
//! 该模块负责根据已校验的配置构建 S3 与 Rekognition 客户端，
//! 两者共享同一份区域、凭据与重试策略。

pub mod rekognition;
pub mod retry;
pub mod s3;

use crate::config::AwsConfig;
use crate::utils::redact::mask_secret;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::config::{Credentials, SharedCredentialsProvider};
use std::sync::Arc;
use tracing::info;

/// 凭据提供者名称
const CREDENTIALS_PROVIDER_NAME: &str = "environment-configuration";

/// 使用已校验的配置构建共享的 SDK 配置。
///
/// 只使用这里显式给出的区域、凭据与重试策略，不读取环境变量或共享配置文件，
/// 因此 `AWS_ENDPOINT_URL`、配置文件中的 `endpoint_url`、FIPS 与双栈设置都不会生效。
/// 客户端始终使用默认端点与默认 HTTP 客户端（rustls，始终启用 TLS）。
///
/// # 参数
///
/// * `config` - 已校验的配置。
///
/// # 返回值
///
/// 供各服务客户端共用的 `SdkConfig`。
pub fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let credentials = Credentials::new(
        config.credentials().access_key_id(),
        config.credentials().secret_access_key(),
        None,
        None,
        CREDENTIALS_PROVIDER_NAME,
    );

    SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(config.region().to_string()))
        .credentials_provider(SharedCredentialsProvider::new(credentials))
        .retry_config(retry::retry_config())
        .build()
}

/// 初始化完成后对外暴露的全部内容。
///
/// 由进程入口构建一次，之后以显式参数的形式传递给需要客户端的组件。
#[derive(Debug, Clone)]
pub struct AwsContext {
    region: String,
    is_development: bool,
    bucket_name: String,
    sdk_config: SdkConfig,
    s3_client: Arc<S3Client>,
    rekognition_client: Arc<RekognitionClient>,
}

impl AwsContext {
    /// 根据已校验的配置构建两个客户端。
    ///
    /// [`AwsConfig`] 只能通过校验得到，因此这里的凭据必然非空。
    pub fn from_config(config: AwsConfig) -> Self {
        let sdk_config = load_sdk_config(&config);
        let s3_client = Arc::new(s3::build_s3_client(&sdk_config));
        let rekognition_client = Arc::new(rekognition::build_rekognition_client(&sdk_config));

        info!(
            region = config.region(),
            bucket = config.bucket_name(),
            access_key_id = %mask_secret(config.credentials().access_key_id()),
            is_development = config.is_development(),
            "aws clients initialized"
        );

        Self {
            region: config.region().to_string(),
            is_development: config.is_development(),
            bucket_name: config.bucket_name().to_string(),
            sdk_config,
            s3_client,
            rekognition_client,
        }
    }

    /// AWS 区域
    pub fn region(&self) -> &str {
        &self.region
    }

    /// 是否处于开发模式
    pub fn is_development(&self) -> bool {
        self.is_development
    }

    /// S3 存储桶名称
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// 两个客户端共用的 SDK 配置，可用于构建其他 AWS 服务客户端
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    /// S3 客户端
    pub fn s3_client(&self) -> Arc<S3Client> {
        self.s3_client.clone()
    }

    /// Rekognition 客户端
    pub fn rekognition_client(&self) -> Arc<RekognitionClient> {
        self.rekognition_client.clone()
    }
}
