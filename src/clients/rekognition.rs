//! Rekognition 客户端构建

use aws_config::SdkConfig;
use aws_sdk_rekognition::Client;

/// 使用共享配置创建 Rekognition 客户端。
pub fn build_rekognition_client(sdk_config: &SdkConfig) -> Client {
    Client::new(sdk_config)
}
