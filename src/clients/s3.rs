//! S3 客户端构建

use aws_config::SdkConfig;
use aws_sdk_s3::Client;

/// 使用共享配置创建 S3 客户端。
///
/// 强制使用路径风格寻址（`https://s3.<region>.amazonaws.com/<bucket>/<key>`）。
///
/// # 参数
///
/// * `sdk_config` - 共享的 SDK 配置。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`。
pub fn build_s3_client(sdk_config: &SdkConfig) -> Client {
    let config = aws_sdk_s3::config::Builder::from(sdk_config)
        .force_path_style(true)
        .build();
    Client::from_conf(config)
}
