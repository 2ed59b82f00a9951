use aws_clients::{ConfigError, init_with};
use aws_sdk_rekognition::config::endpoint::{DefaultResolver, Params, ResolveEndpoint};
use aws_sdk_s3::presigning::PresigningConfig;
use std::collections::HashMap;
use std::time::Duration;

/// 构建测试用的环境变量集合
fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// 集成测试：完整配置且未设置区域时初始化成功
///
/// 验证存储桶名称原样导出，区域回退到 us-east-1，开发模式默认关闭
#[test]
fn test_init_with_default_region() {
    let source = env(&[
        ("AWS_ACCESS_KEY_ID", "AKIA123"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
        ("S3_BUCKET_NAME", "my-bucket"),
    ]);

    let context = init_with(&source).unwrap();

    assert_eq!(context.bucket_name(), "my-bucket");
    assert_eq!(context.region(), "us-east-1");
    assert!(!context.is_development());
}

/// 集成测试：区域与开发模式覆盖
#[test]
fn test_init_with_region_override() {
    let source = env(&[
        ("AWS_ACCESS_KEY_ID", "AKIA123"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
        ("S3_BUCKET_NAME", "my-bucket"),
        ("AWS_REGION", "eu-central-1"),
        ("APP_DEV", "true"),
    ]);

    let context = init_with(&source).unwrap();

    assert_eq!(context.region(), "eu-central-1");
    assert!(context.is_development());
    assert_eq!(
        context.s3_client().config().region().map(|r| r.as_ref()),
        Some("eu-central-1")
    );
    assert_eq!(
        context
            .rekognition_client()
            .config()
            .region()
            .map(|r| r.as_ref()),
        Some("eu-central-1")
    );
}

/// 集成测试：缺少秘密访问密钥时初始化失败
#[test]
fn test_init_missing_secret_key() {
    let source = env(&[
        ("AWS_ACCESS_KEY_ID", "AKIA123"),
        ("S3_BUCKET_NAME", "my-bucket"),
    ]);

    let err = init_with(&source).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Missing required environment variables: AWS Secret Access Key"
    );
}

/// 集成测试：环境为空时列出全部缺失变量
#[test]
fn test_init_empty_environment() {
    let err = init_with(&HashMap::<String, String>::new()).unwrap_err();

    assert_eq!(
        err,
        ConfigError::MissingVariables(vec![
            "AWS Access Key ID",
            "AWS Secret Access Key",
            "S3 Bucket Name",
        ])
    );
}

/// 集成测试：客户端的重试策略
///
/// 验证两个客户端均为自适应重试，最多尝试 3 次
#[test]
fn test_clients_use_adaptive_retry() {
    use aws_config::retry::RetryMode;

    let source = env(&[
        ("AWS_ACCESS_KEY_ID", "AKIA123"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
        ("S3_BUCKET_NAME", "my-bucket"),
    ]);

    let context = init_with(&source).unwrap();

    let s3_client = context.s3_client();
    let s3_retry = s3_client.config().retry_config().unwrap();
    assert_eq!(s3_retry.mode(), RetryMode::Adaptive);
    assert_eq!(s3_retry.max_attempts(), 3);

    let rekognition_client = context.rekognition_client();
    let rekognition_retry = rekognition_client.config().retry_config().unwrap();
    assert_eq!(rekognition_retry.mode(), RetryMode::Adaptive);
    assert_eq!(rekognition_retry.max_attempts(), 3);
}

/// 集成测试：两个客户端均使用默认的 HTTPS AWS 端点
///
/// S3 预签名 URL 指向区域默认端点；Rekognition 没有端点覆盖，
/// 按区域解析到默认端点
#[tokio::test]
async fn test_clients_use_default_https_endpoint() {
    let source = env(&[
        ("AWS_ACCESS_KEY_ID", "AKIA123"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
        ("S3_BUCKET_NAME", "my-bucket"),
        ("AWS_REGION", "us-west-2"),
    ]);

    let context = init_with(&source).unwrap();
    assert_eq!(context.sdk_config().endpoint_url(), None);

    let request = context
        .s3_client()
        .get_object()
        .bucket(context.bucket_name())
        .key("photo.jpg")
        .presigned(PresigningConfig::expires_in(Duration::from_secs(60)).unwrap())
        .await
        .unwrap();
    assert!(
        request
            .uri()
            .starts_with("https://s3.us-west-2.amazonaws.com/my-bucket/photo.jpg")
    );

    let params = Params::builder()
        .region(context.region())
        .use_fips(false)
        .use_dual_stack(false)
        .build()
        .unwrap();
    let endpoint = DefaultResolver::new()
        .resolve_endpoint(&params)
        .await
        .unwrap();
    assert_eq!(endpoint.url(), "https://rekognition.us-west-2.amazonaws.com");
}
