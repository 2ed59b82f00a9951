use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env 文件，已存在的环境变量优先
    dotenvy::dotenv().ok();

    // 日志需要先于初始化启动，级别在确定开发模式后再调整
    let (level_filter, level_handle) = reload::Layer::new(LevelFilter::INFO);
    tracing_subscriber::registry()
        .with(level_filter)
        .with(tracing_subscriber::fmt::layer().with_timer(LocalTime::rfc_3339()))
        .init();

    let context = match aws_clients::init() {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "failed to initialize aws clients");
            return Err(e.into());
        }
    };

    // 开发模式下输出调试日志
    if context.is_development() {
        level_handle.modify(|filter| *filter = LevelFilter::DEBUG)?;
    }

    info!(
        region = context.region(),
        bucket = context.bucket_name(),
        development = context.is_development(),
        "configuration loaded"
    );

    Ok(())
}
