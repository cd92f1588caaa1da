use nidus_config::{app::nidus_one::One, tool::AppConfigTrait};
use tklog::{Format, ASYNC_LOG, MODE};

mod api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 日志:控制台 + 按天切分的文件
    ASYNC_LOG
        .set_console(true)
        .set_cutmode_by_time("./log/server.log", MODE::DAY, 30, true)
        .await
        .set_format(Format::LevelFlag | Format::Time | Format::ShortFileName)
        .uselog();

    log::info!("读取配置文件中");
    let config: One = One::load_or_create_default()?;
    log::info!("读取配置文件完成");

    log::info!("服务初始化");
    let api = api::Api::init(config).await?;
    log::info!("服务初始化完成,已装载{}个世界", api.loaded_worlds().await?);

    // 等待出生点池预热,未就绪前新玩家会被拒绝
    for _ in 0..120 {
        match api.pool_status().await {
            Ok((remaining, true)) => {
                log::info!("[出生点池] 预热完成,库存{}", remaining);
                break;
            }
            Ok((remaining, false)) => {
                log::info!("[出生点池] 预热中,库存{}", remaining);
            }
            Err(e) => {
                log::warn!("查询出生点池状态失败: {}", e);
                break;
            }
        }
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    }

    log::info!("{} 启动完成,Ctrl-C退出", nidus_config::NIDUS_NAME);
    tokio::signal::ctrl_c().await?;

    log::info!("收到退出信号,关闭服务中");
    api.shutdown().await?;
    log::info!("服务器已关闭");
    Ok(())
}
