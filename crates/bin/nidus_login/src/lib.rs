use std::time::Duration;

use nidus_spawn::IssuedSet;
use nidus_task::message::{MessageType, ReturnMessage, UnReturnMessage};
use nidus_world::message::GlobalCommand;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

pub mod message;
mod resolve;
pub mod task;

pub use message::{Message, ResolveOutcome};

pub async fn run(
    config: nidus_config::app::nidus_login::LoginConfig,
    spawn_config: nidus_config::app::nidus_spawn::SpawnConfig,
    main_world: Uuid,
    store_api: UnboundedSender<UnReturnMessage<nidus_store::Message>>,
    pool_api: UnboundedSender<ReturnMessage<nidus_spawn::Message>>,
    world_api: UnboundedSender<UnReturnMessage<GlobalCommand>>,
    issued: IssuedSet,
) -> anyhow::Result<UnboundedSender<UnReturnMessage<Message>>> {
    let sweep_interval = Duration::from_secs(config.sweep_interval_secs.max(1));
    let resolver = task::Resolver::new(resolve::ResolveCtx {
        config,
        spawn_config,
        main_world,
        store_api,
        pool_api,
        world_api,
        issued,
    });
    let (task, task_send) = nidus_task::task::TaskEasy::new(resolver);
    task.run().await?;

    // 定时清扫超时未领取的结果
    let sweep_api = task_send.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        ticker.tick().await; // 首个tick立即完成,跳过
        loop {
            ticker.tick().await;
            if UnReturnMessage::build(Message::Sweep)
                .post(&sweep_api)
                .await
                .is_err()
            {
                return;
            }
        }
    });

    log::info!("[服务] 登录解析 已启用");
    Ok(task_send)
}
