use nidus_task::message::{MessageType, UnReturnMessage};
use tokio::sync::mpsc::UnboundedSender;

pub mod block;
pub mod event;
pub mod message;
pub mod safety;
pub mod task;
pub mod terrain;

pub async fn run(
    config: nidus_config::app::nidus_world::WorldConfig,
) -> anyhow::Result<UnboundedSender<UnReturnMessage<message::GlobalCommand>>> {
    let manager_actor = event::global::GlobalManage::new(config);
    let (manager_task, manager_sender) = nidus_task::task::TaskManage::new(manager_actor);

    manager_task.run().await?;
    manager_sender.send(UnReturnMessage::build(message::GlobalCommand::Init))?;
    log::info!("[服务] 世界 已启用");
    Ok(manager_sender)
}
