use std::sync::Arc;

use dashmap::DashSet;
use nidus_task::message::{MessageType, ReturnMessage, UnReturnMessage};
use nidus_world::message::GlobalCommand;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

pub mod message;
pub mod search;
pub mod task;

pub use message::{Message, SpawnPoint};

/// 已发放坐标登记表
/// 池补给与直搜回退共用同一张表,保证坐标终身只发放一次
#[derive(Debug, Clone, Default)]
pub struct IssuedSet(Arc<DashSet<SpawnPoint>>);

impl IssuedSet {
    pub fn new() -> Self {
        Self(Arc::new(DashSet::new()))
    }

    // 首次登记返回true,重复登记返回false
    pub fn claim(&self, point: &SpawnPoint) -> bool {
        self.0.insert(point.clone())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub async fn run(
    config: nidus_config::app::nidus_spawn::SpawnConfig,
    world: Uuid,
    world_api: UnboundedSender<UnReturnMessage<GlobalCommand>>,
    issued: IssuedSet,
) -> anyhow::Result<UnboundedSender<ReturnMessage<Message>>> {
    let pool = task::Pool::new(config, world, world_api, issued);
    let (task, task_send) = nidus_task::task::TaskEasy::new(pool);
    task.run().await?;
    // 启动即预热库存
    let _ = ReturnMessage::build(Message::Replenish).post(&task_send).await?;
    log::info!("[服务] 出生点池 已启用");
    Ok(task_send)
}
