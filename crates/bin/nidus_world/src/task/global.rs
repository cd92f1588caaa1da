use async_trait::async_trait;
use dashmap::DashMap;
use nidus_task::{
    event::TaskManageEvent,
    message::{MessageSender, MessageType, UnReturnMessage},
};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::{
    event::{global::GlobalManage, world::WorldTask},
    message::{GlobalCommand, WorldCommand},
};

#[async_trait]
impl TaskManageEvent<Uuid, UnReturnMessage<GlobalCommand>, UnReturnMessage<WorldCommand>>
    for GlobalManage
{
    async fn event(
        &mut self,
        api: &MessageSender<UnReturnMessage<GlobalCommand>>,
        task_map: &DashMap<Uuid, MessageSender<UnReturnMessage<WorldCommand>>>,
        data: UnReturnMessage<GlobalCommand>,
    ) -> anyhow::Result<bool> {
        match data.data {
            GlobalCommand::Init => {
                // 按配置拉起各世界任务
                for (uuid, info) in self.config.world.clone() {
                    let (world_task, world_sender) =
                        nidus_task::task::Task::new(api.clone(), WorldTask::new(info.clone(), uuid));
                    world_task.run().await?;
                    world_sender.send(UnReturnMessage::build(WorldCommand::Init))?;
                    task_map.insert(uuid, world_sender);
                    log::info!("[世界] {} 已装载 ({})", info.name, uuid);
                }
            }
            GlobalCommand::WorldExists { world, result } => {
                let _ = result.send(task_map.contains_key(&world));
            }
            GlobalCommand::GetWorlds { result } => {
                let worlds = task_map.iter().map(|entry| *entry.key()).collect();
                let _ = result.send(worlds);
            }
            GlobalCommand::EnsureChunk {
                world,
                chunk,
                result,
            } => {
                if let Some(world_sender) = task_map.get(&world) {
                    let _ = world_sender
                        .send(UnReturnMessage::build(WorldCommand::EnsureChunk { chunk, result }));
                } else {
                    // 世界未装载
                    let _ = result.send(false);
                }
            }
            GlobalCommand::BlockAt { world, pos, result } => {
                if let Some(world_sender) = task_map.get(&world) {
                    let _ = world_sender
                        .send(UnReturnMessage::build(WorldCommand::BlockAt { pos, result }));
                } else {
                    let _ = result.send(None);
                }
            }
            GlobalCommand::CheckSpawn { world, pos, result } => {
                if let Some(world_sender) = task_map.get(&world) {
                    let _ = world_sender
                        .send(UnReturnMessage::build(WorldCommand::CheckSpawn { pos, result }));
                } else {
                    let _ = result.send(false);
                }
            }
            GlobalCommand::FindColumnSpawn {
                world,
                column,
                scan_top,
                scan_floor,
                result,
            } => {
                if let Some(world_sender) = task_map.get(&world) {
                    let _ = world_sender.send(UnReturnMessage::build(WorldCommand::FindColumnSpawn {
                        column,
                        scan_top,
                        scan_floor,
                        result,
                    }));
                } else {
                    let _ = result.send(None);
                }
            }
            GlobalCommand::WorldCloseEvent { world } => {
                // 从任务映射中移除已关闭的世界
                task_map.remove(&world);
            }
            GlobalCommand::Close { result } => {
                for entry in task_map.iter() {
                    let (tx, _rx) = oneshot::channel();
                    let _ = entry
                        .value()
                        .send(UnReturnMessage::build(WorldCommand::Close { result: tx }));
                }
                task_map.clear();
                let _ = result.send(());
                return Ok(true);
            }
        }
        Ok(false)
    }
}
