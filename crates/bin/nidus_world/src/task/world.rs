use async_trait::async_trait;
use nidus_task::{
    event::TaskEvent,
    message::{MessageSender, MessageType, UnReturnMessage},
};

use crate::{
    event::world::WorldTask,
    message::{GlobalCommand, WorldCommand},
};

#[async_trait]
impl TaskEvent<UnReturnMessage<WorldCommand>, UnReturnMessage<GlobalCommand>> for WorldTask {
    async fn event(
        &mut self,
        _api: &MessageSender<UnReturnMessage<WorldCommand>>,
        manage_api: &MessageSender<UnReturnMessage<GlobalCommand>>,
        data: UnReturnMessage<WorldCommand>,
    ) -> anyhow::Result<bool> {
        match data.data {
            WorldCommand::Init => {
                log::debug!("[世界:{}] 任务已启动", self.info.name);
            }
            WorldCommand::EnsureChunk { chunk, result } => {
                self.ensure_chunk(chunk);
                let _ = result.send(true);
            }
            WorldCommand::BlockAt { pos, result } => {
                let _ = result.send(Some(self.block_at(pos)));
            }
            WorldCommand::CheckSpawn { pos, result } => {
                let _ = result.send(self.check_spawn(pos));
            }
            WorldCommand::FindColumnSpawn {
                column,
                scan_top,
                scan_floor,
                result,
            } => {
                let _ = result.send(self.find_column_spawn(column, scan_top, scan_floor));
            }
            WorldCommand::Close { result } => {
                // 向上级报告后退出
                let _ = UnReturnMessage::build(GlobalCommand::WorldCloseEvent {
                    world: self.world_uuid,
                })
                .post(manage_api)
                .await;
                log::info!(
                    "[世界:{}] 已卸载,共装载过{}个区块",
                    self.info.name,
                    self.loaded_chunks()
                );
                let _ = result.send(());
                return Ok(true);
            }
        }
        Ok(false)
    }
}
