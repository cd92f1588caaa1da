use nidus_config::app::nidus_spawn::SpawnConfig;
use nidus_task::message::{MessageType, UnReturnMessage};
use nidus_world::message::GlobalCommand;
use nidus_world::terrain::CHUNK_SIZE;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::message::SpawnPoint;

/// 有界随机搜索一个安全出生点
/// 每次换列都重新随机取点;列预算耗尽返回Ok(None),绝不无限循环
pub async fn search_once(
    world_api: &UnboundedSender<UnReturnMessage<GlobalCommand>>,
    world: Uuid,
    config: &SpawnConfig,
) -> anyhow::Result<Option<SpawnPoint>> {
    for _ in 0..config.max_columns {
        let [x, z] = nidus_random::pos::column_in_range(config.range_radius);

        // 请求前台装载该列所在区块
        let (tx, rx) = oneshot::channel();
        UnReturnMessage::build(GlobalCommand::EnsureChunk {
            world,
            chunk: [x.div_euclid(CHUNK_SIZE), z.div_euclid(CHUNK_SIZE)],
            result: tx,
        })
        .post(world_api)
        .await?;
        if !rx.await? {
            // 世界不存在,继续搜也无意义
            return Ok(None);
        }

        // 由前台自上而下扫描该列
        let (tx, rx) = oneshot::channel();
        UnReturnMessage::build(GlobalCommand::FindColumnSpawn {
            world,
            column: [x, z],
            scan_top: config.scan_top,
            scan_floor: config.scan_floor,
            result: tx,
        })
        .post(world_api)
        .await?;
        if let Some(y) = rx.await? {
            return Ok(Some(SpawnPoint {
                world,
                pos: [x, y, z],
            }));
        }
        // 该列不可用,换列重试
    }
    Ok(None)
}
