use std::collections::HashMap;

use nidus_config::app::nidus_world::WorldInfo;
use uuid::Uuid;

use crate::block::BlockId;
use crate::safety;
use crate::terrain::{self, Chunk, CHUNK_SIZE};

/// 单个世界的任务体
/// 区块数据只归本任务持有,外部一律通过消息访问
#[derive(Debug)]
pub struct WorldTask {
    pub info: WorldInfo,
    pub world_uuid: Uuid,
    chunks: HashMap<[i64; 2], Chunk>,
}

impl WorldTask {
    pub fn new(info: WorldInfo, world_uuid: Uuid) -> Self {
        Self {
            info,
            world_uuid,
            chunks: HashMap::new(),
        }
    }

    /// 按需生成区块
    pub fn ensure_chunk(&mut self, chunk_pos: [i64; 2]) -> &Chunk {
        let info = &self.info;
        self.chunks.entry(chunk_pos).or_insert_with(|| {
            log::debug!(
                "[世界:{}] 生成区块 [{}, {}]",
                info.name,
                chunk_pos[0],
                chunk_pos[1]
            );
            terrain::generate_chunk(info, chunk_pos)
        })
    }

    pub fn loaded_chunks(&self) -> usize {
        self.chunks.len()
    }

    pub fn block_at(&mut self, pos: [i64; 3]) -> BlockId {
        let chunk_pos = [pos[0].div_euclid(CHUNK_SIZE), pos[2].div_euclid(CHUNK_SIZE)];
        let local_x = pos[0].rem_euclid(CHUNK_SIZE);
        let local_z = pos[2].rem_euclid(CHUNK_SIZE);
        let info = self.info.clone();
        let chunk = self.ensure_chunk(chunk_pos);
        chunk.block_at(&info, local_x, pos[1], local_z)
    }

    /// 站立坐标是否安全:脚下一格可承重,脚位与头位无遮挡
    pub fn check_spawn(&mut self, pos: [i64; 3]) -> bool {
        let feet = self.block_at([pos[0], pos[1] - 1, pos[2]]);
        let above1 = self.block_at(pos);
        let above2 = self.block_at([pos[0], pos[1] + 1, pos[2]]);
        safety::is_safe_ground(feet, above1, above2)
    }

    /// 自上而下扫描一列,回送首个可站立的y(站立坐标)
    /// 扫描范围会被世界竖直边界收窄
    pub fn find_column_spawn(
        &mut self,
        column: [i64; 2],
        scan_top: i64,
        scan_floor: i64,
    ) -> Option<i64> {
        let top = scan_top.min(self.info.top_y);
        let floor = scan_floor.max(self.info.floor_y);
        let [x, z] = column;
        for y in (floor..=top).rev() {
            let feet = self.block_at([x, y, z]);
            let above1 = self.block_at([x, y + 1, z]);
            let above2 = self.block_at([x, y + 2, z]);
            if safety::is_safe_ground(feet, above1, above2) {
                return Some(y + 1);
            }
        }
        None
    }
}
