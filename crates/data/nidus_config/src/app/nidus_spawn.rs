use serde::{Deserialize, Serialize};

use crate::tool::AppConfigTrait;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpawnConfig {
    pub version: i32,
    // 池目标库存
    pub target_size: usize,
    // 随机取点半径(方块),以世界原点为中心
    pub range_radius: i64,
    // 单次搜索允许换列的次数,耗尽即返回未找到
    pub max_columns: u32,
    // 竖直扫描范围:从scan_top向下逐格检查到scan_floor
    pub scan_top: i64,
    pub scan_floor: i64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            version: 0,
            target_size: 16,
            range_radius: 10_000,
            max_columns: 64,
            scan_top: 319,
            scan_floor: -64,
        }
    }
}

impl AppConfigTrait for SpawnConfig {
    const PATH: &'static str = "./config/nidus_spawn/";
    const NAME: &'static str = "config";
}
