use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tool::AppConfigTrait;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorldConfig {
    pub version: i32,
    // 主世界(新玩家出生点所在的世界)
    pub main_world: Uuid,
    pub world: HashMap<Uuid, WorldInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorldInfo {
    pub name: String,
    // 世界种子:地形完全由它决定
    pub seed: i64,
    pub sea_level: i64,
    // 世界竖直范围,floor_y处为基岩
    pub floor_y: i64,
    pub top_y: i64,
}

impl Default for WorldInfo {
    fn default() -> Self {
        Self {
            name: "world".to_string(),
            seed: 114514,
            sea_level: 62,
            floor_y: -64,
            top_y: 319,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        let main_world = Uuid::new_v4();
        let mut world = HashMap::new();
        world.insert(main_world, WorldInfo::default());
        Self {
            version: 0,
            main_world,
            world,
        }
    }
}

impl AppConfigTrait for WorldConfig {
    const PATH: &'static str = "./config/nidus_world/";
    const NAME: &'static str = "config";
}
