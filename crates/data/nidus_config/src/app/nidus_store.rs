use serde::{Deserialize, Serialize};

use crate::public::storage_engine::StorageEngine;
use crate::tool::AppConfigTrait;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    pub version: i32,
    pub storage_engine: StorageEngine,
    // Simple引擎的数据目录
    pub data_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: 0,
            storage_engine: StorageEngine::default(),
            data_dir: "./data/players".to_string(),
        }
    }
}

impl AppConfigTrait for StoreConfig {
    const PATH: &'static str = "./config/nidus_store/";
    const NAME: &'static str = "config";
}
