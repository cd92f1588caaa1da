use serde::{Deserialize, Serialize};

use crate::tool::AppConfigTrait;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginConfig {
    pub version: i32,
    // 已完成但未被领取的结果保留多久(秒),超时清扫
    pub completed_ttl_secs: u64,
    pub sweep_interval_secs: u64,
    // 池为空时是否允许绕过池直接搜索
    pub direct_search_fallback: bool,
    // 世界引用失效时是否同时重置玩家的临时档案
    pub reset_profile_on_stale: bool,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            version: 0,
            completed_ttl_secs: 300,
            sweep_interval_secs: 60,
            direct_search_fallback: false,
            reset_profile_on_stale: true,
        }
    }
}

impl AppConfigTrait for LoginConfig {
    const PATH: &'static str = "./config/nidus_login/";
    const NAME: &'static str = "config";
}
