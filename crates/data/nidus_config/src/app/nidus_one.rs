use serde::{Deserialize, Serialize};

use crate::{
    app::{
        nidus_login::LoginConfig, nidus_spawn::SpawnConfig, nidus_store::StoreConfig,
        nidus_world::WorldConfig,
    },
    tool::AppConfigTrait,
};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct One {
    pub version: i32,
    pub world: WorldConfig,
    pub spawn: SpawnConfig,
    pub login: LoginConfig,
    pub store: StoreConfig,
}

impl AppConfigTrait for One {
    const PATH: &'static str = "./config/";

    const NAME: &'static str = "nidus";
}
