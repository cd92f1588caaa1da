use nidus_config::app::nidus_world::WorldConfig;

#[derive(Debug)]
pub struct GlobalManage {
    pub config: WorldConfig,
}

impl GlobalManage {
    pub fn new(config: WorldConfig) -> Self {
        Self { config }
    }
}
