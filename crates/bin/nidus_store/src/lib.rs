use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use nidus_config::{app::nidus_store::StoreConfig, public::storage_engine::StorageEngine};
use nidus_task::{
    event::TaskEasyEvent,
    message::{MessageSender, UnReturnMessage},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{mpsc::UnboundedSender, oneshot};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("存档IO错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("存档序列化失败: {0}")]
    Serde(#[from] serde_json::Error),
}

/// 玩家落点存档
/// 删除存档即释放其中记录的队伍归属
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub world: Uuid,
    pub pos: [i64; 3],
    #[serde(default)]
    pub team: Option<String>,
    pub first_join: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

#[derive(Debug)]
pub enum Message {
    Get {
        uuid: Uuid,
        result: oneshot::Sender<Result<Option<PlayerRecord>, StoreError>>,
    },
    Put {
        uuid: Uuid,
        record: PlayerRecord,
        result: oneshot::Sender<Result<(), StoreError>>,
    },
    // 回送是否确实存在过
    Delete {
        uuid: Uuid,
        result: oneshot::Sender<Result<bool, StoreError>>,
    },
    Close,
}

#[derive(Debug)]
pub struct Task {
    data_dir: PathBuf,
    cache: DashMap<Uuid, PlayerRecord>,
}

impl Task {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            data_dir: PathBuf::from(&config.data_dir),
            cache: DashMap::new(),
        }
    }

    fn record_path(&self, uuid: &Uuid) -> PathBuf {
        self.data_dir.join(format!("{}.json", uuid))
    }

    fn get(&self, uuid: &Uuid) -> Result<Option<PlayerRecord>, StoreError> {
        if let Some(record) = self.cache.get(uuid) {
            return Ok(Some(record.clone()));
        }
        let path = self.record_path(uuid);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let record: PlayerRecord = serde_json::from_str(&content)?;
        self.cache.insert(*uuid, record.clone());
        Ok(Some(record))
    }

    fn put(&self, uuid: Uuid, record: PlayerRecord) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&record)?;
        std::fs::write(self.record_path(&uuid), content)?;
        self.cache.insert(uuid, record);
        Ok(())
    }

    fn delete(&self, uuid: &Uuid) -> Result<bool, StoreError> {
        let cached = self.cache.remove(uuid).is_some();
        let path = self.record_path(uuid);
        if path.exists() {
            std::fs::remove_file(&path)?;
            return Ok(true);
        }
        Ok(cached)
    }
}

#[async_trait]
impl TaskEasyEvent<UnReturnMessage<Message>> for Task {
    async fn event(
        &mut self,
        _api: &MessageSender<UnReturnMessage<Message>>,
        data: UnReturnMessage<Message>,
    ) -> anyhow::Result<bool> {
        match data.data {
            Message::Get { uuid, result } => {
                let _ = result.send(self.get(&uuid));
            }
            Message::Put {
                uuid,
                record,
                result,
            } => {
                let _ = result.send(self.put(uuid, record));
            }
            Message::Delete { uuid, result } => {
                let _ = result.send(self.delete(&uuid));
            }
            Message::Close => {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

// 检查目录是否可写
fn check_directory_writable(path: &Path) -> anyhow::Result<()> {
    let test_file = path.join(".write_test");
    match std::fs::write(&test_file, b"test") {
        Ok(_) => {
            std::fs::remove_file(&test_file)?;
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("目录 {} 不可写: {}", path.display(), e)),
    }
}

pub async fn run(config: StoreConfig) -> anyhow::Result<UnboundedSender<UnReturnMessage<Message>>> {
    if config.storage_engine != StorageEngine::Simple {
        return Err(anyhow::anyhow!(
            "暂未支持此存储引擎: {}",
            config.storage_engine
        ));
    }
    let data_dir = Path::new(&config.data_dir);
    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("无法创建存档目录: {}", data_dir.display()))?;
    }
    check_directory_writable(data_dir)?;

    let task_data = Task::new(&config);
    let (task, task_send) = nidus_task::task::TaskEasy::new(task_data);
    task.run().await?;
    log::info!("[服务] 玩家存档 已启用");
    Ok(task_send)
}
