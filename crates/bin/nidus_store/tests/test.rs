use anyhow::Result;
use chrono::Utc;
use nidus_config::{app::nidus_store::StoreConfig, public::storage_engine::StorageEngine};
use nidus_store::{Message, PlayerRecord};
use nidus_task::message::{MessageType, UnReturnMessage};
use tokio::sync::oneshot;
use uuid::Uuid;

fn test_config() -> StoreConfig {
    let dir = std::env::temp_dir().join(format!("nidus_store_test_{}", Uuid::new_v4()));
    StoreConfig {
        version: 0,
        storage_engine: StorageEngine::Simple,
        data_dir: dir.to_string_lossy().to_string(),
    }
}

fn record(world: Uuid) -> PlayerRecord {
    PlayerRecord {
        world,
        pos: [100, 65, -230],
        team: Some("red".to_string()),
        first_join: Utc::now(),
        last_seen: Utc::now(),
    }
}

#[tokio::test]
async fn test_put_get_delete() -> Result<()> {
    let config = test_config();
    let api = nidus_store::run(config).await?;
    let player = Uuid::new_v4();
    let world = Uuid::new_v4();

    // 未写入前查询为空
    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(Message::Get {
        uuid: player,
        result: tx,
    })
    .post(&api)
    .await?;
    assert!(rx.await??.is_none());

    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(Message::Put {
        uuid: player,
        record: record(world),
        result: tx,
    })
    .post(&api)
    .await?;
    rx.await??;

    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(Message::Get {
        uuid: player,
        result: tx,
    })
    .post(&api)
    .await?;
    let loaded = rx.await??.expect("写入后应能读回");
    assert_eq!(loaded.world, world);
    assert_eq!(loaded.pos, [100, 65, -230]);
    assert_eq!(loaded.team.as_deref(), Some("red"));

    // 删除一次成功,再删为false
    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(Message::Delete {
        uuid: player,
        result: tx,
    })
    .post(&api)
    .await?;
    assert!(rx.await??);

    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(Message::Delete {
        uuid: player,
        result: tx,
    })
    .post(&api)
    .await?;
    assert!(!rx.await??);

    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(Message::Get {
        uuid: player,
        result: tx,
    })
    .post(&api)
    .await?;
    assert!(rx.await??.is_none());
    Ok(())
}

#[tokio::test]
async fn test_unsupported_engine_rejected() {
    let mut config = test_config();
    config.storage_engine = StorageEngine::Mysql;
    assert!(nidus_store::run(config).await.is_err());
}
