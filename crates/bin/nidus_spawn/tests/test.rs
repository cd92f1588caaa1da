use std::collections::HashMap;
use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use nidus_config::app::nidus_spawn::SpawnConfig;
use nidus_config::app::nidus_world::{WorldConfig, WorldInfo};
use nidus_spawn::{IssuedSet, Message, SpawnPoint};
use nidus_task::message::{MessageType, ReturnMessage, UnReturnMessage};
use nidus_world::message::GlobalCommand;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;
use tokio::time::sleep;
use uuid::Uuid;

fn world_config() -> (WorldConfig, Uuid) {
    let main_world = Uuid::new_v4();
    let mut world = HashMap::new();
    world.insert(
        main_world,
        WorldInfo {
            name: "pool_test".to_string(),
            seed: 777,
            sea_level: 62,
            floor_y: -64,
            top_y: 319,
        },
    );
    (
        WorldConfig {
            version: 0,
            main_world,
            world,
        },
        main_world,
    )
}

fn spawn_config(target: usize) -> SpawnConfig {
    SpawnConfig {
        version: 0,
        target_size: target,
        range_radius: 200,
        max_columns: 64,
        scan_top: 319,
        scan_floor: -64,
    }
}

async fn status(api: &UnboundedSender<ReturnMessage<Message>>) -> Result<(usize, bool)> {
    if let Message::Status { remaining, ready } = ReturnMessage::build(Message::Status {
        remaining: 0,
        ready: false,
    })
    .get(api)
    .await?
    {
        Ok((remaining, ready))
    } else {
        anyhow::bail!("回信变体不匹配")
    }
}

async fn withdraw(api: &UnboundedSender<ReturnMessage<Message>>) -> Result<Option<SpawnPoint>> {
    if let Message::Withdraw(point) = ReturnMessage::build(Message::Withdraw(None)).get(api).await?
    {
        Ok(point)
    } else {
        anyhow::bail!("回信变体不匹配")
    }
}

// 轮询直到条件满足,超时直接失败
async fn wait_for(
    api: &UnboundedSender<ReturnMessage<Message>>,
    target: usize,
    cond: impl Fn(usize, bool) -> bool,
) -> Result<()> {
    for _ in 0..400 {
        let (remaining, ready) = status(api).await?;
        // 任何时刻库存都不得超过目标值
        assert!(remaining <= target);
        if cond(remaining, ready) {
            return Ok(());
        }
        sleep(Duration::from_millis(25)).await;
    }
    anyhow::bail!("等待超时")
}

#[tokio::test]
async fn test_pool_ready_drain_refill() -> Result<()> {
    let (wc, main_world) = world_config();
    let world_api = nidus_world::run(wc).await?;
    let target = 4usize;
    let pool_api = nidus_spawn::run(
        spawn_config(target),
        main_world,
        world_api.clone(),
        IssuedSet::new(),
    )
    .await?;

    // 预热到位
    wait_for(&pool_api, target, |remaining, ready| {
        ready && remaining == target
    })
    .await?;

    // 取两个:互不相同,且都通过安全复检
    let a = withdraw(&pool_api).await?.expect("就绪的池不应为空");
    let b = withdraw(&pool_api).await?.expect("就绪的池不应为空");
    assert_ne!(a, b);
    for p in [&a, &b] {
        let (tx, rx) = oneshot::channel();
        UnReturnMessage::build(GlobalCommand::CheckSpawn {
            world: p.world,
            pos: p.pos,
            result: tx,
        })
        .post(&world_api)
        .await?;
        assert!(rx.await?, "池中取出的点必须安全: {:?}", p.pos);
    }

    // 取用后自动补给回目标值,ready保持
    wait_for(&pool_api, target, |remaining, ready| {
        ready && remaining == target
    })
    .await?;
    Ok(())
}

#[tokio::test]
async fn test_withdrawn_points_never_repeat() -> Result<()> {
    let (wc, main_world) = world_config();
    let world_api = nidus_world::run(wc).await?;
    let target = 3usize;
    let pool_api = nidus_spawn::run(
        spawn_config(target),
        main_world,
        world_api,
        IssuedSet::new(),
    )
    .await?;

    wait_for(&pool_api, target, |_, ready| ready).await?;

    // 连续取空再等补给,多轮取用的坐标全程不得重复
    let mut seen: HashSet<SpawnPoint> = HashSet::new();
    for _ in 0..3 {
        wait_for(&pool_api, target, |remaining, _| remaining == target).await?;
        for _ in 0..target {
            if let Some(p) = withdraw(&pool_api).await? {
                assert!(seen.insert(p), "同一坐标被发放了两次");
            }
        }
    }
    assert!(seen.len() >= target);
    Ok(())
}

#[tokio::test]
async fn test_unknown_world_pool_never_ready() -> Result<()> {
    let (wc, _main_world) = world_config();
    let world_api = nidus_world::run(wc).await?;
    // 池指向一个不存在的世界:搜索失败,补给暂停,池保持未就绪
    let pool_api = nidus_spawn::run(
        spawn_config(2),
        Uuid::new_v4(),
        world_api,
        IssuedSet::new(),
    )
    .await?;

    sleep(Duration::from_millis(300)).await;
    let (remaining, ready) = status(&pool_api).await?;
    assert!(!ready);
    assert_eq!(remaining, 0);
    // 空池取用立刻返回None,不阻塞等补给
    assert!(withdraw(&pool_api).await?.is_none());
    Ok(())
}
