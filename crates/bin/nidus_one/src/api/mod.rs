use nidus_config::app::nidus_one::One;
use nidus_task::message::{MessageType, ReturnMessage, UnReturnMessage};
use nidus_world::message::GlobalCommand;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;

pub struct Api {
    /// 世界/网格服务
    pub world: UnboundedSender<UnReturnMessage<GlobalCommand>>,
    /// 玩家存档服务
    pub store: UnboundedSender<UnReturnMessage<nidus_store::Message>>,
    /// 出生点池服务
    pub spawn_pool: UnboundedSender<ReturnMessage<nidus_spawn::Message>>,
    /// 登录解析服务
    pub login: UnboundedSender<UnReturnMessage<nidus_login::Message>>,
}

impl Api {
    pub async fn init(config: One) -> anyhow::Result<Self> {
        let main_world = config.world.main_world;
        let world = nidus_world::run(config.world).await?;
        let store = nidus_store::run(config.store).await?;
        // 发放登记表由池与登录回退共用,只在这里创建一次
        let issued = nidus_spawn::IssuedSet::new();
        let spawn_pool = nidus_spawn::run(
            config.spawn.clone(),
            main_world,
            world.clone(),
            issued.clone(),
        )
        .await?;
        let login = nidus_login::run(
            config.login,
            config.spawn,
            main_world,
            store.clone(),
            spawn_pool.clone(),
            world.clone(),
            issued,
        )
        .await?;

        Ok(Self {
            world,
            store,
            spawn_pool,
            login,
        })
    }

    pub async fn pool_status(&self) -> anyhow::Result<(usize, bool)> {
        if let nidus_spawn::Message::Status { remaining, ready } =
            ReturnMessage::build(nidus_spawn::Message::Status {
                remaining: 0,
                ready: false,
            })
            .get(&self.spawn_pool)
            .await?
        {
            Ok((remaining, ready))
        } else {
            anyhow::bail!("出生点池回信变体不匹配")
        }
    }

    pub async fn loaded_worlds(&self) -> anyhow::Result<usize> {
        let (tx, rx) = oneshot::channel();
        UnReturnMessage::build(GlobalCommand::GetWorlds { result: tx })
            .post(&self.world)
            .await?;
        Ok(rx.await?.len())
    }

    // 关停顺序与依赖相反:先停调用方再停被调方
    pub async fn shutdown(&self) -> anyhow::Result<()> {
        let _ = UnReturnMessage::build(nidus_login::Message::Close)
            .post(&self.login)
            .await;
        let _ = ReturnMessage::build(nidus_spawn::Message::Close)
            .post(&self.spawn_pool)
            .await;
        let _ = UnReturnMessage::build(nidus_store::Message::Close)
            .post(&self.store)
            .await;
        let (tx, rx) = oneshot::channel();
        let _ = UnReturnMessage::build(GlobalCommand::Close { result: tx })
            .post(&self.world)
            .await;
        let _ = rx.await;
        Ok(())
    }
}
