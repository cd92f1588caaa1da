use chrono::Utc;
use nidus_config::app::nidus_login::LoginConfig;
use nidus_config::app::nidus_spawn::SpawnConfig;
use nidus_spawn::{IssuedSet, SpawnPoint};
use nidus_store::PlayerRecord;
use nidus_task::message::{MessageType, ReturnMessage, UnReturnMessage};
use nidus_world::message::GlobalCommand;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;
use uuid::Uuid;

pub(crate) struct ResolveCtx {
    pub config: LoginConfig,
    pub spawn_config: SpawnConfig,
    pub main_world: Uuid,
    pub store_api: UnboundedSender<UnReturnMessage<nidus_store::Message>>,
    pub pool_api: UnboundedSender<ReturnMessage<nidus_spawn::Message>>,
    pub world_api: UnboundedSender<UnReturnMessage<GlobalCommand>>,
    pub issued: IssuedSet,
}

/// 解析一个玩家的落点
/// 所有内部故障都折叠成Failed,绝不向外抛错
pub(crate) async fn resolve(uuid: Uuid, ctx: &ResolveCtx) -> super::ResolveOutcome {
    match resolve_inner(uuid, ctx).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("[登录] {} 解析异常: {}", uuid, e);
            super::ResolveOutcome::Failed {
                reason: "登录解析出现内部错误,请稍后重连".to_string(),
            }
        }
    }
}

async fn resolve_inner(uuid: Uuid, ctx: &ResolveCtx) -> anyhow::Result<super::ResolveOutcome> {
    // 读取存档;存储故障只记录,按无存档继续
    let record = match store_get(&ctx.store_api, uuid).await {
        Ok(r) => r,
        Err(e) => {
            log::warn!("[登录] {} 存档读取失败,按新玩家处理: {}", uuid, e);
            None
        }
    };

    if let Some(record) = record {
        if world_exists(&ctx.world_api, record.world).await? {
            // 老玩家:落点仍然有效,顺手刷新最近上线时间
            let mut refreshed = record.clone();
            refreshed.last_seen = Utc::now();
            if let Err(e) = store_put(&ctx.store_api, uuid, refreshed).await {
                log::warn!("[登录] {} 上线时间刷新失败: {}", uuid, e);
            }
            return Ok(super::ResolveOutcome::Returning {
                world: record.world,
                pos: record.pos,
            });
        }

        // 世界引用已失效:清档后按新玩家重新分配
        log::info!(
            "[登录] {} 的存档指向已移除的世界 {},清档重新分配",
            uuid,
            record.world
        );
        if let Some(team) = &record.team {
            log::info!("[登录] {} 随清档退出队伍 {}", uuid, team);
        }
        if let Err(e) = store_delete(&ctx.store_api, uuid).await {
            log::warn!("[登录] {} 旧存档删除失败: {}", uuid, e);
        }
        if ctx.config.reset_profile_on_stale {
            // 背包、经验等临时档案归会话层持有,这里只声明重置
            log::info!("[登录] {} 按策略重置临时档案", uuid);
        }
    }

    // 新玩家路径:池未就绪时直接拒绝接入
    let (_, ready) = pool_status(&ctx.pool_api).await?;
    if !ready {
        return Ok(super::ResolveOutcome::Failed {
            reason: "出生点尚未准备就绪,请稍后重连".to_string(),
        });
    }

    let point = match pool_withdraw(&ctx.pool_api).await? {
        Some(p) => p,
        None => match fallback_search(ctx).await? {
            Some(p) => p,
            None => {
                return Ok(super::ResolveOutcome::Failed {
                    reason: "出生点库存耗尽,请稍后重连".to_string(),
                });
            }
        },
    };

    let now = Utc::now();
    let new_record = PlayerRecord {
        world: point.world,
        pos: point.pos,
        team: None,
        first_join: now,
        last_seen: now,
    };
    if let Err(e) = store_put(&ctx.store_api, uuid, new_record).await {
        // 落点已登记不会复用,本次登录照常放行,下次重连会重新分配
        log::warn!("[登录] {} 新存档写入失败: {}", uuid, e);
    }
    Ok(super::ResolveOutcome::FirstTime {
        world: point.world,
        pos: point.pos,
    })
}

// 池被取空时的直搜回退,默认关闭
// 搜到的坐标同样要登记,保证终身唯一
async fn fallback_search(ctx: &ResolveCtx) -> anyhow::Result<Option<SpawnPoint>> {
    if !ctx.config.direct_search_fallback {
        return Ok(None);
    }
    for _ in 0..3 {
        match nidus_spawn::search::search_once(&ctx.world_api, ctx.main_world, &ctx.spawn_config)
            .await?
        {
            Some(point) => {
                if ctx.issued.claim(&point) {
                    return Ok(Some(point));
                }
                // 撞上已发放的坐标,换列重搜
            }
            None => return Ok(None),
        }
    }
    Ok(None)
}

async fn store_get(
    api: &UnboundedSender<UnReturnMessage<nidus_store::Message>>,
    uuid: Uuid,
) -> anyhow::Result<Option<PlayerRecord>> {
    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(nidus_store::Message::Get { uuid, result: tx })
        .post(api)
        .await?;
    Ok(rx.await??)
}

async fn store_put(
    api: &UnboundedSender<UnReturnMessage<nidus_store::Message>>,
    uuid: Uuid,
    record: PlayerRecord,
) -> anyhow::Result<()> {
    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(nidus_store::Message::Put {
        uuid,
        record,
        result: tx,
    })
    .post(api)
    .await?;
    Ok(rx.await??)
}

async fn store_delete(
    api: &UnboundedSender<UnReturnMessage<nidus_store::Message>>,
    uuid: Uuid,
) -> anyhow::Result<bool> {
    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(nidus_store::Message::Delete { uuid, result: tx })
        .post(api)
        .await?;
    Ok(rx.await??)
}

async fn world_exists(
    api: &UnboundedSender<UnReturnMessage<GlobalCommand>>,
    world: Uuid,
) -> anyhow::Result<bool> {
    let (tx, rx) = oneshot::channel();
    UnReturnMessage::build(GlobalCommand::WorldExists { world, result: tx })
        .post(api)
        .await?;
    Ok(rx.await?)
}

async fn pool_status(
    api: &UnboundedSender<ReturnMessage<nidus_spawn::Message>>,
) -> anyhow::Result<(usize, bool)> {
    if let nidus_spawn::Message::Status { remaining, ready } =
        ReturnMessage::build(nidus_spawn::Message::Status {
            remaining: 0,
            ready: false,
        })
        .get(api)
        .await?
    {
        Ok((remaining, ready))
    } else {
        anyhow::bail!("出生点池回信变体不匹配")
    }
}

async fn pool_withdraw(
    api: &UnboundedSender<ReturnMessage<nidus_spawn::Message>>,
) -> anyhow::Result<Option<SpawnPoint>> {
    if let nidus_spawn::Message::Withdraw(point) =
        ReturnMessage::build(nidus_spawn::Message::Withdraw(None))
            .get(api)
            .await?
    {
        Ok(point)
    } else {
        anyhow::bail!("出生点池回信变体不匹配")
    }
}
