use tokio::sync::oneshot;
use uuid::Uuid;

/// 一次登录解析的终局结果
/// 引擎只会交付三者之一,绝不向调用方抛错
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    // 老玩家:沿用存档落点
    Returning { world: Uuid, pos: [i64; 3] },
    // 新玩家:刚分配的落点
    FirstTime { world: Uuid, pos: [i64; 3] },
    // 解析失败:携带给玩家看的原因,会话层应据此断开
    Failed { reason: String },
}

#[derive(Debug)]
pub enum Message {
    // 发起解析
    // 同一玩家已有在途解析时挂靠监听,不会起第二次计算
    Request {
        uuid: Uuid,
        listener: Option<oneshot::Sender<ResolveOutcome>>,
    },
    // 内部:后台解析完成
    Finish {
        uuid: Uuid,
        outcome: ResolveOutcome,
    },
    // 领取结果:首次领取移除句柄,之后再领一律为空
    TryConsume {
        uuid: Uuid,
        result: oneshot::Sender<Option<ResolveOutcome>>,
    },
    // 内部:清扫超时未领取的已完成句柄
    Sweep,
    Close,
}
