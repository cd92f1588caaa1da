use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use nidus_task::{
    event::TaskEasyEvent,
    message::{MessageSender, MessageType, UnReturnMessage},
};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::message::{Message, ResolveOutcome};
use crate::resolve::{self, ResolveCtx};

/// 单个玩家的在途解析句柄
/// 不存在句柄即处于"无请求"或"已领取"状态
#[derive(Debug)]
enum PendingState {
    Running {
        listeners: Vec<oneshot::Sender<ResolveOutcome>>,
    },
    Completed {
        outcome: ResolveOutcome,
        at: Instant,
    },
}

pub struct Resolver {
    ctx: Arc<ResolveCtx>,
    completed_ttl: Duration,
    pending: HashMap<Uuid, PendingState>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Resolver {
    pub(crate) fn new(ctx: ResolveCtx) -> Self {
        let completed_ttl = Duration::from_secs(ctx.config.completed_ttl_secs.max(1));
        Self {
            ctx: Arc::new(ctx),
            completed_ttl,
            pending: HashMap::new(),
        }
    }
}

#[async_trait]
impl TaskEasyEvent<UnReturnMessage<Message>> for Resolver {
    async fn event(
        &mut self,
        api: &MessageSender<UnReturnMessage<Message>>,
        data: UnReturnMessage<Message>,
    ) -> anyhow::Result<bool> {
        match data.data {
            Message::Request { uuid, listener } => {
                match self.pending.get_mut(&uuid) {
                    None => {
                        // 本消息是该玩家唯一的在途请求,由它发起后台解析
                        self.pending.insert(
                            uuid,
                            PendingState::Running {
                                listeners: listener.into_iter().collect(),
                            },
                        );
                        let ctx = self.ctx.clone();
                        let api = api.clone();
                        tokio::spawn(async move {
                            let outcome = resolve::resolve(uuid, &ctx).await;
                            let _ = UnReturnMessage::build(Message::Finish { uuid, outcome })
                                .post(&api)
                                .await;
                        });
                    }
                    Some(PendingState::Running { listeners }) => {
                        // 已有在途解析,挂靠等待同一结果
                        if let Some(l) = listener {
                            listeners.push(l);
                        }
                    }
                    Some(PendingState::Completed { outcome, .. }) => {
                        // 已完成未领取:直接旁观结果,不影响领取
                        if let Some(l) = listener {
                            let _ = l.send(outcome.clone());
                        }
                    }
                }
            }
            Message::Finish { uuid, outcome } => {
                let listeners = match self.pending.remove(&uuid) {
                    Some(PendingState::Running { listeners }) => listeners,
                    // 句柄不在或已完成(不应发生),以新结果为准
                    _ => Vec::new(),
                };
                for l in listeners {
                    let _ = l.send(outcome.clone());
                }
                self.pending.insert(
                    uuid,
                    PendingState::Completed {
                        outcome,
                        at: Instant::now(),
                    },
                );
            }
            Message::TryConsume { uuid, result } => {
                // 只有已完成的句柄可被领取,领取即移除
                let consumed = match self.pending.get(&uuid) {
                    Some(PendingState::Completed { .. }) => match self.pending.remove(&uuid) {
                        Some(PendingState::Completed { outcome, .. }) => Some(outcome),
                        _ => None,
                    },
                    _ => None,
                };
                let _ = result.send(consumed);
            }
            Message::Sweep => {
                let ttl = self.completed_ttl;
                self.pending.retain(|uuid, state| match state {
                    PendingState::Running { .. } => true,
                    PendingState::Completed { at, .. } => {
                        let keep = at.elapsed() < ttl;
                        if !keep {
                            log::warn!("[登录] {} 的解析结果超时未领取,已清理", uuid);
                        }
                        keep
                    }
                });
            }
            Message::Close => {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
