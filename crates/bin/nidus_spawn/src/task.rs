use std::collections::VecDeque;

use async_trait::async_trait;
use nidus_config::app::nidus_spawn::SpawnConfig;
use nidus_task::{
    event::TaskEasyEvent,
    message::{MessageSender, MessageType, ReturnMessage, UnReturnMessage},
};
use nidus_world::message::GlobalCommand;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::message::{Message, SpawnPoint};
use crate::search;
use crate::IssuedSet;

#[derive(Debug)]
pub struct Pool {
    config: SpawnConfig,
    // 出生点所属世界(主世界)
    world: Uuid,
    world_api: UnboundedSender<UnReturnMessage<GlobalCommand>>,
    issued: IssuedSet,
    stock: VecDeque<SpawnPoint>,
    ready: bool,
    refilling: bool,
}

impl Pool {
    pub fn new(
        config: SpawnConfig,
        world: Uuid,
        world_api: UnboundedSender<UnReturnMessage<GlobalCommand>>,
        issued: IssuedSet,
    ) -> Self {
        Self {
            config,
            world,
            world_api,
            issued,
            stock: VecDeque::new(),
            ready: false,
            refilling: false,
        }
    }

    // 已在补给中时不再起第二个循环
    fn start_refill(&mut self, api: &MessageSender<ReturnMessage<Message>>) {
        if self.refilling {
            return;
        }
        self.refilling = true;
        tokio::spawn(refill_loop(
            api.clone(),
            self.world_api.clone(),
            self.world,
            self.config.clone(),
            self.issued.clone(),
        ));
    }
}

#[async_trait]
impl TaskEasyEvent<ReturnMessage<Message>> for Pool {
    async fn event(
        &mut self,
        api: &MessageSender<ReturnMessage<Message>>,
        mut data: ReturnMessage<Message>,
    ) -> anyhow::Result<bool> {
        let close = match &mut data.data {
            Message::Withdraw(slot) => {
                *slot = self.stock.pop_front();
                if self.stock.len() < self.config.target_size {
                    self.start_refill(api);
                }
                false
            }
            Message::Status { remaining, ready } => {
                *remaining = self.stock.len();
                *ready = self.ready;
                false
            }
            Message::Replenish => {
                self.start_refill(api);
                false
            }
            Message::Deposit(point) => {
                if self.stock.len() >= self.config.target_size {
                    // 库存已满,多余产出直接丢弃(其坐标已登记,不会复用)
                    log::debug!("[出生点池] 库存已满,丢弃多余产出 {:?}", point.pos);
                } else {
                    self.stock.push_back(point.clone());
                    if !self.ready && self.stock.len() >= self.config.target_size {
                        self.ready = true;
                        log::info!(
                            "[出生点池] 库存首次到位({}),开放新玩家接入",
                            self.stock.len()
                        );
                    }
                }
                false
            }
            Message::RefillEnded { ok } => {
                self.refilling = false;
                // 补给收尾与取用之间存在间隙,缺口直接续上
                if *ok && self.stock.len() < self.config.target_size {
                    self.start_refill(api);
                }
                false
            }
            Message::Close => true,
        };
        if let Some(send) = data.get_return_send().await? {
            let _ = send.send(data.data);
        }
        Ok(close)
    }
}

// 补给循环:逐个生产直到库存到位,每产出一个就让出执行权
// 单次搜索失败即暂停补给并记录,不无限重试
async fn refill_loop(
    api: MessageSender<ReturnMessage<Message>>,
    world_api: UnboundedSender<UnReturnMessage<GlobalCommand>>,
    world: Uuid,
    config: SpawnConfig,
    issued: IssuedSet,
) {
    loop {
        // 查询当前余量
        let remaining = match ReturnMessage::build(Message::Status {
            remaining: 0,
            ready: false,
        })
        .get(&api)
        .await
        {
            Ok(Message::Status { remaining, .. }) => remaining,
            _ => return,
        };
        if remaining >= config.target_size {
            let _ = ReturnMessage::build(Message::RefillEnded { ok: true })
                .post(&api)
                .await;
            return;
        }

        match search::search_once(&world_api, world, &config).await {
            Ok(Some(point)) => {
                // 坐标终身只发放一次,撞重就丢弃重搜
                if issued.claim(&point) {
                    let _ = ReturnMessage::build(Message::Deposit(point)).post(&api).await;
                }
            }
            Ok(None) => {
                log::warn!(
                    "[出生点池] 安全点搜索未命中,补给暂停,当前库存{},历史发放{}",
                    remaining,
                    issued.len()
                );
                let _ = ReturnMessage::build(Message::RefillEnded { ok: false })
                    .post(&api)
                    .await;
                return;
            }
            Err(e) => {
                log::error!("[出生点池] 与世界服务通信失败,补给暂停: {}", e);
                let _ = ReturnMessage::build(Message::RefillEnded { ok: false })
                    .post(&api)
                    .await;
                return;
            }
        }
        // 让出执行权,避免独占调度
        tokio::task::yield_now().await;
    }
}
