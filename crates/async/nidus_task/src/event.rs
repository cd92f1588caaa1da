use async_trait::async_trait;
use dashmap::DashMap;

use crate::message::MessageSender;

// 任务事件:返回Ok(true)表示任务结束
#[async_trait]
pub trait TaskEvent<MessageType, ManageMessageType> {
    async fn event(
        &mut self,
        api: &MessageSender<MessageType>,
        manage_api: &MessageSender<ManageMessageType>,
        data: MessageType,
    ) -> anyhow::Result<bool>;
}

// 任务事件(无上级管理器的简化版)
#[async_trait]
pub trait TaskEasyEvent<MessageType> {
    async fn event(
        &mut self,
        api: &MessageSender<MessageType>,
        data: MessageType,
    ) -> anyhow::Result<bool>;
}

// 任务管理器事件:task_map保存子任务的api接口
#[async_trait]
pub trait TaskManageEvent<ID, MessageType, SubMessageType> {
    async fn event(
        &mut self,
        api: &MessageSender<MessageType>,
        task_map: &DashMap<ID, MessageSender<SubMessageType>>,
        data: MessageType,
    ) -> anyhow::Result<bool>;
}
