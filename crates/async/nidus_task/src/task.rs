use dashmap::DashMap;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event::{TaskEasyEvent, TaskEvent, TaskManageEvent};
use crate::message::MessageSender;

/// 任务:持有业务数据,逐条消费自己管道里的消息
pub struct Task<MessageType, ManageMessageType, TaskData> {
    api: MessageSender<MessageType>,
    manage_api: MessageSender<ManageMessageType>,
    other: TaskData,
    receiver: Option<UnboundedReceiver<MessageType>>,
}

impl<MessageType, ManageMessageType, TaskData> Task<MessageType, ManageMessageType, TaskData>
where
    MessageType: Send + 'static + std::fmt::Debug + Unpin,
    ManageMessageType: Send + 'static + std::fmt::Debug + Unpin,
    TaskData: Send + 'static + std::fmt::Debug + Unpin + TaskEvent<MessageType, ManageMessageType>,
{
    pub fn new(
        manage_api: MessageSender<ManageMessageType>,
        data: TaskData,
    ) -> (Self, MessageSender<MessageType>) {
        let (w, r) = tokio::sync::mpsc::unbounded_channel();
        (
            Self {
                api: w.clone(),
                manage_api,
                other: data,
                receiver: Some(r),
            },
            w,
        )
    }

    // 请注意:下面的所有权转移并不是失误,是刻意的设计
    pub async fn run(self) -> anyhow::Result<()> {
        tokio::spawn(self.listen());
        Ok(())
    }

    async fn listen(mut self) -> anyhow::Result<()> {
        let mut receiver = self
            .receiver
            .take()
            .ok_or_else(|| anyhow::anyhow!("接收管道不存在"))?;
        let api = self.api;
        let manage_api = self.manage_api;
        while let Some(data) = receiver.recv().await {
            if self.other.event(&api, &manage_api, data).await? {
                receiver.close();
            }
        }
        Ok(())
    }
}

/// 任务(简化版):没有上级管理器
pub struct TaskEasy<MessageType, TaskData> {
    api: MessageSender<MessageType>,
    other: TaskData,
    receiver: Option<UnboundedReceiver<MessageType>>,
}

impl<MessageType, TaskData> TaskEasy<MessageType, TaskData>
where
    MessageType: Send + 'static + std::fmt::Debug + Unpin,
    TaskData: Send + 'static + std::fmt::Debug + Unpin + TaskEasyEvent<MessageType>,
{
    pub fn new(data: TaskData) -> (Self, MessageSender<MessageType>) {
        let (w, r) = tokio::sync::mpsc::unbounded_channel();
        (
            Self {
                api: w.clone(),
                other: data,
                receiver: Some(r),
            },
            w,
        )
    }

    // 请注意:下面的所有权转移并不是失误,是刻意的设计
    pub async fn run(self) -> anyhow::Result<()> {
        tokio::spawn(self.listen());
        Ok(())
    }

    async fn listen(mut self) -> anyhow::Result<()> {
        let mut receiver = self
            .receiver
            .take()
            .ok_or_else(|| anyhow::anyhow!("接收管道不存在"))?;
        let api = self.api;
        while let Some(data) = receiver.recv().await {
            if self.other.event(&api, data).await? {
                receiver.close();
            }
        }
        Ok(())
    }
}

// 任务管理器
// 创建与回收均由此管理,提供查询对应子任务的服务
// 回收由子任务自己向管理器报告
pub struct TaskManage<ID, TaskData, MessageType, SubMessageType> {
    task_map: DashMap<ID, MessageSender<SubMessageType>>, // 保存的是api接口而非任务本体
    receiver: Option<UnboundedReceiver<MessageType>>,
    api: MessageSender<MessageType>,
    other: TaskData, // 管理器本质也是任务,只是基于任务实现的
}

impl<ID, TaskData, MessageType, SubMessageType> TaskManage<ID, TaskData, MessageType, SubMessageType>
where
    ID: std::hash::Hash + Eq + Send + Sync + 'static,
    MessageType: Send + Sync + 'static,
    SubMessageType: Send + Sync + 'static,
    TaskData: Send + Sync + TaskManageEvent<ID, MessageType, SubMessageType> + 'static,
{
    pub fn new(data: TaskData) -> (Self, MessageSender<MessageType>) {
        let (w, r) = tokio::sync::mpsc::unbounded_channel();
        (
            Self {
                api: w.clone(),
                other: data,
                receiver: Some(r),
                task_map: DashMap::<ID, MessageSender<SubMessageType>>::new(),
            },
            w,
        )
    }

    // 请注意:下面的所有权转移并不是失误,是刻意的设计
    pub async fn run(self) -> anyhow::Result<()> {
        tokio::spawn(self.listen());
        Ok(())
    }

    async fn listen(mut self) -> anyhow::Result<()> {
        let mut receiver = self
            .receiver
            .take()
            .ok_or_else(|| anyhow::anyhow!("接收管道不存在"))?;
        let api = self.api;
        let task_map = self.task_map;
        while let Some(data) = receiver.recv().await {
            if self.other.event(&api, &task_map, data).await? {
                receiver.close();
            }
        }
        Ok(())
    }
}
