use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;

pub type MessageSender<MessageType> = UnboundedSender<MessageType>;

#[async_trait]
pub trait MessageType<T, R, S>: Sized + Send + 'static
where
    T: Send + 'static + Sync,
    R: Send + 'static,
    S: Send + 'static,
{
    fn build(data: T) -> Self;
    async fn post(self, send: &MessageSender<Self>) -> anyhow::Result<R>;
    async fn get_return_send(&mut self) -> anyhow::Result<S>;
}

/// 带返回的消息:投递后通过oneshot管道取回处理结果
#[derive(Debug)]
pub struct ReturnMessage<T> {
    pub data: T,
    sand: Option<oneshot::Sender<T>>,
}

#[async_trait]
impl<T> MessageType<T, oneshot::Receiver<T>, Option<oneshot::Sender<T>>> for ReturnMessage<T>
where
    T: Send + 'static + Sync + std::fmt::Debug + Unpin,
{
    fn build(data: T) -> Self {
        Self { data, sand: None }
    }

    async fn post(mut self, send: &MessageSender<Self>) -> anyhow::Result<oneshot::Receiver<T>> {
        let (s, r) = oneshot::channel();
        self.sand = Some(s);
        send.send(self)
            .map_err(|e| anyhow::anyhow!("消息投递失败: {:?}", e))?;
        Ok(r)
    }

    // 取出回信发送器,只能取一次
    async fn get_return_send(&mut self) -> anyhow::Result<Option<oneshot::Sender<T>>> {
        Ok(self.sand.take())
    }
}

impl<T> ReturnMessage<T>
where
    T: Send + 'static + Sync + std::fmt::Debug + Unpin,
{
    /// 投递并等待回信
    pub async fn get(self, send: &MessageSender<Self>) -> anyhow::Result<T> {
        let return_data = self.post(send).await?;
        ReturnMessage::get_return_data(return_data).await
    }

    pub async fn get_return_data(result: oneshot::Receiver<T>) -> anyhow::Result<T> {
        match result.await {
            Ok(data) => Ok(data),
            // 回信管道被关闭或发送端被丢弃
            Err(e) => Err(anyhow::anyhow!("接收回信失败: {:?}", e)),
        }
    }
}

/// 无返回的消息:投递后不关心处理结果
#[derive(Debug)]
pub struct UnReturnMessage<T> {
    pub data: T,
}

#[async_trait]
impl<T> MessageType<T, (), ()> for UnReturnMessage<T>
where
    T: Send + 'static + Sync + std::fmt::Debug + Unpin,
{
    fn build(data: T) -> Self {
        Self { data }
    }

    async fn post(self, send: &MessageSender<Self>) -> anyhow::Result<()> {
        send.send(self)
            .map_err(|e| anyhow::anyhow!("消息投递失败: {:?}", e))?;
        Ok(())
    }

    // 无返回时用不到
    async fn get_return_send(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
