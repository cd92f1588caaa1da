use uuid::Uuid;

/// 一个已验证、未发放的出生点
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpawnPoint {
    pub world: Uuid,
    pub pos: [i64; 3],
}

#[derive(Debug)]
pub enum Message {
    // 取走一个库存点,一经取走永不回池
    // 池空回填None,不等待补给
    Withdraw(Option<SpawnPoint>),
    // 查询库存;ready指库存自启动以来是否达到过目标值
    Status { remaining: usize, ready: bool },
    // 触发补给,已在补给中时忽略
    Replenish,
    // 内部:补给循环产出一个点
    Deposit(SpawnPoint),
    // 内部:补给循环退出
    RefillEnded { ok: bool },
    Close,
}
