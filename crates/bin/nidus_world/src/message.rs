use tokio::sync::oneshot;
use uuid::Uuid;

use crate::block::BlockId;

#[derive(Debug)]
pub enum GlobalCommand {
    // 初始化:按配置拉起各世界任务
    Init,
    // 世界引用是否仍然有效
    WorldExists {
        world: Uuid,
        result: oneshot::Sender<bool>,
    },
    GetWorlds {
        result: oneshot::Sender<Vec<Uuid>>,
    },

    // 以下命令转发到对应世界,世界不存在时回送失败
    EnsureChunk {
        world: Uuid,
        chunk: [i64; 2],
        result: oneshot::Sender<bool>,
    },
    BlockAt {
        world: Uuid,
        pos: [i64; 3],
        result: oneshot::Sender<Option<BlockId>>,
    },
    // pos为站立坐标(脚所在格)
    CheckSpawn {
        world: Uuid,
        pos: [i64; 3],
        result: oneshot::Sender<bool>,
    },
    // 装载该列所在区块并自上而下扫描,回送首个可站立的y(站立坐标)
    FindColumnSpawn {
        world: Uuid,
        column: [i64; 2],
        scan_top: i64,
        scan_floor: i64,
        result: oneshot::Sender<Option<i64>>,
    },

    // 世界任务退出时上报
    WorldCloseEvent {
        world: Uuid,
    },
    Close {
        result: oneshot::Sender<()>,
    },
}

#[derive(Debug)]
pub enum WorldCommand {
    Init,
    EnsureChunk {
        chunk: [i64; 2],
        result: oneshot::Sender<bool>,
    },
    BlockAt {
        pos: [i64; 3],
        result: oneshot::Sender<Option<BlockId>>,
    },
    CheckSpawn {
        pos: [i64; 3],
        result: oneshot::Sender<bool>,
    },
    FindColumnSpawn {
        column: [i64; 2],
        scan_top: i64,
        scan_floor: i64,
        result: oneshot::Sender<Option<i64>>,
    },
    Close {
        result: oneshot::Sender<()>,
    },
}
