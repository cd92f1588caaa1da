use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub enum StorageEngine {
    Simple, // 简易,项目内置(每个玩家一个JSON文件)
    Mysql,  // Mysql数据库
    Pika,   // Pika数据库(Redis协议)
}
impl Default for StorageEngine {
    fn default() -> Self {
        StorageEngine::Simple
    }
}

impl std::fmt::Display for StorageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageEngine::Simple => write!(f, "Simple"),
            StorageEngine::Mysql => write!(f, "Mysql"),
            StorageEngine::Pika => write!(f, "Pika"),
        }
    }
}

impl std::str::FromStr for StorageEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(StorageEngine::Simple),
            "mysql" => Ok(StorageEngine::Mysql),
            "pika" => Ok(StorageEngine::Pika),
            _ => Err(format!("未知的存储引擎: {}", s)),
        }
    }
}
