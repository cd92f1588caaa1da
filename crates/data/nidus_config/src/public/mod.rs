pub mod storage_engine;
