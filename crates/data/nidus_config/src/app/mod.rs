pub mod nidus_login;
pub mod nidus_one;
pub mod nidus_spawn;
pub mod nidus_store;
pub mod nidus_world;
