pub const NIDUS_VERSION: &'static str = "0.1.0a"; // Nidus服务端版本
const fn make_nidus_name() -> &'static str {
    "Nidus 0.1.0a"
}
pub const NIDUS_NAME: &'static str = make_nidus_name();

pub mod app;
pub mod public;
pub mod tool;
