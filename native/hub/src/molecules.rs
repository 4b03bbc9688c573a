// L3 分子层模块入口：组合原子层能力完成桥接初始化与模块注册

pub mod bridge;
pub mod load_hook;
pub mod sms_retriever;

pub use bridge::Bridge;
pub use load_hook::{LoadHook, ModuleInitializer};
