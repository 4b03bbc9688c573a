// 桥接层初始化失败
//
// 加载阶段只有这一种错误，变体区分失败原因，统一映射为 JNI_ERR 返回给加载器。

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeInitializationFailure {
    #[error("运行时句柄为空")]
    NullRuntimeHandle,

    #[error("无法访问宿主运行时：{0}")]
    RuntimeUnavailable(String),

    #[error("JNI 版本不兼容：需要 0x{required:08X}，实际 0x{actual:08X}")]
    VersionMismatch { required: i32, actual: i32 },

    #[error("模块初始化失败：{0}")]
    InitializerFailed(String),

    #[error("模块初始化发生 panic：{0}")]
    InitializerPanicked(String),

    #[error("引导配置无效：{0}")]
    InvalidConfig(String),

    #[error("注册表不可用：{0}")]
    RegistryUnavailable(String),
}

pub type BridgeResult<T> = Result<T, BridgeInitializationFailure>;
