// NitroSMSRetriever 原生库
//
// 宿主虚拟机加载本库时通过 JNI_OnLoad 初始化桥接层，并注册短信验证码读取模块。
// 层次：atoms（基础类型、配置、日志、注册表、JNI 适配）→ molecules（桥接层、加载钩子、模块初始化器）。

pub mod atoms;
pub mod molecules;

#[cfg(target_os = "android")]
mod entry;

pub use atoms::{
    BootstrapConfig, BridgeInitializationFailure, BridgeRegistry, HostRuntime, HybridObjectEntry,
    LoadStatus, RuntimeHandle,
};
pub use molecules::{Bridge, LoadHook, ModuleInitializer};
