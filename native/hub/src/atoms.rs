// L4 原子层模块入口

pub mod bridge_registry;
pub mod config;
pub mod error;
pub mod host_runtime;
pub mod jni_bridge;
pub mod logger;
pub mod shared_types;

pub use bridge_registry::{BridgeRegistry, RegistrySnapshot};
pub use config::BootstrapConfig;
pub use error::{BridgeInitializationFailure, BridgeResult};
pub use host_runtime::HostRuntime;
pub use logger::init;
pub use shared_types::{HybridObjectEntry, LoadStatus, RuntimeHandle};
