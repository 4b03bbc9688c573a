// 跨语言桥接层
//
// 负责版本协商与一次性注册：初始化器写入暂存注册表，成功后整体替换正式注册表，
// 失败时正式注册表保持不变。成功初始化后再次调用直接返回，不会重复注册。

use once_cell::sync::Lazy;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

use crate::atoms::{
    BootstrapConfig, BridgeInitializationFailure, BridgeRegistry, BridgeResult, HostRuntime,
    RegistrySnapshot,
};

static GLOBAL_BRIDGE: Lazy<Bridge> = Lazy::new(|| Bridge::from_config(BootstrapConfig::load()));

#[derive(Default)]
struct BridgeState {
    registry: BridgeRegistry,
    negotiated_version: Option<i32>,
}

pub struct Bridge {
    config: BootstrapConfig,
    // 配置来源解析失败的原因，初始化时作为失败返回
    config_error: Option<String>,
    state: Mutex<BridgeState>,
}

impl Bridge {
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            config_error: None,
            state: Mutex::new(BridgeState::default()),
        }
    }

    // 配置读取失败时仍构造实例（日志需要缺省标签），但之后的每次初始化都会失败
    pub fn from_config(config: Result<BootstrapConfig, String>) -> Self {
        match config {
            Ok(config) => Self::new(config),
            Err(e) => Self {
                config_error: Some(e),
                ..Self::new(BootstrapConfig::default())
            },
        }
    }

    // 进程级实例，仅供导出的加载入口使用
    pub fn global() -> &'static Bridge {
        &GLOBAL_BRIDGE
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    // 初始化桥接层并在其中执行模块注册
    //
    // 初始化器执行期间持有桥接锁，初始化器内不得再访问同一个 Bridge。
    pub fn initialize<F>(&self, runtime: &dyn HostRuntime, init: F) -> BridgeResult<i32>
    where
        F: FnOnce(&dyn HostRuntime, &mut BridgeRegistry) -> Result<(), String>,
    {
        // 配置无效时不能把非法版本号当作成功返回给加载器
        if let Some(e) = &self.config_error {
            return Err(BridgeInitializationFailure::InvalidConfig(e.clone()));
        }
        self.config
            .validate()
            .map_err(BridgeInitializationFailure::InvalidConfig)?;

        let mut state = self.lock()?;

        if let Some(version) = state.negotiated_version {
            log::debug!("{} 桥接层已初始化，跳过重复注册", self.config.module_name);
            return Ok(version);
        }

        let required = self.config.required_jni_version;
        let actual = runtime
            .version()
            .map_err(BridgeInitializationFailure::RuntimeUnavailable)?;
        if actual < required {
            return Err(BridgeInitializationFailure::VersionMismatch { required, actual });
        }

        log::debug!(
            "初始化 {} 桥接层（运行时 {:?}，JNI 0x{:08X}）",
            self.config.module_name,
            runtime.handle(),
            actual
        );

        let mut staged = BridgeRegistry::new();
        match panic::catch_unwind(AssertUnwindSafe(|| init(runtime, &mut staged))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(BridgeInitializationFailure::InitializerFailed(e)),
            Err(payload) => {
                return Err(BridgeInitializationFailure::InitializerPanicked(
                    panic_message(payload.as_ref()),
                ));
            }
        }

        // 未初始化时正式注册表必为空（成功与卸载总是同时设置两者），直接替换即可
        let registered = staged.len();
        state.registry = staged;
        state.negotiated_version = Some(required);

        log::info!(
            "{} 桥接层初始化成功，注册 {} 个混合对象",
            self.config.module_name,
            registered
        );
        Ok(required)
    }

    pub fn is_initialized(&self) -> bool {
        self.lock()
            .map(|state| state.negotiated_version.is_some())
            .unwrap_or(false)
    }

    // 清空注册并重置初始化状态，返回移除的条目数
    pub fn teardown(&self) -> BridgeResult<usize> {
        let mut state = self.lock()?;
        let removed = state.registry.len();
        state.registry.clear();
        state.negotiated_version = None;
        Ok(removed)
    }

    pub fn snapshot(&self) -> BridgeResult<RegistrySnapshot> {
        let state = self.lock()?;
        Ok(RegistrySnapshot {
            module_name: self.config.module_name.clone(),
            initialized: state.negotiated_version.is_some(),
            hybrid_objects: state.registry.entries(),
        })
    }

    fn lock(&self) -> BridgeResult<MutexGuard<'_, BridgeState>> {
        self.state
            .lock()
            .map_err(|e| BridgeInitializationFailure::RegistryUnavailable(e.to_string()))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "未知 panic".to_string()
    }
}
