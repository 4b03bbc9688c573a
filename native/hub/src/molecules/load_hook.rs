// 加载钩子
//
// 宿主加载本库时调用一次：校验运行时、初始化桥接层并在其中执行模块初始化器，
// 把桥接层的结果原样转换为加载器能识别的状态码。不重试，不做部分注册。

use crate::atoms::{
    BridgeInitializationFailure, BridgeRegistry, BridgeResult, HostRuntime, LoadStatus,
};

use super::bridge::Bridge;

// 模块初始化器：负责把模块能力注册进桥接层
pub trait ModuleInitializer {
    fn initialize(
        &self,
        runtime: &dyn HostRuntime,
        registry: &mut BridgeRegistry,
    ) -> Result<(), String>;
}

impl<F> ModuleInitializer for F
where
    F: Fn(&dyn HostRuntime, &mut BridgeRegistry) -> Result<(), String>,
{
    fn initialize(
        &self,
        runtime: &dyn HostRuntime,
        registry: &mut BridgeRegistry,
    ) -> Result<(), String> {
        self(runtime, registry)
    }
}

pub struct LoadHook<'a, I> {
    bridge: &'a Bridge,
    initializer: I,
}

impl<'a, I: ModuleInitializer> LoadHook<'a, I> {
    pub fn new(bridge: &'a Bridge, initializer: I) -> Self {
        Self {
            bridge,
            initializer,
        }
    }

    pub fn on_load(&self, runtime: Option<&dyn HostRuntime>) -> LoadStatus {
        match self.try_load(runtime) {
            Ok(version) => {
                log::info!(
                    "{} 加载完成，JNI 0x{:08X}",
                    self.bridge.config().module_name,
                    version
                );
                LoadStatus::Loaded(version)
            }
            Err(e) => {
                log::error!("{} 加载失败：{}", self.bridge.config().module_name, e);
                LoadStatus::Failed
            }
        }
    }

    pub fn try_load(&self, runtime: Option<&dyn HostRuntime>) -> BridgeResult<i32> {
        let runtime = runtime.ok_or(BridgeInitializationFailure::NullRuntimeHandle)?;
        self.bridge.initialize(runtime, |runtime, registry| {
            self.initializer.initialize(runtime, registry)
        })
    }

    // 库卸载时清理注册
    pub fn on_unload(&self) {
        match self.bridge.teardown() {
            Ok(removed) => log::info!(
                "{} 已卸载，移除 {} 个混合对象",
                self.bridge.config().module_name,
                removed
            ),
            Err(e) => log::warn!("{} 卸载清理失败：{}", self.bridge.config().module_name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::shared_types::{JNI_ERR, JNI_VERSION_1_4, JNI_VERSION_1_6};
    use crate::atoms::{BootstrapConfig, HybridObjectEntry, RuntimeHandle};
    use std::ffi::c_void;
    use std::ptr::NonNull;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockRuntime {
        version: i32,
    }

    impl HostRuntime for MockRuntime {
        fn handle(&self) -> RuntimeHandle {
            let ptr = NonNull::<c_void>::dangling().as_ptr();
            RuntimeHandle::from_raw(ptr).unwrap_or_else(|| unreachable!())
        }

        fn version(&self) -> Result<i32, String> {
            Ok(self.version)
        }

        fn resolve_class(&self, _class_path: &str) -> Result<(), String> {
            Ok(())
        }
    }

    enum Outcome {
        Ok,
        Fail,
        Panic,
    }

    // 调用计数与钩子共享，钩子持有初始化器本身
    struct CountingInitializer {
        calls: Arc<AtomicUsize>,
        outcome: Outcome,
    }

    impl CountingInitializer {
        fn new(outcome: Outcome) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let initializer = Self {
                calls: Arc::clone(&calls),
                outcome,
            };
            (initializer, calls)
        }
    }

    fn count(calls: &AtomicUsize) -> usize {
        calls.load(Ordering::SeqCst)
    }

    impl ModuleInitializer for CountingInitializer {
        fn initialize(
            &self,
            _runtime: &dyn HostRuntime,
            registry: &mut BridgeRegistry,
        ) -> Result<(), String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            registry.register(HybridObjectEntry::new("SMSRetriever", "x/Hybrid"))?;
            match self.outcome {
                Outcome::Ok => Ok(()),
                Outcome::Fail => Err("registration rejected".to_string()),
                Outcome::Panic => panic!("initializer blew up"),
            }
        }
    }

    fn mock_runtime() -> MockRuntime {
        MockRuntime {
            version: JNI_VERSION_1_6,
        }
    }

    #[test]
    fn valid_runtime_loads_and_calls_initializer_once() {
        let bridge = Bridge::new(BootstrapConfig::default());
        let (initializer, calls) = CountingInitializer::new(Outcome::Ok);
        let hook = LoadHook::new(&bridge, initializer);
        let runtime = mock_runtime();

        let status = hook.on_load(Some(&runtime));

        assert_eq!(status, LoadStatus::Loaded(JNI_VERSION_1_6));
        assert_eq!(status.as_raw(), JNI_VERSION_1_6);
        assert_eq!(count(&calls), 1);
        assert!(bridge.is_initialized());
    }

    #[test]
    fn missing_runtime_fails_without_calling_initializer() {
        let bridge = Bridge::new(BootstrapConfig::default());
        let (initializer, calls) = CountingInitializer::new(Outcome::Ok);
        let hook = LoadHook::new(&bridge, initializer);

        assert_eq!(hook.on_load(None), LoadStatus::Failed);
        assert_eq!(
            hook.try_load(None),
            Err(BridgeInitializationFailure::NullRuntimeHandle)
        );
        assert_eq!(count(&calls), 0);
    }

    #[test]
    fn repeated_load_does_not_register_twice() {
        let bridge = Bridge::new(BootstrapConfig::default());
        let (initializer, calls) = CountingInitializer::new(Outcome::Ok);
        let hook = LoadHook::new(&bridge, initializer);
        let runtime = mock_runtime();

        assert!(hook.on_load(Some(&runtime)).is_success());
        assert!(hook.on_load(Some(&runtime)).is_success());

        assert_eq!(count(&calls), 1);
        assert_eq!(bridge.snapshot().map(|s| s.hybrid_objects.len()), Ok(1));
    }

    #[test]
    fn initializer_error_is_reported_as_failure() {
        let bridge = Bridge::new(BootstrapConfig::default());
        let (initializer, calls) = CountingInitializer::new(Outcome::Fail);
        let hook = LoadHook::new(&bridge, initializer);
        let runtime = mock_runtime();

        let status = hook.on_load(Some(&runtime));

        assert_eq!(status.as_raw(), JNI_ERR);
        assert_eq!(count(&calls), 1);
        assert!(!bridge.is_initialized());
        assert_eq!(bridge.snapshot().map(|s| s.hybrid_objects.len()), Ok(0));
    }

    #[test]
    fn initializer_panic_is_reported_as_failure() {
        let bridge = Bridge::new(BootstrapConfig::default());
        let (initializer, calls) = CountingInitializer::new(Outcome::Panic);
        let hook = LoadHook::new(&bridge, initializer);
        let runtime = mock_runtime();

        assert_eq!(hook.on_load(Some(&runtime)), LoadStatus::Failed);
        assert_eq!(count(&calls), 1);
        assert_eq!(bridge.snapshot().map(|s| s.hybrid_objects.len()), Ok(0));
    }

    #[test]
    fn old_runtime_fails_without_calling_initializer() {
        let bridge = Bridge::new(BootstrapConfig::default());
        let (initializer, calls) = CountingInitializer::new(Outcome::Ok);
        let hook = LoadHook::new(&bridge, initializer);
        let runtime = MockRuntime {
            version: JNI_VERSION_1_4,
        };

        assert_eq!(hook.on_load(Some(&runtime)), LoadStatus::Failed);
        assert_eq!(count(&calls), 0);
    }

    #[test]
    fn unload_clears_registrations() {
        let bridge = Bridge::new(BootstrapConfig::default());
        let (initializer, calls) = CountingInitializer::new(Outcome::Ok);
        let hook = LoadHook::new(&bridge, initializer);
        let runtime = mock_runtime();

        assert!(hook.on_load(Some(&runtime)).is_success());
        hook.on_unload();

        assert!(!bridge.is_initialized());
        assert_eq!(bridge.snapshot().map(|s| s.hybrid_objects.len()), Ok(0));

        // 重新加载会再次注册
        assert!(hook.on_load(Some(&runtime)).is_success());
        assert_eq!(count(&calls), 2);
    }

    #[test]
    fn negative_required_version_is_a_failed_load() {
        let bridge = Bridge::new(BootstrapConfig {
            required_jni_version: -1,
            ..BootstrapConfig::default()
        });
        let (initializer, calls) = CountingInitializer::new(Outcome::Ok);
        let hook = LoadHook::new(&bridge, initializer);
        let runtime = mock_runtime();

        let status = hook.on_load(Some(&runtime));

        assert_eq!(status, LoadStatus::Failed);
        assert!(!status.is_success());
        assert_eq!(count(&calls), 0);
    }

    #[test]
    fn plain_function_works_as_initializer() {
        fn register_nothing(
            _runtime: &dyn HostRuntime,
            _registry: &mut BridgeRegistry,
        ) -> Result<(), String> {
            Ok(())
        }

        let bridge = Bridge::new(BootstrapConfig::default());
        let hook = LoadHook::new(&bridge, register_nothing);
        let runtime = mock_runtime();
        assert!(hook.on_load(Some(&runtime)).is_success());
    }
}
