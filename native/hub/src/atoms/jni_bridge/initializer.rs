// Android JNI 运行时适配器

use jni::JavaVM;
use std::ffi::c_void;

use crate::atoms::host_runtime::HostRuntime;
use crate::atoms::shared_types::RuntimeHandle;

pub struct JniRuntime {
    vm: JavaVM,
    handle: RuntimeHandle,
}

impl JniRuntime {
    // 空指针返回 None
    //
    // # Safety
    // `vm` 必须为空或指向加载器传入的有效 JavaVM。
    pub unsafe fn from_raw(vm: *mut jni::sys::JavaVM) -> Option<Self> {
        let handle = RuntimeHandle::from_raw(vm.cast::<c_void>())?;
        match unsafe { JavaVM::from_raw(vm) } {
            Ok(vm) => Some(Self { vm, handle }),
            Err(e) => {
                log::error!("包装 JavaVM 失败: {:?}", e);
                None
            }
        }
    }
}

impl HostRuntime for JniRuntime {
    fn handle(&self) -> RuntimeHandle {
        self.handle
    }

    fn version(&self) -> Result<i32, String> {
        let env = self
            .vm
            .get_env()
            .map_err(|e| format!("获取 JNIEnv 失败: {:?}", e))?;
        let version = env
            .get_version()
            .map_err(|e| format!("查询 JNI 版本失败: {:?}", e))?;
        Ok(version.into())
    }

    fn resolve_class(&self, class_path: &str) -> Result<(), String> {
        let mut env = self
            .vm
            .get_env()
            .map_err(|e| format!("获取 JNIEnv 失败: {:?}", e))?;

        match env.find_class(class_path) {
            Ok(class) => {
                let _ = env.delete_local_ref(class);
                Ok(())
            }
            Err(e) => {
                // find_class 失败会留下 NoClassDefFoundError，必须清除后才能返回加载器
                if env.exception_check().unwrap_or(false) {
                    let _ = env.exception_clear();
                }
                Err(format!("找不到类 {}: {:?}", class_path, e))
            }
        }
    }
}
