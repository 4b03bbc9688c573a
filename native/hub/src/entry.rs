// 动态库导出入口：JNI_OnLoad / JNI_OnUnload
// 仅 Android 平台编译

use jni::sys::{JavaVM, jint};
use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};

use crate::atoms::jni_bridge::JniRuntime;
use crate::atoms::{HostRuntime, LoadStatus, logger};
use crate::molecules::{Bridge, LoadHook, sms_retriever};

#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    let bridge = Bridge::global();
    logger::init(bridge.config());

    // panic 不能穿过 FFI 边界
    let status = panic::catch_unwind(AssertUnwindSafe(|| {
        let runtime = unsafe { JniRuntime::from_raw(vm) };
        LoadHook::new(bridge, sms_retriever::initialize)
            .on_load(runtime.as_ref().map(|r| r as &dyn HostRuntime))
    }))
    .unwrap_or_else(|_| {
        log::error!("{} 加载过程中发生 panic", bridge.config().module_name);
        LoadStatus::Failed
    });

    status.as_raw()
}

#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnUnload(_vm: *mut JavaVM, _reserved: *mut c_void) {
    let bridge = Bridge::global();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        LoadHook::new(bridge, sms_retriever::initialize).on_unload();
    }));
    if result.is_err() {
        log::error!("{} 卸载过程中发生 panic", bridge.config().module_name);
    }
}
