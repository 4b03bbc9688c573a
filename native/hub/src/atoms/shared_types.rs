// 原子层共享类型定义
// 用于存放加载钩子、桥接层与初始化器之间共享的基础类型

use serde::{Deserialize, Serialize};
use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

// JNI 状态码（与 jni.h 保持一致）
pub const JNI_ERR: i32 = -1;
pub const JNI_VERSION_1_4: i32 = 0x0001_0004;
pub const JNI_VERSION_1_6: i32 = 0x0001_0006;

// 宿主虚拟机句柄
//
// 仅在加载回调期间有效，所有权归宿主运行时，不得在调用结束后保留。
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RuntimeHandle(NonNull<c_void>);

impl RuntimeHandle {
    // 空指针返回 None
    pub fn from_raw(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_raw(&self) -> *mut c_void {
        self.0.as_ptr()
    }
}

impl fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuntimeHandle({:p})", self.0)
    }
}

// 加载结果，最终转换为返回给加载器的整数
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(i32), // 协商得到的 JNI 版本
    Failed,
}

impl LoadStatus {
    pub fn as_raw(self) -> i32 {
        match self {
            LoadStatus::Loaded(version) => version,
            LoadStatus::Failed => JNI_ERR,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, LoadStatus::Loaded(_))
    }
}

// 注册到桥接层的混合对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridObjectEntry {
    pub name: String,
    // JNI 形式的类路径，例如 com/example/Foo
    pub implementation_class: String,
}

impl HybridObjectEntry {
    pub fn new(name: impl Into<String>, implementation_class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            implementation_class: implementation_class.into(),
        }
    }
}
