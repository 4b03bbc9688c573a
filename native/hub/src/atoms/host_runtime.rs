// 宿主运行时抽象
//
// Android 上由 jni_bridge::JniRuntime 基于 JavaVM 实现，测试中使用假实现。

use super::shared_types::RuntimeHandle;

pub trait HostRuntime {
    fn handle(&self) -> RuntimeHandle;

    // 当前线程可见的 JNI 版本
    fn version(&self) -> Result<i32, String>;

    // 检查托管侧类是否可解析，类路径使用 JNI 形式（斜杠分隔）
    fn resolve_class(&self, class_path: &str) -> Result<(), String>;
}
