// Android JNI 桥接：把加载器传入的 JavaVM 包装成 HostRuntime
// 仅 Android 平台编译

#[cfg(target_os = "android")]
mod initializer;

#[cfg(target_os = "android")]
pub use initializer::JniRuntime;
