// 日志初始化
//
// Android 输出到 logcat，其他平台使用 env_logger（RUST_LOG 可覆盖配置级别）。
// 可重复调用，只有第一次生效。

use super::config::BootstrapConfig;

#[cfg(target_os = "android")]
pub fn init(config: &BootstrapConfig) {
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(config.log_tag.as_str()),
    );
}

#[cfg(not(target_os = "android"))]
pub fn init(config: &BootstrapConfig) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    // 已有全局 logger 时 try_init 返回错误，忽略即可
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .is_test(cfg!(test))
        .try_init();
}
