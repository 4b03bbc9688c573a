// 引导配置
//
// 加载阶段使用的全部可调参数，缺省值即 Android 发布构建使用的值。

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::shared_types::JNI_VERSION_1_6;

const DEFAULT_MODULE_NAME: &str = "NitroSMSRetriever";

// 宿主可通过该环境变量传入 JSON 覆盖缺省配置
pub const CONFIG_ENV_VAR: &str = "NITRO_SMS_RETRIEVER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub module_name: String,
    pub log_tag: String,
    pub log_level: String,
    pub required_jni_version: i32,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            log_tag: DEFAULT_MODULE_NAME.to_string(),
            log_level: "info".to_string(),
            required_jni_version: JNI_VERSION_1_6,
        }
    }
}

impl BootstrapConfig {
    // 读取进程环境中的配置，未设置时使用缺省值
    pub fn load() -> Result<Self, String> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    pub fn load_with<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(CONFIG_ENV_VAR) {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    // 从 JSON 解析，缺失字段取缺省值
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("解析引导配置失败：{}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.module_name.trim().is_empty() {
            return Err("模块名不能为空".to_string());
        }
        if self.required_jni_version <= 0 {
            return Err(format!(
                "无效的 JNI 版本：{}",
                self.required_jni_version
            ));
        }
        self.level_filter().map(|_| ())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| format!("无效的日志级别：{}", self.log_level))
    }
}
