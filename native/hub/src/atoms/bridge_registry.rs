// 桥接注册表原子模块
//
// 按名称保存已注册的混合对象。注册表是显式构造的对象，由桥接层持有并以引用传给初始化器。

use serde::Serialize;
use std::collections::BTreeMap;

use super::shared_types::HybridObjectEntry;

#[derive(Debug, Default)]
pub struct BridgeRegistry {
    entries: BTreeMap<String, HybridObjectEntry>,
}

// 诊断用快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub module_name: String,
    pub initialized: bool,
    pub hybrid_objects: Vec<HybridObjectEntry>,
}

impl RegistrySnapshot {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("序列化注册表快照失败：{}", e))
    }
}

impl BridgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: HybridObjectEntry) -> Result<(), String> {
        if entry.name.trim().is_empty() {
            return Err("混合对象名称不能为空".to_string());
        }
        if entry.implementation_class.trim().is_empty() {
            return Err(format!("混合对象 {} 缺少实现类", entry.name));
        }
        if self.entries.contains_key(&entry.name) {
            return Err(format!("混合对象 {} 已注册", entry.name));
        }

        log::debug!(
            "注册混合对象：{} -> {}",
            entry.name,
            entry.implementation_class
        );
        self.entries.insert(entry.name.clone(), entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&HybridObjectEntry> {
        self.entries.get(name)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn entries(&self) -> Vec<HybridObjectEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
