// 短信验证码读取模块的注册
//
// 只负责把混合对象名称与 Kotlin 实现类登记到桥接层，监听与解析逻辑全部在 Kotlin 侧。

use crate::atoms::{BridgeRegistry, HostRuntime, HybridObjectEntry};

pub const HYBRID_OBJECT_NAME: &str = "SMSRetriever";
pub const IMPLEMENTATION_CLASS: &str = "com/margelo/nitro/com/smsretriever/HybridSMSRetriever";

pub fn initialize(runtime: &dyn HostRuntime, registry: &mut BridgeRegistry) -> Result<(), String> {
    // 实现类缺失说明应用打包不完整，注册了也无法构造
    runtime.resolve_class(IMPLEMENTATION_CLASS)?;
    registry.register(HybridObjectEntry::new(HYBRID_OBJECT_NAME, IMPLEMENTATION_CLASS))
}
