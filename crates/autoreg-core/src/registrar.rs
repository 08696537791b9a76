//! 组件注册器
//!
//! 消费全局注册表，把标注组件登记到外部容器的注册表面上。
//! 注册是一次性的启动动作：同步、无重试，重复调用会产生重复注册，
//! 重复键的取舍由容器自己的策略决定。

use crate::lifetime::Lifetime;
use crate::record::{ErasedFactory, ServiceKey};
use crate::table;
use tracing::{debug, info};

/// 容器注册表面
///
/// 本组件从外部依赖注入容器消费的最小表面：三种生命周期各一个
/// 注册操作。键与具体类型的对应关系封装在工厂里。
pub trait ServiceRegistrar: Send + Sync {
    /// 按单例生命周期注册
    fn register_singleton(&mut self, key: ServiceKey, factory: ErasedFactory);

    /// 按作用域生命周期注册
    fn register_scoped(&mut self, key: ServiceKey, factory: ErasedFactory);

    /// 按瞬时生命周期注册
    fn register_transient(&mut self, key: ServiceKey, factory: ErasedFactory);
}

/// 注册指定模块中的全部标注组件
///
/// 按调用方给出的模块顺序遍历，每条记录恰好产生一次注册调用。
/// 空模块列表合法，产生零次注册。返回执行的注册次数。
pub fn register_modules(registrar: &mut dyn ServiceRegistrar, modules: &[&str]) -> usize {
    let mut applied = 0;

    for module in modules {
        for record in table::records_for_module(module) {
            debug!(
                module = record.module,
                service = record.key.name,
                concrete = record.concrete.name,
                lifetime = record.lifetime.as_str(),
                "注册标注组件"
            );

            // 生命周期是封闭枚举，三个分支穷尽所有取值
            match record.lifetime {
                Lifetime::Singleton => registrar.register_singleton(record.key, record.factory),
                Lifetime::Scoped => registrar.register_scoped(record.key, record.factory),
                Lifetime::Transient => registrar.register_transient(record.key, record.factory),
            }
            applied += 1;
        }
    }

    info!(modules = modules.len(), registrations = applied, "标注组件注册完成");
    applied
}

/// 注册单个模块中的全部标注组件
///
/// [`register_modules`] 的单模块便捷形式。
pub fn register_module(registrar: &mut dyn ServiceRegistrar, module: &str) -> usize {
    register_modules(registrar, &[module])
}
