//! 注册记录
//!
//! `#[di_reg]` 宏在程序启动时为每个标注生成一条 [`RegistrationRecord`]，
//! 注册器按模块消费这些记录。

use crate::lifetime::Lifetime;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// 类型擦除后的组件实例
///
/// 内部持有 `Arc<T>`（T 可以是 `dyn Trait`），解析时按键类型还原。
pub type ErasedInstance = Box<dyn Any + Send + Sync>;

/// 类型擦除后的实例工厂
pub type ErasedFactory = Arc<dyn Fn() -> ErasedInstance + Send + Sync>;

/// 服务键
///
/// 组件在容器中的查找键：`TypeId` 加上可读的类型名称。
/// 按抽象注册时键来自 trait 对象类型，否则来自具体类型本身。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceKey {
    /// 键的类型ID
    pub id: TypeId,
    /// 完整类型名称
    pub name: &'static str,
}

impl ServiceKey {
    /// 从类型获取服务键
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

/// 注册记录
///
/// 一条标注对应一条记录：(服务键, 具体类型, 生命周期) 加上来源模块
/// 与实例工厂。构造后不可变，注册器只读取。
#[derive(Clone)]
pub struct RegistrationRecord {
    /// 容器中的查找键
    pub key: ServiceKey,
    /// 具体实现类型
    pub concrete: ServiceKey,
    /// 生命周期
    pub lifetime: Lifetime,
    /// 来源 crate 名称，注册器按此过滤
    pub module: &'static str,
    /// 标注所在的模块路径，用于诊断输出
    pub module_path: &'static str,
    /// 实例工厂
    pub factory: ErasedFactory,
}

impl std::fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("key", &self.key)
            .field("concrete", &self.concrete)
            .field("lifetime", &self.lifetime)
            .field("module", &self.module)
            .field("module_path", &self.module_path)
            .field("factory", &"<factory>")
            .finish()
    }
}

impl RegistrationRecord {
    /// 创建按抽象注册的记录
    ///
    /// `T` 是查找键类型（通常为 `dyn Trait`，需要 `Send + Sync` 超 trait），
    /// `C` 是具体实现类型。`Arc<C>` 到 `Arc<T>` 的转换在 `make` 闭包内
    /// 完成，之后全部类型擦除。
    pub fn keyed<T, C>(
        lifetime: Lifetime,
        module: &'static str,
        module_path: &'static str,
        make: fn() -> Arc<T>,
    ) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        C: Send + Sync + 'static,
    {
        Self {
            key: ServiceKey::of::<T>(),
            concrete: ServiceKey::of::<C>(),
            lifetime,
            module,
            module_path,
            factory: Arc::new(move || Box::new(make()) as ErasedInstance),
        }
    }

    /// 创建按具体类型注册的记录
    ///
    /// 标注未指定抽象时，具体类型自身就是查找键。
    pub fn concrete<C>(lifetime: Lifetime, module: &'static str, module_path: &'static str) -> Self
    where
        C: Default + Send + Sync + 'static,
    {
        Self::keyed::<C, C>(lifetime, module, module_path, || Arc::new(C::default()))
    }
}
