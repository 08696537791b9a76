//! 服务注册集合

use crate::provider::ServiceProvider;
use autoreg_core::{ErasedFactory, ErasedInstance, Lifetime, ServiceKey, ServiceRegistrar};
use std::sync::Arc;
use tracing::debug;

/// 服务描述符
///
/// 一次注册的全部信息：查找键、生命周期与实例工厂。
#[derive(Clone)]
pub struct ServiceDescriptor {
    /// 容器中的查找键
    pub key: ServiceKey,
    /// 生命周期
    pub lifetime: Lifetime,
    /// 实例工厂
    pub factory: ErasedFactory,
}

impl std::fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("key", &self.key)
            .field("lifetime", &self.lifetime)
            .field("factory", &"<factory>")
            .finish()
    }
}

/// 服务注册集合
///
/// 容器的可变注册表面。注册条目按加入顺序保留，包括重复键；
/// 构建提供者时同键的后一条注册覆盖前一条（后注册优先）。
#[derive(Debug, Default)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollection {
    /// 创建空的注册集合
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 按给定生命周期注册服务
    ///
    /// `T` 是查找键类型，可以是具体类型或 `dyn Trait`（需要
    /// `Send + Sync` 超 trait）。工厂返回键类型的 `Arc`，按抽象
    /// 注册时 `Arc<C>` 到 `Arc<T>` 的转换发生在工厂内部。
    pub fn register<T, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        let erased: ErasedFactory = Arc::new(move || Box::new(factory()) as ErasedInstance);
        self.push_descriptor(ServiceKey::of::<T>(), lifetime, erased);
        self
    }

    /// 注册一个已经存在的实例为单例
    pub fn register_instance<T>(&mut self, instance: Arc<T>) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register::<T, _>(Lifetime::Singleton, move || instance.clone())
    }

    /// 已加入的注册条目数量（含重复键）
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// 集合是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// 构建服务提供者，消费集合
    #[must_use]
    pub fn build(self) -> ServiceProvider {
        ServiceProvider::from_descriptors(self.descriptors)
    }

    fn push_descriptor(&mut self, key: ServiceKey, lifetime: Lifetime, factory: ErasedFactory) {
        debug!(
            service = key.name,
            lifetime = lifetime.as_str(),
            "加入服务注册"
        );
        self.descriptors.push(ServiceDescriptor {
            key,
            lifetime,
            factory,
        });
    }
}

impl ServiceRegistrar for ServiceCollection {
    fn register_singleton(&mut self, key: ServiceKey, factory: ErasedFactory) {
        self.push_descriptor(key, Lifetime::Singleton, factory);
    }

    fn register_scoped(&mut self, key: ServiceKey, factory: ErasedFactory) {
        self.push_descriptor(key, Lifetime::Scoped, factory);
    }

    fn register_transient(&mut self, key: ServiceKey, factory: ErasedFactory) {
        self.push_descriptor(key, Lifetime::Transient, factory);
    }
}
