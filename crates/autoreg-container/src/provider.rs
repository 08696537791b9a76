//! 服务提供者与作用域

use crate::collection::ServiceDescriptor;
use autoreg_core::{ErasedInstance, Lifetime, ResolveError, ResolveResult, Scope};
use dashmap::DashMap;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// 缓存实例的存储：按键的 `TypeId` 保存类型擦除后的 `Arc<T>`
type InstanceCache = DashMap<TypeId, ErasedInstance>;

struct ProviderInner {
    /// 同键的后一条注册在构建时覆盖前一条
    services: HashMap<TypeId, ServiceDescriptor>,
    /// 单例实例，整个提供者共享
    singletons: InstanceCache,
    /// 根提供者自身充当根作用域，直接从根解析 scoped 服务时缓存在这里
    root_scoped: InstanceCache,
    /// 根作用域标识
    root_scope: Scope,
}

/// 服务提供者
///
/// 构建后的只读解析表面。克隆廉价，所有克隆共享同一份注册
/// 与单例缓存。
#[derive(Clone)]
pub struct ServiceProvider {
    inner: Arc<ProviderInner>,
}

impl ServiceProvider {
    /// 从注册条目构建提供者
    #[must_use]
    pub(crate) fn from_descriptors(descriptors: Vec<ServiceDescriptor>) -> Self {
        let mut services = HashMap::with_capacity(descriptors.len());
        let total = descriptors.len();
        for descriptor in descriptors {
            services.insert(descriptor.key.id, descriptor);
        }

        info!(
            registrations = total,
            services = services.len(),
            "构建服务提供者完成"
        );

        Self {
            inner: Arc::new(ProviderInner {
                services,
                singletons: DashMap::new(),
                root_scoped: DashMap::new(),
                root_scope: Scope::root(),
            }),
        }
    }

    /// 解析服务，未注册时返回 `None`
    #[must_use]
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_with::<T>(&self.inner.root_scoped)
    }

    /// 解析服务，未注册时返回错误
    pub fn resolve<T>(&self) -> ResolveResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.get::<T>().ok_or_else(|| ResolveError::NotRegistered {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// 指定键是否已注册
    #[must_use]
    pub fn is_registered<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.inner.services.contains_key(&TypeId::of::<T>())
    }

    /// 已注册的服务数量（同键注册只计一次）
    #[must_use]
    pub fn service_count(&self) -> usize {
        self.inner.services.len()
    }

    /// 创建新作用域
    #[must_use]
    pub fn create_scope(&self) -> ServiceScope {
        let scope = self.inner.root_scope.child("scope");
        debug!(scope = %scope.name, scope_id = %scope.id, "创建作用域");
        ServiceScope {
            provider: self.clone(),
            scope,
            instances: DashMap::new(),
        }
    }

    /// 按生命周期解析，scoped 服务的实例缓存由调用方给出
    fn resolve_with<T>(&self, scoped_cache: &InstanceCache) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let descriptor = self.inner.services.get(&TypeId::of::<T>())?;

        match descriptor.lifetime {
            Lifetime::Singleton => Self::cached::<T>(&self.inner.singletons, descriptor),
            Lifetime::Scoped => Self::cached::<T>(scoped_cache, descriptor),
            Lifetime::Transient => {
                debug!(service = descriptor.key.name, "创建瞬时实例");
                Self::fresh::<T>(descriptor)
            }
        }
    }

    fn cached<T>(cache: &InstanceCache, descriptor: &ServiceDescriptor) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let entry = cache.entry(descriptor.key.id).or_insert_with(|| {
            debug!(
                service = descriptor.key.name,
                lifetime = descriptor.lifetime.as_str(),
                "创建共享实例"
            );
            (descriptor.factory)()
        });
        entry.value().downcast_ref::<Arc<T>>().cloned()
    }

    fn fresh<T>(descriptor: &ServiceDescriptor) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let instance = (descriptor.factory)();
        instance.downcast::<Arc<T>>().ok().map(|boxed| *boxed)
    }
}

impl std::fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("services", &self.inner.services.len())
            .field("singletons", &self.inner.singletons.len())
            .finish()
    }
}

/// 服务作用域
///
/// scoped 服务在同一作用域内共享实例，单例仍然委托给根提供者，
/// 瞬时服务每次解析都创建新实例。
pub struct ServiceScope {
    provider: ServiceProvider,
    scope: Scope,
    instances: InstanceCache,
}

impl ServiceScope {
    /// 在本作用域内解析服务，未注册时返回 `None`
    #[must_use]
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.provider.resolve_with::<T>(&self.instances)
    }

    /// 在本作用域内解析服务，未注册时返回错误
    pub fn resolve<T>(&self) -> ResolveResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.get::<T>().ok_or_else(|| ResolveError::NotRegistered {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// 作用域标识
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// 所属的根提供者
    #[must_use]
    pub fn provider(&self) -> &ServiceProvider {
        &self.provider
    }
}

impl std::fmt::Debug for ServiceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceScope")
            .field("scope", &self.scope)
            .field("instances", &self.instances.len())
            .finish()
    }
}
