//! Centralized integration tests for the attribute -> registrar -> container path

use autoreg_container::{ServiceCollection, ServiceProvider};
use autoreg_core::{register_module, register_modules};
use autoreg_macros::di_reg;
use std::sync::Arc;

/// 按抽象注册的服务接口
pub trait ServiceInterface: Send + Sync {
    fn describe(&self) -> &'static str;
}

#[derive(Debug, Default)]
#[di_reg(dyn ServiceInterface, singleton)]
pub struct ServiceByInterface;

impl ServiceInterface for ServiceByInterface {
    fn describe(&self) -> &'static str {
        "service-by-interface"
    }
}

#[derive(Debug, Default)]
#[di_reg(singleton)]
pub struct SingletonService;

#[derive(Debug, Default)]
#[di_reg(transient)]
pub struct TransientService;

#[derive(Debug, Default)]
#[di_reg(scoped)]
pub struct ScopedService;

/// 没有任何标注的类型，必须保持未注册
#[derive(Debug, Default)]
pub struct UnmarkedService;

/// 双重标注的服务接口
pub trait Gauge: Send + Sync {
    fn read(&self) -> u64;
}

// 同一类型叠加两条标注：按抽象的单例 + 按具体类型的瞬时
#[derive(Debug, Default)]
#[di_reg(dyn Gauge, singleton)]
#[di_reg(transient)]
pub struct DualService;

impl Gauge for DualService {
    fn read(&self) -> u64 {
        0
    }
}

fn build_provider() -> ServiceProvider {
    let mut services = ServiceCollection::new();
    register_module(&mut services, env!("CARGO_CRATE_NAME"));
    services.build()
}

#[test]
fn singleton_resolved_twice_returns_same_instance() {
    let provider = build_provider();
    let scope = provider.create_scope();

    let first = provider.get::<SingletonService>().unwrap();
    let second = provider.resolve::<SingletonService>().unwrap();
    let third = scope.resolve::<SingletonService>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&second, &third));
}

#[test]
fn singleton_by_interface_is_shared_across_scopes() {
    let provider = build_provider();
    let scope = provider.create_scope();

    let first = provider.get::<dyn ServiceInterface>().unwrap();
    let second = provider.get::<dyn ServiceInterface>().unwrap();
    let third = scope.get::<dyn ServiceInterface>().unwrap();

    assert_eq!(first.describe(), "service-by-interface");
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&second, &third));
}

#[test]
fn registered_by_interface_is_not_resolvable_by_concrete_type() {
    let provider = build_provider();
    let scope = provider.create_scope();

    // 只按抽象注册时，具体类型自身不是查找键
    assert!(provider.get::<ServiceByInterface>().is_none());
    assert!(scope.get::<ServiceByInterface>().is_none());
}

#[test]
fn transient_resolutions_are_pairwise_distinct() {
    let provider = build_provider();
    let scope = provider.create_scope();

    let first = provider.get::<TransientService>().unwrap();
    let second = provider.get::<TransientService>().unwrap();
    let third = scope.get::<TransientService>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &third));
    assert!(!Arc::ptr_eq(&second, &third));
}

#[test]
fn scoped_service_is_shared_within_one_scope_only() {
    let provider = build_provider();
    let scope1 = provider.create_scope();
    let scope2 = provider.create_scope();

    let first = scope1.get::<ScopedService>().unwrap();
    let second = scope1.get::<ScopedService>().unwrap();
    let other = scope2.get::<ScopedService>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &other));
}

#[test]
fn unmarked_type_is_never_registered() {
    let provider = build_provider();
    let scope = provider.create_scope();

    assert!(!provider.is_registered::<UnmarkedService>());
    assert!(provider.get::<UnmarkedService>().is_none());
    assert!(scope.get::<UnmarkedService>().is_none());
}

#[test]
fn dual_marker_registers_under_both_keys() {
    let provider = build_provider();

    // 抽象键：单例
    let gauge1 = provider.get::<dyn Gauge>().unwrap();
    let gauge2 = provider.get::<dyn Gauge>().unwrap();
    assert!(Arc::ptr_eq(&gauge1, &gauge2));

    // 具体类型键：瞬时
    let concrete1 = provider.get::<DualService>().unwrap();
    let concrete2 = provider.get::<DualService>().unwrap();
    assert!(!Arc::ptr_eq(&concrete1, &concrete2));
}

#[test]
fn empty_module_list_registers_nothing() {
    let mut services = ServiceCollection::new();
    assert_eq!(register_modules(&mut services, &[]), 0);
    assert!(services.is_empty());
}

#[test]
fn registration_count_matches_marker_count() {
    let mut services = ServiceCollection::new();
    let applied = register_module(&mut services, env!("CARGO_CRATE_NAME"));

    // 本文件共 6 条标注：4 个单标注类型 + DualService 的 2 条
    assert_eq!(applied, 6);
    assert_eq!(services.len(), 6);

    // 6 条标注使用 6 个互不相同的查找键
    let provider = services.build();
    assert_eq!(provider.service_count(), 6);

    // 作用域共享同一个根提供者
    let scope = provider.create_scope();
    assert_eq!(scope.provider().service_count(), 6);
}

#[test]
fn registering_twice_appends_duplicate_entries() {
    let mut services = ServiceCollection::new();
    let first = register_module(&mut services, env!("CARGO_CRATE_NAME"));
    let second = register_module(&mut services, env!("CARGO_CRATE_NAME"));

    assert_eq!(first, second);
    assert_eq!(services.len(), first * 2);

    // 重复键由容器按后注册优先处理，解析行为保持不变
    let provider = services.build();
    let one = provider.get::<dyn ServiceInterface>().unwrap();
    let two = provider.get::<dyn ServiceInterface>().unwrap();
    assert!(Arc::ptr_eq(&one, &two));
}
