//! # Autoreg Container
//!
//! 依赖注入容器协作方：注册器消费的注册表面加上按生命周期解析
//! 组件的服务提供者。
//!
//! ## 核心组件
//!
//! - [`ServiceCollection`] - 可变的注册表面，实现 `ServiceRegistrar`
//! - [`ServiceProvider`] - 构建后的只读解析表面
//! - [`ServiceScope`] - 作用域实例共享的解析表面

pub mod collection;
pub mod provider;

pub use collection::*;
pub use provider::*;
