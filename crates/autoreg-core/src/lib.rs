//! # Autoreg Core
//!
//! 这个 crate 提供了标注驱动组件注册的核心类型与注册器。
//!
//! ## 核心组件
//!
//! - [`Lifetime`] - 组件生命周期枚举
//! - [`RegistrationRecord`] - 编译时生成的注册记录
//! - [`ServiceRegistrar`] - 容器注册表面抽象
//! - [`register_modules`] - 按模块批量注册标注组件
//!
//! ## 设计原则
//!
//! - 以编译时生成的注册表代替运行时反射扫描
//! - 生命周期为封闭枚举，所有分发点穷尽匹配
//! - 标注不随类型组合传播，每个类型必须单独标注

pub mod errors;
pub mod lifetime;
pub mod record;
pub mod registrar;
pub mod table;

pub use errors::*;
pub use lifetime::*;
pub use record::*;
pub use registrar::*;
pub use table::*;
