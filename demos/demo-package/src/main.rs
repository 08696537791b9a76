//! # 标注组件自动注册演示
//!
//! 演示完整的注册链路：
//! - 使用 `#[di_reg]` 在编译期声明注册记录
//! - 启动时按模块把标注组件登记到容器
//! - 按生命周期从根提供者和作用域解析实例

use autoreg_container::ServiceCollection;
use autoreg_core::{all_records, register_module, registered_modules};
use autoreg_macros::di_reg;
use std::sync::Arc;
use tracing::info;

/// 问候服务抽象
pub trait Greeter: Send + Sync {
    /// 生成问候语
    fn greet(&self, name: &str) -> String;
}

/// 控制台问候服务，按抽象注册为单例
#[derive(Debug, Default)]
#[di_reg(dyn Greeter, singleton)]
pub struct ConsoleGreeter;

impl Greeter for ConsoleGreeter {
    fn greet(&self, name: &str) -> String {
        format!("你好, {name}!")
    }
}

/// 每个作用域一份的会话上下文
#[derive(Debug, Default)]
#[di_reg(scoped)]
pub struct SessionContext;

/// 每次解析都新建的请求跟踪器（省略生命周期，默认 transient）
#[derive(Debug, Default)]
#[di_reg]
pub struct RequestTracker;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,autoreg_core=debug,autoreg_container=debug")
            }),
        )
        .init();

    info!(
        "出现过标注的模块: {:?}，共 {} 条注册记录",
        registered_modules(),
        all_records().len()
    );

    let mut services = ServiceCollection::new();
    let applied = register_module(&mut services, env!("CARGO_CRATE_NAME"));
    info!("登记了 {applied} 条标注注册");

    let provider = services.build();

    // 单例：根提供者与作用域解析到同一个实例
    let greeter1 = provider.resolve::<dyn Greeter>()?;
    let greeter2 = provider.resolve::<dyn Greeter>()?;
    info!("{}", greeter1.greet("世界"));
    info!("单例共享同一实例: {}", Arc::ptr_eq(&greeter1, &greeter2));

    // 作用域：同一作用域内共享，不同作用域各一份
    let scope_a = provider.create_scope();
    let scope_b = provider.create_scope();
    let session_a1 = scope_a.get::<SessionContext>().expect("已注册");
    let session_a2 = scope_a.get::<SessionContext>().expect("已注册");
    let session_b = scope_b.get::<SessionContext>().expect("已注册");
    info!(
        "作用域 {} 内共享: {}, 跨作用域独立: {}",
        scope_a.scope().name,
        Arc::ptr_eq(&session_a1, &session_a2),
        !Arc::ptr_eq(&session_a1, &session_b),
    );

    // 瞬时：每次解析都是新实例
    let tracker1 = provider.get::<RequestTracker>().expect("已注册");
    let tracker2 = provider.get::<RequestTracker>().expect("已注册");
    info!("瞬时实例互不相同: {}", !Arc::ptr_eq(&tracker1, &tracker2));

    Ok(())
}
