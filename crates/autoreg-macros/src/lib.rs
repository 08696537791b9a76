//! # Autoreg Macros
//!
//! 这个 crate 提供了用于自动组件注册的 `#[di_reg]` 标注宏。
//!
//! 被标注的类型在程序启动时向全局注册表提交一条注册记录，
//! 之后由 `autoreg_core::register_modules` 统一登记到容器。
//!
//! ## 使用示例
//!
//! ```ignore
//! use autoreg_macros::di_reg;
//!
//! pub trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! // 按抽象注册为单例
//! #[derive(Debug, Default)]
//! #[di_reg(dyn Greeter, singleton)]
//! pub struct ConsoleGreeter;
//!
//! impl Greeter for ConsoleGreeter {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! // 按具体类型注册，省略生命周期时默认 transient
//! #[derive(Debug, Default)]
//! #[di_reg]
//! pub struct RequestCounter;
//! ```

use proc_macro::TokenStream;

mod di_reg;

/// 自动组件注册标注
///
/// 为结构体声明一条注册记录：可选的抽象类型（`dyn Trait` 形式，
/// trait 需要 `Send + Sync` 超 trait）加上生命周期。省略抽象时按
/// 具体类型自身注册，省略生命周期时默认 `transient`。
///
/// 同一结构体可以叠加多个 `#[di_reg]` 标注，每个标注产生一条独立
/// 的注册记录。标注不随类型组合传播，每个类型必须单独标注。
///
/// 被标注的类型必须实现 `Default`，实例由容器按 `Default` 构造。
/// 宏本身不校验具体类型是否实现了给定的抽象 trait，不满足时由
/// 生成代码处的正常编译错误暴露。
///
/// # 参数
///
/// - `dyn SomeTrait` - 注册使用的抽象类型（可选）
/// - `singleton` / `scoped` / `transient` - 生命周期（默认 `transient`）
///
/// # 示例
///
/// ```ignore
/// #[derive(Debug, Default)]
/// #[di_reg(dyn Repository, singleton)]
/// #[di_reg(scoped)]
/// pub struct PgRepository;
/// ```
#[proc_macro_attribute]
pub fn di_reg(args: TokenStream, input: TokenStream) -> TokenStream {
    di_reg::di_reg_impl(args, input)
}
