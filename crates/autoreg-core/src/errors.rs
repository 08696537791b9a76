//! 错误类型定义

use thiserror::Error;

/// 组件解析错误类型
#[derive(Error, Debug)]
pub enum ResolveError {
    /// 请求的键从未注册
    #[error("服务未注册: {type_name}")]
    NotRegistered {
        /// 请求的键类型名称
        type_name: String,
    },
}

/// 解析结果类型别名
pub type ResolveResult<T> = Result<T, ResolveError>;
