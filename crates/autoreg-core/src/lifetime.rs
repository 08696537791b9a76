//! 组件生命周期与作用域

/// 组件生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// 单例模式 - 整个应用生命周期内只创建一个实例
    Singleton,
    /// 作用域模式 - 在同一作用域内共享实例
    Scoped,
    /// 瞬时模式 - 每次解析都创建新实例
    Transient,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::Transient
    }
}

impl Lifetime {
    /// 生命周期的字符串表示，用于日志输出
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Scoped => "scoped",
            Self::Transient => "transient",
        }
    }
}

/// 组件作用域
///
/// 作用域实例共享的身份标识。每个作用域拥有唯一的 id，
/// 名称按 `parent.child` 形式层级拼接。
#[derive(Debug, Clone)]
pub struct Scope {
    /// 作用域唯一标识
    pub id: uuid::Uuid,
    /// 作用域名称
    pub name: String,
    /// 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Scope {
    /// 创建新作用域
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            created_at: chrono::Utc::now(),
        }
    }

    /// 创建根作用域
    #[must_use]
    pub fn root() -> Self {
        Self::new("root")
    }

    /// 创建子作用域
    pub fn child(&self, name: impl Into<String>) -> Self {
        Self::new(format!("{}.{}", self.name, name.into()))
    }
}
