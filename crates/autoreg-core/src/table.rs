//! 全局注册表
//!
//! `#[di_reg]` 宏生成的启动函数向这里提交注册记录。表是只增的，
//! 记录在进程启动阶段写入，之后只读。

use crate::record::RegistrationRecord;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// 全局注册记录表
static REGISTRATION_TABLE: Lazy<RwLock<Vec<RegistrationRecord>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// 提交一条注册记录
///
/// 由宏生成的 `ctor` 启动函数调用，也可以手工提交记录来补充
/// 标注之外的注册。
pub fn submit_record(record: RegistrationRecord) {
    REGISTRATION_TABLE.write().push(record);
}

/// 获取指定模块的全部注册记录
///
/// 按提交顺序返回。未知模块返回空集，不是错误。
#[must_use]
pub fn records_for_module(module: &str) -> Vec<RegistrationRecord> {
    REGISTRATION_TABLE
        .read()
        .iter()
        .filter(|record| record.module == module)
        .cloned()
        .collect()
}

/// 获取所有已提交记录的快照，用于诊断输出
#[must_use]
pub fn all_records() -> Vec<RegistrationRecord> {
    REGISTRATION_TABLE.read().clone()
}

/// 获取出现过标注的模块名称列表（去重，按首次出现顺序）
#[must_use]
pub fn registered_modules() -> Vec<&'static str> {
    let table = REGISTRATION_TABLE.read();
    let mut modules = Vec::new();
    for record in table.iter() {
        if !modules.contains(&record.module) {
            modules.push(record.module);
        }
    }
    modules
}
