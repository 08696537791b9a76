use autoreg_core::{records_for_module, ServiceKey};
use autoreg_macros::di_reg;

trait Probe: Send + Sync {}

#[derive(Debug, Default)]
#[di_reg(dyn Probe, singleton)]
#[di_reg(transient)]
struct StackedService;

impl Probe for StackedService {}

fn main() {
    let records = records_for_module(env!("CARGO_CRATE_NAME"));
    let count = records
        .iter()
        .filter(|record| record.concrete == ServiceKey::of::<StackedService>())
        .count();
    assert_eq!(count, 2);
}
