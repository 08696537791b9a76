//! trybuild UI tests for autoreg_macros

#[test]
fn trybuild_di_reg() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/ok_marker.rs");
    t.pass("tests/trybuild/ok_stacked_markers.rs");
}
