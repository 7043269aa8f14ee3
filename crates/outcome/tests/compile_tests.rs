//! Guarantees that only hold because certain code must not compile.

#[test]
fn test_into_outcome_cannot_be_implemented_downstream() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/foreign_into_outcome.rs");
}

#[test]
fn test_wrap_rejects_async_closure() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/wrap_async_closure.rs");
}
