//! Integration tests for Error types

use gsat_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn unguarded_rule_is_discardable() {
    let err = Error::unguarded_rule("R(x) ∧ S(y) → T(x, y)");
    assert!(matches!(err.kind, ErrorKind::UnguardedRule { .. }));
    assert!(err.is_discardable());
    assert!(err.to_string().contains("unguarded"));
}

#[test]
fn contract_violations_are_not_discardable() {
    assert!(!Error::malformed_input("function term").is_discardable());
    assert!(!Error::arity_mismatch("R", 2, 1).is_discardable());
    assert!(!Error::internal("oops").is_discardable());
}

#[test]
fn arity_mismatch_names_symbol() {
    let err = Error::arity_mismatch("Parent", 2, 3);
    let ErrorKind::ArityMismatch {
        symbol,
        expected,
        actual,
    } = &err.kind
    else {
        panic!("expected arity mismatch, got {:?}", err.kind);
    };
    assert_eq!(symbol, "Parent");
    assert_eq!((*expected, *actual), (2, 3));
}

#[test]
fn context_renders_frames() {
    let context = ErrorContext::new()
        .with_input_index(2)
        .with_frame("check_arities")
        .with_frame("run");
    let rendered = context.to_string();
    assert!(rendered.contains("#2"));
    assert!(rendered.contains("in check_arities"));
    assert!(rendered.contains("in run"));
}
