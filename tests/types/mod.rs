use backtrace_error::{BacktraceError, CapturePolicy, DISABLED_SENTINEL, UNSPECIFIED_CONDITION};

fn disabled_policy() -> CapturePolicy {
    let policy = CapturePolicy::new();
    policy.set_enabled(false);
    policy
}

fn checked_divide(
    policy: &CapturePolicy,
    numerator: i32,
    denominator: i32,
) -> Result<i32, BacktraceError> {
    if denominator == 0 {
        return Err(BacktraceError::with_policy(
            policy,
            "BadInput",
            "x must be positive",
        ));
    }
    Ok(numerator / denominator)
}

#[test]
fn raised_and_caught_carrier_exposes_all_three_fields() {
    let policy = disabled_policy();
    let err = checked_divide(&policy, 1, 0).unwrap_err();

    assert_eq!(err.condition(), "BadInput");
    assert_eq!(err.message(), "x must be positive");
    assert_eq!(err.backtrace(), DISABLED_SENTINEL);
}

#[test]
fn single_argument_constructor_uses_unspecified_condition() {
    let policy = disabled_policy();
    let err = BacktraceError::with_policy(&policy, UNSPECIFIED_CONDITION, "just a message");
    assert_eq!(err.condition(), UNSPECIFIED_CONDITION);

    // The global-policy form defaults the same way.
    let err = BacktraceError::new("just a message");
    assert_eq!(err.condition(), UNSPECIFIED_CONDITION);
}

#[test]
fn display_combines_condition_and_message() {
    let policy = disabled_policy();
    let err = BacktraceError::with_policy(&policy, "Timeout", "backend timed out");
    assert_eq!(err.to_string(), "Timeout: backend timed out");
}

#[test]
fn carrier_is_a_std_error() {
    fn describe(error: &dyn std::error::Error) -> String {
        error.to_string()
    }

    let policy = disabled_policy();
    let err = BacktraceError::with_policy(&policy, "Timeout", "backend timed out");
    assert_eq!(describe(&err), "Timeout: backend timed out");

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("Timeout"));
}

#[test]
fn clones_compare_equal() {
    let policy = disabled_policy();
    let err = BacktraceError::with_policy(&policy, "Timeout", "backend timed out");
    assert_eq!(err.clone(), err);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_preserves_all_fields() {
    let policy = disabled_policy();
    let err = BacktraceError::with_policy(&policy, "BadInput", "x must be positive");

    let json = serde_json::to_string(&err).unwrap();
    let restored: BacktraceError = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, err);
    assert_eq!(restored.backtrace(), DISABLED_SENTINEL);
}

#[cfg(feature = "serde")]
#[test]
fn strategy_serializes_by_variant_name() {
    use backtrace_error::CaptureStrategy;

    let json = serde_json::to_string(&CaptureStrategy::NativeRuntime).unwrap();
    assert_eq!(json, "\"NativeRuntime\"");
}
