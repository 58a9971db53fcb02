use backtrace_error::{backtrace_error, raise, BacktraceError, UNSPECIFIED_CONDITION};

#[test]
fn expression_macro_builds_carrier_with_default_condition() {
    let err = backtrace_error!("attempt {} failed", 3);
    assert_eq!(err.condition(), UNSPECIFIED_CONDITION);
    assert_eq!(err.message(), "attempt 3 failed");
    assert!(!err.backtrace().is_empty());
}

#[test]
fn expression_macro_accepts_explicit_condition() {
    let missing = "config.toml";
    let err = backtrace_error!(condition: "MissingFile", "cannot open {missing}");
    assert_eq!(err.condition(), "MissingFile");
    assert_eq!(err.message(), "cannot open config.toml");
}

#[test]
fn raise_returns_err_from_the_enclosing_function() {
    fn check(x: i32) -> Result<i32, BacktraceError> {
        if x <= 0 {
            raise!(condition: "BadInput", "x must be positive, got {x}");
        }
        Ok(x)
    }

    assert_eq!(check(5).unwrap(), 5);
    let err = check(-1).unwrap_err();
    assert_eq!(err.condition(), "BadInput");
    assert_eq!(err.message(), "x must be positive, got -1");
}

#[test]
fn raise_converts_into_boxed_errors() {
    fn load() -> Result<(), Box<dyn std::error::Error>> {
        raise!("nothing to load");
    }

    let err = load().unwrap_err();
    assert!(err.to_string().contains("nothing to load"));
}
