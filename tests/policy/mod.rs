use std::sync::Arc;
use std::thread;

use backtrace_error::{BacktraceError, CapturePolicy, CaptureStrategy};

#[test]
fn defaults_follow_build_profile() {
    let policy = CapturePolicy::new();
    assert_eq!(policy.is_enabled(), cfg!(debug_assertions));
    assert_eq!(policy.strategy(), CaptureStrategy::NativeRuntime);
}

#[test]
fn toggle_is_observable() {
    let policy = CapturePolicy::new();
    policy.set_enabled(true);
    assert!(policy.is_enabled());
    policy.set_enabled(false);
    assert!(!policy.is_enabled());
}

#[test]
fn native_runtime_is_always_supported() {
    assert!(CaptureStrategy::NativeRuntime.is_supported());
    assert!(CaptureStrategy::supported().contains(&CaptureStrategy::NativeRuntime));
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
#[test]
fn unsupported_strategy_is_rejected_and_leaves_state_unchanged() {
    use backtrace_error::PolicyError;

    let policy = CapturePolicy::new();
    let before = policy.strategy();

    let rejection = policy
        .set_strategy(CaptureStrategy::ExternalDebugger)
        .unwrap_err();
    match rejection {
        PolicyError::UnsupportedStrategy { strategy, platform } => {
            assert_eq!(strategy, CaptureStrategy::ExternalDebugger);
            assert_eq!(platform, std::env::consts::OS);
        }
    }
    assert_eq!(policy.strategy(), before);

    let rendered = rejection.to_string();
    assert!(rendered.contains("ExternalDebugger"));
    assert!(rendered.contains(std::env::consts::OS));
}

#[test]
fn policy_change_applies_to_next_capture_only() {
    let policy = CapturePolicy::new();
    policy.set_enabled(false);
    let disabled_err = BacktraceError::with_policy(&policy, "Test", "before toggle");

    policy.set_enabled(true);
    let enabled_err = BacktraceError::with_policy(&policy, "Test", "after toggle");

    // Not retroactive: the earlier carrier keeps its sentinel.
    assert_eq!(disabled_err.backtrace(), backtrace_error::DISABLED_SENTINEL);
    assert!(enabled_err.backtrace().starts_with("Obtained "));
}

#[test]
fn concurrent_strategy_access_never_tears() {
    let policy = Arc::new(CapturePolicy::new());
    policy.set_enabled(true);

    let writer = {
        let policy = Arc::clone(&policy);
        thread::spawn(move || {
            for _ in 0..500 {
                for &strategy in CaptureStrategy::supported() {
                    policy.set_strategy(strategy).expect("supported strategy");
                }
            }
        })
    };

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || {
                for _ in 0..500 {
                    let strategy = policy.strategy();
                    assert!(
                        CaptureStrategy::supported().contains(&strategy),
                        "torn strategy read: {strategy}"
                    );
                }
            })
        })
        .collect();

    writer.join().expect("writer thread");
    for reader in readers {
        reader.join().expect("reader thread");
    }
}

#[test]
fn capture_racing_with_toggle_uses_one_consistent_state() {
    let policy = Arc::new(CapturePolicy::new());
    policy.set_enabled(true);

    let toggler = {
        let policy = Arc::clone(&policy);
        thread::spawn(move || {
            for round in 0..200 {
                policy.set_enabled(round % 2 == 0);
            }
        })
    };

    for _ in 0..50 {
        let err = BacktraceError::with_policy(&policy, "Test", "racing capture");
        let text = err.backtrace();
        assert!(
            text == backtrace_error::DISABLED_SENTINEL || text.starts_with("Obtained "),
            "capture mixed two policy states: {text}"
        );
    }

    toggler.join().expect("toggler thread");
}
