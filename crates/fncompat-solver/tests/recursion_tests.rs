use super::*;

#[test]
fn test_enter_and_leave() {
    let mut guard: RecursionGuard<u32> = RecursionGuard::with_profile(RecursionProfile::SubtypeCheck);
    assert!(guard.enter(1).is_entered());
    assert!(guard.is_visiting(&1));
    assert_eq!(guard.depth(), 1);

    guard.leave(1);
    assert!(!guard.is_visiting(&1));
    assert_eq!(guard.depth(), 0);
    assert_eq!(guard.iterations(), 1);
}

#[test]
fn test_cycle_detected() {
    let mut guard: RecursionGuard<(u32, u32)> = RecursionGuard::new(10, 100);
    assert_eq!(guard.enter((1, 2)), RecursionResult::Entered);
    assert_eq!(guard.enter((1, 2)), RecursionResult::Cycle);
    assert!(guard.enter((1, 2)).is_cycle());
    assert!(!guard.is_exceeded());
    guard.leave((1, 2));
}

#[test]
fn test_depth_exceeded() {
    let mut guard: RecursionGuard<u32> = RecursionGuard::new(2, 100);
    assert!(guard.enter(1).is_entered());
    assert!(guard.enter(2).is_entered());
    assert_eq!(guard.enter(3), RecursionResult::DepthExceeded);
    assert!(guard.is_exceeded());

    guard.leave(2);
    guard.leave(1);
    // Sticky until reset.
    assert!(guard.is_exceeded());
    guard.reset();
    assert!(!guard.is_exceeded());
}

#[test]
fn test_iteration_exceeded() {
    let mut guard: RecursionGuard<u32> = RecursionGuard::new(10, 3);
    for key in 0..3 {
        assert!(guard.enter(key).is_entered());
        guard.leave(key);
    }
    let result = guard.enter(99);
    assert_eq!(result, RecursionResult::IterationExceeded);
    assert!(result.is_exceeded());
}

#[test]
fn test_profile_limits() {
    let profile = RecursionProfile::Custom {
        max_depth: 4,
        max_iterations: 8,
    };
    assert_eq!(profile.max_depth(), 4);
    assert_eq!(profile.max_iterations(), 8);
    assert_eq!(
        RecursionProfile::SubtypeCheck.max_depth(),
        fncompat_common::limits::MAX_SUBTYPE_DEPTH
    );
}

#[test]
fn test_reset_clears_visiting() {
    let mut guard: RecursionGuard<u32> = RecursionGuard::new(10, 100);
    assert!(guard.enter(5).is_entered());
    guard.reset();
    assert_eq!(guard.depth(), 0);
    assert!(!guard.is_visiting(&5));
    assert!(guard.enter(5).is_entered());
    guard.leave(5);
}
