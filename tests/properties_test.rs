/*!
 * Mapping Property Tests
 * Monotonicity and offsets of the priority step function
 */

use proptest::prelude::*;
use rt_priority::{decide, AbstractPriority, HostPolicy, SchedulingDecision};

proptest! {
    #[test]
    fn prop_mapping_is_monotonic(base in 1i32..=95, a in -64i32..64, b in -64i32..64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(decide(base, AbstractPriority(lo)) <= decide(base, AbstractPriority(hi)));
    }

    #[test]
    fn prop_time_critical_is_base_plus_four(base in 1i32..=95, level in 15i32..i32::MAX) {
        prop_assert_eq!(
            decide(base, AbstractPriority(level)),
            SchedulingDecision::realtime(base + 4)
        );
    }

    #[test]
    fn prop_below_lowest_is_idle(base in 1i32..=95, level in i32::MIN..-2) {
        prop_assert_eq!(
            decide(base, AbstractPriority(level)).policy,
            HostPolicy::Idle
        );
    }

    #[test]
    fn prop_realtime_stays_in_host_range(base in 1i32..=95, level in -64i32..64) {
        let decision = decide(base, AbstractPriority(level));
        if decision.policy.is_realtime() {
            prop_assert!(decision.numeric_priority >= 1 && decision.numeric_priority <= 99);
        } else {
            prop_assert_eq!(decision.numeric_priority, 0);
        }
    }

    #[test]
    fn prop_decision_is_deterministic(base in 1i32..=95, level in any::<i32>()) {
        prop_assert_eq!(
            decide(base, AbstractPriority(level)),
            decide(base, AbstractPriority(level))
        );
    }
}

#[test]
fn test_boundaries() {
    let base = 40;
    assert_eq!(
        decide(base, AbstractPriority::HIGHEST),
        SchedulingDecision::realtime(42)
    );
    assert_eq!(
        decide(base, AbstractPriority(AbstractPriority::HIGHEST.0 - 1)),
        SchedulingDecision::realtime(40)
    );
    assert_eq!(
        decide(base, AbstractPriority::NORMAL),
        SchedulingDecision::timeshared(HostPolicy::Normal)
    );
    assert_eq!(
        decide(base, AbstractPriority(AbstractPriority::LOWEST.0 - 1)),
        SchedulingDecision::timeshared(HostPolicy::Idle)
    );
}
