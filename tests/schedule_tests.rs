//! Integration tests for ScheduleEvaluator

use lamp_engine::{
    ClockReading, LampError, LampMode, ScheduleConfig, ScheduleEvaluator, ScheduledTransition,
    WakeOrigin,
};

fn at(hour: u8, minute: u8) -> ClockReading {
    ClockReading::new(hour, minute)
}

fn sleep_check(
    evaluator: &mut ScheduleEvaluator,
    now: ClockReading,
) -> Option<ScheduledTransition> {
    evaluator.evaluate(now, LampMode::Off, 0, &ScheduleConfig::default())
}

#[test]
fn auto_sleep_fires_once_per_minute_when_ticked_every_second() {
    let mut evaluator = ScheduleEvaluator::new();

    // 19:59:58 through 20:00:02, one sample per second, mode stays Off
    let samples = [at(19, 59), at(19, 59), at(20, 0), at(20, 0), at(20, 0)];
    let fired: Vec<_> = samples
        .iter()
        .map(|now| sleep_check(&mut evaluator, *now))
        .collect();

    assert_eq!(
        fired,
        [None, None, Some(ScheduledTransition::AutoSleep), None, None]
    );
}

#[test]
fn rules_follow_priority_by_mode() {
    let config = ScheduleConfig {
        wake_hour: 20,
        wake_minute: 0,
        ..ScheduleConfig::default()
    };

    let mut evaluator = ScheduleEvaluator::new();
    assert_eq!(
        evaluator.evaluate(at(20, 0), LampMode::Off, 0, &config),
        Some(ScheduledTransition::AutoSleep)
    );

    let mut evaluator = ScheduleEvaluator::new();
    assert_eq!(
        evaluator.evaluate(at(20, 0), LampMode::Night, 0, &config),
        Some(ScheduledTransition::BeginWaking)
    );

    let mut evaluator = ScheduleEvaluator::new();
    assert_eq!(evaluator.evaluate(at(20, 0), LampMode::Awake, 0, &config), None);
}

#[test]
fn one_rule_per_minute_even_when_mode_changes() {
    let config = ScheduleConfig {
        wake_hour: 20,
        wake_minute: 0,
        ..ScheduleConfig::default()
    };
    let mut evaluator = ScheduleEvaluator::new();

    assert_eq!(
        evaluator.evaluate(at(20, 0), LampMode::Off, 0, &config),
        Some(ScheduledTransition::AutoSleep)
    );
    assert_eq!(evaluator.evaluate(at(20, 0), LampMode::Night, 0, &config), None);
}

#[test]
fn waking_finishes_after_wake_duration_of_monotonic_time() {
    let config = ScheduleConfig::default();
    let mut evaluator = ScheduleEvaluator::new();
    let mode = LampMode::Waking {
        origin: WakeOrigin::Night,
    };

    assert_eq!(evaluator.evaluate(at(6, 0), mode, 0, &config), None);
    assert_eq!(evaluator.evaluate(at(7, 0), mode, 3_599_999, &config), None);
    assert_eq!(
        evaluator.evaluate(at(6, 59), mode, 3_600_000, &config),
        Some(ScheduledTransition::FinishWaking)
    );
}

#[test]
fn nap_duration_is_independent_of_the_wall_clock() {
    let config = ScheduleConfig::default();
    let mut evaluator = ScheduleEvaluator::new();
    let mode = LampMode::Waking {
        origin: WakeOrigin::Nap,
    };

    // Started at 23:55:59; the clock reads 00:10 after 14m01s.
    assert_eq!(evaluator.evaluate(at(0, 10), mode, 841_000, &config), None);
    assert_eq!(
        evaluator.evaluate(at(0, 11), mode, 900_000, &config),
        Some(ScheduledTransition::FinishWaking)
    );
}

#[test]
fn regression_does_not_replay_a_fired_minute() {
    let mut evaluator = ScheduleEvaluator::new();

    assert_eq!(
        sleep_check(&mut evaluator, at(20, 0)),
        Some(ScheduledTransition::AutoSleep)
    );
    assert_eq!(sleep_check(&mut evaluator, at(20, 1)), None);
    assert_eq!(evaluator.take_regression(), None);

    // Clock steps back two minutes.
    assert_eq!(sleep_check(&mut evaluator, at(19, 59)), None);
    assert_eq!(
        evaluator.take_regression(),
        Some(LampError::ClockRegression {
            from: at(20, 1),
            to: at(19, 59),
        })
    );
    assert_eq!(evaluator.take_regression(), None);

    assert_eq!(sleep_check(&mut evaluator, at(20, 0)), None);
    assert!(evaluator.is_claimed(at(20, 0)));
    assert_eq!(sleep_check(&mut evaluator, at(20, 1)), None);
}

#[test]
fn regression_does_not_block_minutes_that_never_fired() {
    let config = ScheduleConfig {
        auto_sleep_minute: 3,
        ..ScheduleConfig::default()
    };
    let mut evaluator = ScheduleEvaluator::new();

    evaluator.evaluate(at(20, 10), LampMode::Off, 0, &config);
    evaluator.evaluate(at(20, 1), LampMode::Off, 0, &config);
    assert!(evaluator.take_regression().is_some());

    assert_eq!(evaluator.evaluate(at(20, 2), LampMode::Off, 0, &config), None);
    assert_eq!(
        evaluator.evaluate(at(20, 3), LampMode::Off, 0, &config),
        Some(ScheduledTransition::AutoSleep)
    );
}

#[test]
fn forward_jump_past_half_a_day_does_not_block_rules() {
    let mut evaluator = ScheduleEvaluator::new();

    // Boot clock near midnight, then corrected to the evening.
    assert_eq!(sleep_check(&mut evaluator, at(0, 5)), None);
    assert_eq!(sleep_check(&mut evaluator, at(19, 59)), None);
    assert_eq!(
        sleep_check(&mut evaluator, at(20, 0)),
        Some(ScheduledTransition::AutoSleep)
    );
}

#[test]
fn fired_minute_fires_again_the_next_day() {
    let mut evaluator = ScheduleEvaluator::new();
    assert_eq!(
        sleep_check(&mut evaluator, at(20, 0)),
        Some(ScheduledTransition::AutoSleep)
    );

    for hour in [22, 0, 2, 4, 6, 8, 10, 12, 14, 16, 18] {
        assert_eq!(sleep_check(&mut evaluator, at(hour, 0)), None);
    }
    assert_eq!(
        sleep_check(&mut evaluator, at(20, 0)),
        Some(ScheduledTransition::AutoSleep)
    );
    assert_eq!(evaluator.take_regression(), None);
}

#[test]
fn midnight_rollover_is_not_a_regression() {
    let config = ScheduleConfig::default();
    let mut evaluator = ScheduleEvaluator::new();
    evaluator.evaluate(at(23, 59), LampMode::Night, 0, &config);
    evaluator.evaluate(at(0, 0), LampMode::Night, 0, &config);
    assert_eq!(evaluator.take_regression(), None);
}
