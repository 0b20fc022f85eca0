use super::*;

const DEADLINE: f64 = 1_700_000_900_000.0;

#[test]
fn missing_deadline_is_unknown() {
    assert_eq!(Countdown::at(None, 0.0), Countdown::Unknown);
    assert_eq!(Countdown::at(Some(f64::NAN), 0.0), Countdown::Unknown);
    assert_eq!(Countdown::Unknown.text(), "Payment deadline unknown");
    assert_eq!(Countdown::Unknown.remaining_secs(), None);
}

#[test]
fn fifteen_minutes_left_formats_minutes_and_seconds() {
    let now = DEADLINE - 15.0 * 60_000.0;
    let countdown = Countdown::at(Some(DEADLINE), now);
    assert_eq!(countdown, Countdown::Remaining { minutes: 15, seconds: 0 });
    assert_eq!(countdown.text(), "15 min 0 s left to pay");
}

#[test]
fn partial_seconds_round_down() {
    let countdown = Countdown::at(Some(DEADLINE), DEADLINE - 61_999.0);
    assert_eq!(countdown, Countdown::Remaining { minutes: 1, seconds: 1 });
}

#[test]
fn deadline_reached_is_expired() {
    assert_eq!(Countdown::at(Some(DEADLINE), DEADLINE), Countdown::Expired);
    assert_eq!(Countdown::at(Some(DEADLINE), DEADLINE + 5_000.0), Countdown::Expired);
    assert!(Countdown::Expired.is_expired());
    assert_eq!(Countdown::Expired.text(), "Payment timed out, the order will be cancelled");
}

#[test]
fn countdown_strictly_decreases_each_tick_until_timeout() {
    let tick_ms = 1000.0;
    let mut now = DEADLINE - 125_000.0;
    let mut previous = Countdown::at(Some(DEADLINE), now).remaining_secs().unwrap();
    assert_eq!(previous, 125);

    loop {
        now += tick_ms;
        let countdown = Countdown::at(Some(DEADLINE), now);
        let secs = countdown.remaining_secs().unwrap();
        if countdown.is_expired() {
            assert_eq!(previous, 1, "must count down through every second");
            break;
        }
        assert_eq!(secs, previous - 1, "each tick removes exactly one second");
        previous = secs;
    }

    // Stays expired after the deadline.
    now += tick_ms;
    assert!(Countdown::at(Some(DEADLINE), now).is_expired());
}

#[test]
fn tick_is_one_second() {
    assert_eq!(TICK, std::time::Duration::from_secs(1));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn parse_deadline_needs_browser_clock() {
    assert_eq!(parse_deadline_ms("2025-01-01T12:00:00"), None);
    assert!(now_ms().abs() < f64::EPSILON);
}
