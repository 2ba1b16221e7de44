use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn linear_ramp_over_duration() {
    let t0 = Instant::now();
    let tw = Tween::new(t0, ms(4000), 0.0, 1.0, Ease::Linear);
    assert_eq!(tw.sample(t0), TweenSample::Active(0.0));
    assert_eq!(tw.sample(t0 + ms(1000)), TweenSample::Active(0.25));
    assert_eq!(tw.sample(t0 + ms(4000)), TweenSample::Done(1.0));
    assert_eq!(tw.sample(t0 + ms(9000)), TweenSample::Done(1.0));
    assert_eq!(tw.end(), t0 + ms(4000));
}

#[test]
fn delayed_start_is_pending() {
    let t0 = Instant::now();
    let tw = Tween::new(t0 + ms(2000), ms(4000), 0.0, 1.0, Ease::Linear);
    assert_eq!(tw.sample(t0), TweenSample::Pending);
    assert_eq!(tw.sample(t0 + ms(1999)), TweenSample::Pending);
    assert_eq!(tw.sample(t0 + ms(2000)), TweenSample::Active(0.0));
    assert_eq!(tw.sample(t0 + ms(4000)), TweenSample::Active(0.5));
    assert_eq!(tw.start(), t0 + ms(2000));
}

#[test]
fn zero_duration_jumps_to_end() {
    let t0 = Instant::now();
    let tw = Tween::new(t0, Duration::ZERO, 0.0, 1.0, Ease::Linear);
    assert_eq!(tw.sample(t0), TweenSample::Done(1.0));
}

#[test]
fn easing_and_reverse_range() {
    let t0 = Instant::now();
    let tw = Tween::new(t0, ms(1000), 1.0, 0.0, Ease::InQuad);
    assert_eq!(tw.sample(t0 + ms(500)), TweenSample::Active(0.75));
}
