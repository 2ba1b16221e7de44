use super::*;
use crate::geometry::trim::arc_length;

fn zigzag() -> PathOutline {
    PathOutline::new(BezPath::from_svg("M0,0 L40,0 L40,30 C60,50 80,10 100,30").unwrap())
}

#[test]
fn prefix_length_matches_phase() {
    let mut o = zigzag();
    let total = o.arc_length();
    for i in 0..=10 {
        let phase = f64::from(i) / 10.0;
        o.update_for_phase(phase, 10.0);
        let got = arc_length(o.render_prefix());
        assert!(
            (got - phase * total).abs() < 0.05,
            "phase {phase}: {got} vs {}",
            phase * total
        );
    }
}

#[test]
fn phase_one_is_exactly_the_full_path() {
    let mut o = zigzag();
    o.update_for_phase(1.0, 10.0);
    assert_eq!(o.render_prefix().elements(), o.path().elements());
    assert_eq!(arc_length(o.render_prefix()), o.arc_length());
}

#[test]
fn phase_zero_is_empty_and_invisible() {
    let mut o = zigzag();
    o.update_for_phase(0.7, 10.0);
    o.update_for_phase(0.0, 10.0);
    assert!(o.render_prefix().elements().is_empty());
    assert_eq!(o.stroke().alpha_byte(), 0);
}

#[test]
fn zero_length_outline_never_reveals() {
    let mut o = PathOutline::new(BezPath::from_svg("M5,5").unwrap());
    assert_eq!(o.arc_length(), 0.0);
    for phase in [0.0, 0.5, 1.0] {
        o.update_for_phase(phase, 1.0);
        assert!(o.render_prefix().elements().is_empty());
    }
}

#[test]
fn out_of_range_phase_is_clamped() {
    let mut o = zigzag();
    o.update_for_phase(7.0, 1.0);
    assert_eq!(o.render_prefix().elements(), o.path().elements());
    o.update_for_phase(-2.0, 1.0);
    assert!(o.render_prefix().elements().is_empty());
}

#[test]
fn stroke_alpha_ramps_with_fade_factor() {
    assert_eq!(stroke_alpha_fraction(0.05, 10.0), 0.5);
    assert_eq!(stroke_alpha_fraction(0.5, 10.0), 1.0);
    assert_eq!(stroke_alpha_fraction(0.5, 1.0), 0.5);

    let mut o = zigzag();
    o.update_for_phase(0.05, 10.0);
    assert_eq!(o.stroke().alpha_byte(), 127);
}

#[test]
fn precomputed_length_is_sanitized() {
    let path = BezPath::from_svg("M0,0 L1,0").unwrap();
    assert_eq!(PathOutline::with_arc_length(path.clone(), -3.0).arc_length(), 0.0);
    assert_eq!(PathOutline::with_arc_length(path.clone(), f64::NAN).arc_length(), 0.0);
    assert_eq!(PathOutline::with_arc_length(path, 2.5).arc_length(), 2.5);
}

#[test]
fn bounds_and_stroke_are_recorded() {
    let o = zigzag().with_stroke(Argb(0xff12_3456), 3.0);
    assert_eq!(o.stroke().color, Argb(0xff12_3456));
    assert_eq!(o.stroke().width, 3.0);
    assert_eq!(o.bounds().x0, 0.0);
    assert_eq!(o.bounds().x1, 100.0);
    assert_eq!(PathOutline::new(BezPath::new()).bounds(), Rect::ZERO);
}
