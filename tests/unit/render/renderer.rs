use super::*;
use crate::foundation::core::BezPath;
use crate::geometry::outline::PathOutline;
use crate::render::recording::{DrawCmd, RecordingTarget};

fn outline(d: &str) -> PathOutline {
    PathOutline::new(BezPath::from_svg(d).unwrap()).with_stroke(Argb(0xff10_2030), 2.5)
}

#[test]
fn fill_then_stroke_in_list_order() {
    let state = RevealState::new(0.0, 10.0);
    state.install_paths(vec![outline("M0,0 L10,0"), outline("M0,5 L20,5")]);
    state.set_phase(0.05);
    state.set_fill_alpha(0.5);

    let mut rec = RecordingTarget::new();
    let drawn = Renderer::new(Argb(0xff80_8080)).draw(&mut rec, &state);
    assert_eq!(drawn, 2);

    let cmds = rec.commands();
    assert_eq!(cmds.len(), 5);
    assert_eq!(cmds[0], DrawCmd::SetTransform(Affine::IDENTITY));

    let DrawCmd::Fill { path, rgba } = &cmds[1] else {
        panic!("expected fill, got {:?}", cmds[1]);
    };
    assert_eq!(path.elements(), BezPath::from_svg("M0,0 L10,0").unwrap().elements());
    assert_eq!(*rgba, [0x80, 0x80, 0x80, 127]);

    let DrawCmd::Stroke { path, width, rgba } = &cmds[2] else {
        panic!("expected stroke, got {:?}", cmds[2]);
    };
    assert_eq!(*width, 2.5);
    assert_eq!(*rgba, [0x10, 0x20, 0x30, 127]);
    assert_eq!(path.elements().len(), 2);

    assert!(matches!(&cmds[3], DrawCmd::Fill { path, .. } if path.elements()[0] == kurbo::PathEl::MoveTo((0.0, 5.0).into())));
    assert!(matches!(&cmds[4], DrawCmd::Stroke { .. }));
}

#[test]
fn stroke_alpha_saturates_and_fill_starts_invisible() {
    let state = RevealState::new(0.0, 10.0);
    state.install_paths(vec![outline("M0,0 L10,0")]);
    state.set_phase(0.3);

    let mut rec = RecordingTarget::new();
    Renderer::default().draw(&mut rec, &state);
    let cmds = rec.commands();
    assert!(matches!(&cmds[1], DrawCmd::Fill { rgba, .. } if rgba[3] == 0));
    assert!(matches!(&cmds[2], DrawCmd::Stroke { rgba, .. } if rgba[3] == 255));
}

#[test]
fn translucent_colors_take_the_animated_alpha() {
    let state = RevealState::new(0.0, 10.0);
    state.install_paths(vec![
        PathOutline::new(BezPath::from_svg("M0,0 L100,0").unwrap())
            .with_stroke(Argb(0x8000_0000), 1.0),
    ]);
    state.set_phase(0.05);
    state.set_fill_alpha(1.0);

    let mut rec = RecordingTarget::new();
    Renderer::new(Argb(0x80ff_0000)).draw(&mut rec, &state);
    let cmds = rec.commands();
    assert!(matches!(&cmds[1], DrawCmd::Fill { rgba, .. } if *rgba == [255, 0, 0, 255]));
    assert!(matches!(&cmds[2], DrawCmd::Stroke { rgba, .. } if *rgba == [0, 0, 0, 127]));
}

#[test]
fn origin_is_applied_first() {
    let state = RevealState::default();
    let origin = Affine::translate((4.0, 6.0));
    let mut rec = RecordingTarget::new();
    let drawn = Renderer::default().with_origin(origin).draw(&mut rec, &state);
    assert_eq!(drawn, 0);
    assert_eq!(rec.commands(), &[DrawCmd::SetTransform(origin)]);
}

#[test]
fn recording_replays_identically() {
    let state = RevealState::new(0.5, 10.0);
    state.install_paths(vec![outline("M0,0 L10,0 L10,10")]);
    let mut first = RecordingTarget::new();
    Renderer::default().draw(&mut first, &state);

    let mut second = RecordingTarget::new();
    first.replay(&mut second);
    assert_eq!(first.commands(), second.commands());
    assert_eq!(second.take().len(), 3);
    assert!(second.commands().is_empty());
}
