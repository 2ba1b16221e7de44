use super::*;

fn square() -> BezPath {
    BezPath::from_svg("M8,8 L24,8 L24,24 L8,24 Z").unwrap()
}

#[test]
fn rejects_oversized_and_empty_surfaces() {
    assert!(CpuSurface::new(70_000, 10).is_err());
    assert!(CpuSurface::new(10, 0).is_err());
    assert!(CpuSurface::new(1, 1).is_ok());
}

#[test]
fn fill_covers_inside_only() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.set_transform(Affine::IDENTITY);
    s.fill_path(&square(), [255, 0, 0, 255]);
    let frame = s.finish();
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 32 * 32 * 4);
    assert_eq!(frame.pixel(16, 16), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(2, 2), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn transform_moves_geometry() {
    let mut s = CpuSurface::new(64, 64).unwrap();
    s.set_transform(Affine::translate((32.0, 32.0)));
    s.fill_path(&square(), [0, 0, 255, 255]);
    let frame = s.finish();
    assert_eq!(frame.pixel(16, 16), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(48, 48), Some([0, 0, 255, 255]));
}

#[test]
fn invisible_and_empty_paths_draw_nothing() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.set_transform(Affine::IDENTITY);
    s.fill_path(&square(), [255, 0, 0, 0]);
    s.stroke_path(&BezPath::new(), 4.0, [255, 0, 0, 255]);
    s.stroke_path(&square(), 0.0, [255, 0, 0, 255]);
    let frame = s.finish();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn stroke_marks_the_edge() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.set_transform(Affine::IDENTITY);
    s.stroke_path(&square(), 4.0, [0, 255, 0, 255]);
    let frame = s.finish();
    assert_eq!(frame.pixel(8, 16).map(|p| p[3]), Some(255));
    assert_eq!(frame.pixel(16, 16).map(|p| p[3]), Some(0));
}

#[test]
fn background_fills_every_pixel() {
    let s = CpuSurface::with_background(4, 4, [10, 20, 30, 255]).unwrap();
    let frame = s.finish();
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, &[10, 20, 30, 255]);
    }
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = vec![64u8, 0, 128, 128, 9, 9, 9, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 0, 255, 128]);
    assert_eq!(&px[4..8], &[9, 9, 9, 0]);
    assert_eq!(&px[8..], &[1, 2, 3, 255]);
}
