use std::convert::Infallible;

use ascii_cube::core::{sample_axis, FrameBuffer, FrameRenderer, FrameSink, Rotation};
use ascii_cube::types::{Face, BACKGROUND, CUBE_WIDTH, INCREMENT_SPEED};

/// Checks the buffer handed over on every frame and keeps a copy.
#[derive(Default)]
struct Capture {
    frames: Vec<FrameBuffer>,
}

impl FrameSink for Capture {
    type Error = Infallible;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Infallible> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[test]
fn clear_resets_everything() {
    let mut r = FrameRenderer::default();
    r.render();
    assert!(r.frame().glyphs().iter().any(|&c| c != BACKGROUND));

    r.clear();
    assert!(r.frame().glyphs().iter().all(|&c| c == BACKGROUND));
    assert!(r.frame().depth().iter().all(|&d| d == 0.0));
}

#[test]
fn each_frame_starts_from_a_clear_buffer() {
    let mut r = FrameRenderer::default();
    r.set_rotation(Rotation::new(0.8, 0.3, 0.1));
    r.render();

    // Rendering the rest pose afterwards must not keep stale cells.
    r.set_rotation(Rotation::default());
    let rerendered = r.render().clone();

    let mut fresh = FrameRenderer::default();
    assert_eq!(&rerendered, fresh.render());
}

#[test]
fn angles_accumulate_without_reset() {
    let mut r = FrameRenderer::default();
    let mut sink = Capture::default();
    let n = 200;
    for _ in 0..n {
        r.step(&mut sink).unwrap();
    }

    let rot = r.rotation();
    let n = n as f32;
    assert!((rot.a - 0.05 * n).abs() < 1e-3, "a = {}", rot.a);
    assert!((rot.b - 0.05 * n).abs() < 1e-3, "b = {}", rot.b);
    assert!((rot.c - 0.01 * n).abs() < 1e-3, "c = {}", rot.c);
    assert!(rot.a > std::f32::consts::TAU);
    assert_eq!(r.frames_rendered(), 200);
}

#[test]
fn angles_strictly_increase_each_frame() {
    let mut r = FrameRenderer::default();
    let mut sink = Capture::default();
    let mut prev = r.rotation();
    for _ in 0..10 {
        r.step(&mut sink).unwrap();
        let now = r.rotation();
        assert!(now.a > prev.a && now.b > prev.b && now.c > prev.c);
        prev = now;
    }
}

#[test]
fn first_frame_is_rendered_at_rest() {
    let mut r = FrameRenderer::default();
    let mut sink = Capture::default();
    r.step(&mut sink).unwrap();

    let mut rest = FrameRenderer::default();
    assert_eq!(&sink.frames[0], rest.render());
}

#[test]
fn only_face_glyphs_appear() {
    let glyphs: Vec<char> = Face::ALL.iter().map(|f| f.glyph()).collect();
    let mut r = FrameRenderer::default();
    let mut sink = Capture::default();
    for _ in 0..30 {
        r.step(&mut sink).unwrap();
    }
    for frame in &sink.frames {
        assert!(frame
            .glyphs()
            .iter()
            .all(|c| *c == BACKGROUND || glyphs.contains(c)));
    }
}

#[test]
fn rest_pose_hides_the_back_face() {
    let mut r = FrameRenderer::default();
    let fb = r.render();
    assert!(fb.glyphs().contains(&'@'));
    assert!(!fb.glyphs().contains(&'#'));
}

#[test]
fn rotated_pose_shows_several_faces() {
    let mut r = FrameRenderer::default();
    r.set_rotation(Rotation::new(0.6, 0.6, 0.12));
    let fb = r.render();
    let visible = Face::ALL
        .iter()
        .filter(|f| fb.glyphs().contains(&f.glyph()))
        .count();
    assert!(visible >= 2, "only {visible} faces visible");
}

#[test]
fn face_grid_is_thirty_four_square() {
    let n = sample_axis(CUBE_WIDTH, INCREMENT_SPEED).count();
    assert_eq!(n, 34);
}
