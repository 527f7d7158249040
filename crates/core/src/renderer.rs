//! FrameRenderer: owns the rotation state and buffers and drives one frame.

use crate::frame::FrameBuffer;
use crate::projection::{Point3, Rotation, RotationBasis, Viewport};
use crate::types::{Face, CUBE_WIDTH, INCREMENT_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Consumer of finished frames.
///
/// The renderer hands over a shared reference once per frame; sinks can read
/// the buffer but never modify it.
pub trait FrameSink {
    type Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}

/// Grid positions along one face axis: `-half, -half + step, ...` while `< half`.
///
/// Positions are accumulated rather than multiplied so the sample set matches
/// a plain `u += step` loop exactly.
pub fn sample_axis(half: f32, step: f32) -> impl Iterator<Item = f32> + Clone {
    std::iter::successors(Some(-half), move |u| Some(u + step)).take_while(move |u| *u < half)
}

/// The rotating cube renderer.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    rotation: Rotation,
    frame: FrameBuffer,
    frames_rendered: u64,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }
}

impl FrameRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            rotation: Rotation::default(),
            frame: FrameBuffer::new(viewport),
            frames_rendered: 0,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Number of frames presented so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Rotate, project and depth-test one object-space point with the current
    /// rotation. Returns whether the point was written.
    pub fn plot_point(&mut self, point: Point3, glyph: char) -> bool {
        let basis = self.rotation.basis();
        Self::plot_with(&mut self.frame, &basis, point, glyph)
    }

    #[inline(always)]
    fn plot_with(
        frame: &mut FrameBuffer,
        basis: &RotationBasis,
        point: Point3,
        glyph: char,
    ) -> bool {
        let projected = basis.project(point, frame.viewport());
        frame.plot_projected(projected, glyph)
    }

    /// Sample all six faces and rasterize them into the current buffers.
    ///
    /// Does not clear first; see [`render`](Self::render).
    pub fn rasterize_cube(&mut self) {
        let basis = self.rotation.basis();
        let axis = sample_axis(CUBE_WIDTH, INCREMENT_SPEED);

        for u in axis.clone() {
            for v in axis.clone() {
                for face in Face::ALL {
                    let point = Point3::from(face.place(u, v, CUBE_WIDTH));
                    Self::plot_with(&mut self.frame, &basis, point, face.glyph());
                }
            }
        }
    }

    /// Clear and rasterize a full frame at the current rotation.
    pub fn render(&mut self) -> &FrameBuffer {
        self.clear();
        self.rasterize_cube();
        &self.frame
    }

    /// Advance the rotation by one frame.
    pub fn advance(&mut self) {
        self.rotation.advance();
        self.frames_rendered += 1;
    }

    /// Render a frame, present it, then advance the rotation.
    ///
    /// If the sink fails the rotation is left untouched.
    pub fn step<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        self.render();
        sink.present(&self.frame)?;
        self.advance();
        Ok(())
    }
}
