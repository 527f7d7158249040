//! Rotation and perspective projection.
//!
//! The rotation is a fixed closed-form Euler rotation about three axes. It is
//! not a general transform pipeline: there are no matrices or cameras, only
//! the three accumulating angles and a fixed camera distance.

use crate::types::{
    ANGLE_STEP_A, ANGLE_STEP_B, ANGLE_STEP_C, DISTANCE_FROM_CAM, HORIZONTAL_OFFSET, K1,
};

/// Object-space point, relative to the cube's centre.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Point3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Screen dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells.
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// The three rotation angles, in radians.
///
/// Angles grow without bound; trig periodicity takes care of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Rotation {
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Advance by one frame's worth of rotation.
    pub fn advance(&mut self) {
        self.a += ANGLE_STEP_A;
        self.b += ANGLE_STEP_B;
        self.c += ANGLE_STEP_C;
    }

    /// Precompute sines and cosines for this set of angles.
    pub fn basis(&self) -> RotationBasis {
        let (sin_a, cos_a) = self.a.sin_cos();
        let (sin_b, cos_b) = self.b.sin_cos();
        let (sin_c, cos_c) = self.c.sin_cos();
        RotationBasis {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
            sin_c,
            cos_c,
        }
    }
}

/// Sines and cosines of a [`Rotation`], computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationBasis {
    sin_a: f32,
    cos_a: f32,
    sin_b: f32,
    cos_b: f32,
    sin_c: f32,
    cos_c: f32,
}

impl RotationBasis {
    /// Rotate an object-space point.
    ///
    /// The terms are kept in the same order as the closed form so results
    /// stay bit-for-bit stable.
    #[inline(always)]
    pub fn rotate(&self, p: Point3) -> Point3 {
        let Self {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
            sin_c,
            cos_c,
        } = *self;
        let (i, j, k) = (p.x, p.y, p.z);

        let x = j * sin_a * sin_b * cos_c - k * cos_a * sin_b * cos_c
            + j * cos_a * sin_c
            + k * sin_a * sin_c
            + i * cos_b * cos_c;
        let y = j * cos_a * cos_c + k * sin_a * cos_c - j * sin_a * sin_b * sin_c
            + k * cos_a * sin_b * sin_c
            - i * cos_b * sin_c;
        let z = k * cos_a * cos_b - j * sin_a * cos_b + i * sin_b;

        Point3 { x, y, z }
    }

    /// Rotate, translate away from the camera and project onto the screen.
    #[inline(always)]
    pub fn project(&self, p: Point3, viewport: Viewport) -> Projected {
        let r = self.rotate(p);
        let z = r.z + DISTANCE_FROM_CAM;

        // z == 0 gives an infinite ooz; that is a valid depth, not a fault.
        let ooz = 1.0 / z;

        let half_w = (viewport.width / 2) as f32;
        let half_h = (viewport.height / 2) as f32;
        let sx = half_w + HORIZONTAL_OFFSET + K1 * ooz * r.x * 2.0;
        let sy = half_h + K1 * ooz * r.y;

        // `as` truncates toward zero and saturates non-finite values.
        Projected {
            x: sx as i32,
            y: sy as i32,
            ooz,
        }
    }
}

/// A sample point mapped to screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: i32,
    pub y: i32,
    /// Depth reciprocal, `1 / z`. Larger is closer.
    pub ooz: f32,
}

/// Rotate and project a single point.
///
/// Convenience wrapper around [`Rotation::basis`] and
/// [`RotationBasis::project`] for one-off projections.
pub fn project(rotation: Rotation, p: Point3, viewport: Viewport) -> Projected {
    rotation.basis().project(p, viewport)
}
