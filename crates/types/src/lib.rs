//! Shared constants and the cube face table.
//!
//! Everything here is fixed at compile time. There is no runtime
//! configuration: the screen size, cube size, sampling density, camera and
//! rotation speeds are all constants.
//!
//! # Screen
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 100 | Columns in the character buffer |
//! | `SCREEN_HEIGHT` | 31 | Rows in the character buffer |
//! | `BACKGROUND` | `' '` | Glyph of an empty cell |
//!
//! # Camera and projection
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DISTANCE_FROM_CAM` | 100.0 | Added to rotated z before the divide |
//! | `K1` | 40.0 | Perspective scale |
//! | `HORIZONTAL_OFFSET` | 0.0 | Extra horizontal shift of the projection |
//!
//! # Cube sampling
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CUBE_WIDTH` | 10.0 | Half extent of the cube |
//! | `INCREMENT_SPEED` | 0.6 | Grid step over each face |
//!
//! # Timing
//!
//! Angles advance once per frame (radians). `FRAME_INTERVAL_MS` is the
//! interframe delay (~60 FPS).
//!
//! # Examples
//!
//! ```
//! use ascii_cube_types::{Face, CUBE_WIDTH};
//!
//! assert_eq!(Face::ALL.len(), 6);
//! assert_eq!(Face::NegZ.glyph(), '@');
//! assert_eq!(Face::NegZ.place(1.0, 2.0, CUBE_WIDTH), [1.0, 2.0, -10.0]);
//! ```

/// Character buffer width in columns.
pub const SCREEN_WIDTH: usize = 100;

/// Character buffer height in rows.
pub const SCREEN_HEIGHT: usize = 31;

/// Glyph written into every cell when a frame is cleared.
pub const BACKGROUND: char = ' ';

/// Half extent of the cube in object space.
pub const CUBE_WIDTH: f32 = 10.0;

/// Distance between grid samples on a face.
pub const INCREMENT_SPEED: f32 = 0.6;

/// Camera distance, added to rotated z.
pub const DISTANCE_FROM_CAM: f32 = 100.0;

/// Perspective scale factor.
pub const K1: f32 = 40.0;

/// Horizontal shift of the projected image (always zero).
pub const HORIZONTAL_OFFSET: f32 = 0.0;

/// Per-frame increment of angle A.
pub const ANGLE_STEP_A: f32 = 0.05;

/// Per-frame increment of angle B.
pub const ANGLE_STEP_B: f32 = 0.05;

/// Per-frame increment of angle C.
pub const ANGLE_STEP_C: f32 = 0.01;

/// Delay between frames in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// The six faces of the cube.
///
/// Each face maps a grid sample `(u, v)` onto object space and carries its
/// own display glyph. Variants are named by the axis the face is
/// perpendicular to and the side it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// `(u, v, -w)`, drawn with `'@'`.
    NegZ,
    /// `(w, v, u)`, drawn with `'$'`.
    PosX,
    /// `(-w, v, -u)`, drawn with `'~'`.
    NegX,
    /// `(-u, v, w)`, drawn with `'#'`.
    PosZ,
    /// `(u, -w, -v)`, drawn with `';'`.
    NegY,
    /// `(u, w, v)`, drawn with `'+'`.
    PosY,
}

impl Face {
    /// All faces in rasterization order.
    pub const ALL: [Face; 6] = [
        Face::NegZ,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegY,
        Face::PosY,
    ];

    /// Display glyph for this face.
    pub const fn glyph(self) -> char {
        match self {
            Face::NegZ => '@',
            Face::PosX => '$',
            Face::NegX => '~',
            Face::PosZ => '#',
            Face::NegY => ';',
            Face::PosY => '+',
        }
    }

    /// Place grid sample `(u, v)` on this face of a cube with half extent `w`.
    ///
    /// Returns `[i, j, k]` in object space.
    #[inline(always)]
    pub fn place(self, u: f32, v: f32, w: f32) -> [f32; 3] {
        match self {
            Face::NegZ => [u, v, -w],
            Face::PosX => [w, v, u],
            Face::NegX => [-w, v, -u],
            Face::PosZ => [-u, v, w],
            Face::NegY => [u, -w, -v],
            Face::PosY => [u, w, v],
        }
    }
}
