//! Core cube renderer - pure, deterministic, and testable
//!
//! This crate contains the whole rendering pipeline for the rotating cube.
//! It has **zero dependencies** on terminals or I/O:
//!
//! - **Deterministic**: the same rotation always produces the same frame
//! - **Allocation free**: buffers are allocated once, frames reuse them
//! - **Portable**: frames are handed to any [`FrameSink`]
//!
//! # Module Structure
//!
//! - [`projection`]: closed-form Euler rotation and perspective projection
//! - [`frame`]: paired character/depth buffers with the depth-tested write
//! - [`renderer`]: [`FrameRenderer`], face sampling and the per-frame step
//!
//! # Pipeline
//!
//! Every frame:
//!
//! 1. Clear glyphs to the background and depths to zero
//! 2. Sample each of the six faces on a fixed grid
//! 3. Rotate and project each sample, keeping the closest per cell
//! 4. Present the buffer to the sink
//! 5. Advance the rotation angles
//!
//! # Example
//!
//! ```
//! use ascii_cube_core::{FrameRenderer, FrameSink, FrameBuffer};
//!
//! struct Count(usize);
//!
//! impl FrameSink for Count {
//!     type Error = ();
//!     fn present(&mut self, _frame: &FrameBuffer) -> Result<(), ()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut renderer = FrameRenderer::default();
//! let mut sink = Count(0);
//! renderer.step(&mut sink).unwrap();
//! assert_eq!(sink.0, 1);
//! assert_eq!(renderer.frames_rendered(), 1);
//! ```

pub mod frame;
pub mod projection;
pub mod renderer;

pub use ascii_cube_types as types;

pub use frame::FrameBuffer;
pub use projection::{project, Point3, Projected, Rotation, RotationBasis, Viewport};
pub use renderer::{sample_axis, FrameRenderer, FrameSink};
