//! Terminal output for the cube renderer.
//!
//! The core renders into a [`FrameBuffer`](crate::core::FrameBuffer); this
//! crate turns finished frames into bytes and paces the loop.
//!
//! - [`sink`]: frame encoding, [`TerminalSink`] (stdout) and [`WriterSink`]
//! - [`pacer`]: fixed interframe delay

pub mod pacer;
pub mod sink;

pub use ascii_cube_core as core;
pub use ascii_cube_types as types;

pub use pacer::FramePacer;
pub use sink::{encode_frame_into, TerminalSink, WriterSink};
