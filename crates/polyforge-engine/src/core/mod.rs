//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and applications:
//! an [`App`] trait and the per-frame [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
