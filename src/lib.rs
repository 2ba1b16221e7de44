//! stroke-reveal progressively reveals a vector drawing: its outlines are traced from nothing to
//! complete along their arc length, with the stroke fading in as it goes, while the filled
//! silhouettes fade in behind them.
//!
//! The pieces, bottom up:
//!
//! - A [`GeometryProvider`] turns a [`GeometrySource`] into viewport-fitted [`PathOutline`]s;
//!   [`SvgGeometryProvider`] does this with `usvg`.
//! - A [`GeometryLoader`] runs the provider on a worker thread and installs the result into a
//!   shared [`RevealState`].
//! - An [`AnimationDriver`] animates the trace phase and fill alpha of that state.
//! - A [`Renderer`] draws the state into any [`DrawTarget`], e.g. a [`CpuSurface`].
//!
//! [`RevealSession`] wires all of them together behind a small host-facing API.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod reveal;
pub(crate) mod session;

pub use crate::foundation::core::{Affine, Argb, BezPath, Padding, Point, Rect, Vec2, Viewport};
pub use crate::foundation::error::{GeometryLoadError, RevealError, RevealResult};

pub use crate::animation::driver::{AnimationDriver, RevealTiming, TickOutcome};
pub use crate::animation::ease::Ease;
pub use crate::animation::tween::{Tween, TweenSample};
pub use crate::geometry::loader::{GeometryLoader, LoadOutcome};
pub use crate::geometry::outline::{PathOutline, StrokePaint, stroke_alpha_fraction};
pub use crate::geometry::provider::{GeometryProvider, GeometrySource, SvgGeometryProvider};
pub use crate::geometry::trim::{ARCLEN_ACCURACY, arc_length, trim_prefix};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::recording::{DrawCmd, RecordingTarget};
pub use crate::render::renderer::Renderer;
pub use crate::render::target::DrawTarget;
pub use crate::reveal::gate::SyncGate;
pub use crate::reveal::state::{FALLBACK_FADE_FACTOR, RevealFrame, RevealState};
pub use crate::session::config::RevealConfig;
pub use crate::session::reveal_session::RevealSession;
