//! Core library for Motion Blocks.
//!
//! Editors attach an [`AnimationConfig`] to a content block. The
//! [`Compiler`] turns it into classes, `data-*` attributes and custom
//! properties, the render filters merge those into persisted markup or the
//! live editor preview, and the [`TriggerRuntime`] activates the animations
//! once the markup is loaded into a document.

pub mod compile;
pub mod config;
pub mod error;
pub mod render;
pub mod runtime;
pub mod schema;
pub mod session;
pub mod style;
pub mod timeline;

pub use compile::{compile, CompiledAnimation, Compiler};
pub use config::{AppConfig, MarkupConfig, RuntimeConfig};
pub use error::{MotionError, Result};
pub use render::{FilterChain, PreviewFilter, PropsFilter, RenderProps, SaveFilter};
pub use runtime::{Document, Element, ElementId, ElementPhase, IntersectionEntry, TriggerRuntime};
pub use schema::{
    defaults, pick, Acceleration, AnimationConfig, AnimationSettings, AnimationType, Direction,
    ExitMode, Mode, PreviewState, Repeat, ScrollTrigger,
};
pub use session::Clipboard;
pub use timeline::{RangeName, RangeOffset, ScrollRange};
