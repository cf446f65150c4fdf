//! Ambient sparkle field overlay.
//!
//! A decorative real-time particle effect drawn on a full-viewport,
//! click-transparent canvas layered above the page content:
//! - A fixed population of immortal ambient sparkles drifts and wraps at
//!   the viewport edges, twinkling on independent phases
//! - Pointer movement probabilistically sheds short-lived drift sparkles
//! - Clicks detonate a burst of larger, brighter, ray-bearing sparkles
//! - The whole engine tears down while the page is hidden and rebuilds
//!   from scratch when it becomes visible again
//!
//! # Example
//!
//! ```ignore
//! use sparkle_field::{FieldOptions, SparkleFieldOverlay};
//!
//! let options = FieldOptions { burst_count: 16, ..FieldOptions::default() };
//!
//! view! { <SparkleFieldOverlay options=options /> }
//! ```

mod component;
pub mod config;
mod engine;
mod field;
mod particle;
pub mod registry;
mod render;
mod rng;
pub mod theme;

pub use component::SparkleFieldOverlay;
pub use config::FieldOptions;
pub use engine::FieldEngine;
pub use field::SparkleField;
pub use particle::{Particle, ParticleKind};
pub use theme::FieldTheme;
