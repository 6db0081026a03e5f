//! # Kiln Engine
//!
//! An early game engine skeleton whose developed subsystem is its math core.
//!
//! ## Features
//!
//! - **Math core**: [`kiln_math`] (re-exported as [`math`]) provides vectors, points,
//!   matrices, planes and quaternions with compile-time scalar/SIMD backend selection
//! - **Configuration**: TOML/JSON config files with environment overrides
//! - **Logging**: `tracing` based logger injected into the engine, never installed globally
//! - **Frame loop**: blocking loop driven by a per-frame callback
//!
//! ### Example
//!
//! ```no_run
//! use kiln_engine::config::EngineConfig;
//! use kiln_engine::core::{Engine, Logger, LoopControl};
//! use kiln_engine::math::{Fpu, Vector3};
//! use kiln_engine::transform::Spinner;
//!
//! let engine = Engine::new(EngineConfig::default(), Logger::silent())?;
//! let spinner = Spinner::default();
//! engine.run(|frame| {
//!     let model = spinner.model::<Fpu>(frame.seconds());
//!     let _forward = model.transform_vector(Vector3::new(0.0, 0.0, -1.0));
//!     Ok(LoopControl::Exit)
//! })?;
//! # Ok::<(), kiln_engine::core::EngineError>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Engine loop, logger and error types
//! - [`config`]: Configuration loading and validation
//! - [`transform`]: Per-frame transforms packed into GPU uniforms

/// Core engine functionality including the frame loop and logger
#[macro_use]
pub mod core;
/// Configuration system
pub mod config;
/// Per-frame transforms and uniform packing
pub mod transform;

/// Math core (separated crate)
pub use kiln_math as math;
