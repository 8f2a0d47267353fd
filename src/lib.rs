//! # Stardrift
//!
//! An interactive solar-system scene: the sun and its halo, eight spinning
//! planets, a procedural spiral galaxy with more scattered around the sky,
//! a starfield that drifts with the pointer, and a spacecraft to fly through
//! all of it. Rendered with wgpu, composited through a bloom pass, tuned
//! live from an egui panel.
//!
//! The crate splits into a CPU-side model and a GPU layer:
//!
//! - [`scene`] owns everything that changes per frame and knows nothing
//!   about rendering. [`galaxy`], [`body`], [`spacecraft`], [`starfield`]
//!   and [`camera`] are its parts.
//! - [`gpu`] uploads the model and draws it: lit meshes, the additive halo
//!   shell, instanced point billboards, bloom, and the egui overlay.
//! - [`app`] wires both to winit.
//!
//! Shaders load from WGSL files at startup through [`assets`]; a missing
//! file aborts initialization rather than rendering a partial scene.

pub mod app;
pub mod assets;
pub mod body;
pub mod camera;
pub mod error;
pub mod galaxy;
pub mod gpu;
pub mod input;
pub mod scene;
pub mod settings;
pub mod spacecraft;
pub mod starfield;
pub mod time;
