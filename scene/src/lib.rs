//! Decorative 3D scene for the portfolio hero section.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! whole hero animation: the floating boxes, the wireframe sphere and the
//! particle field, their per-frame motion, the orbit camera driven by pointer
//! drags, and the projection of everything onto a 2D canvas. The Leptos host
//! only wires the canvas element, the animation-frame loop and pointer events
//! to the engine. Nothing here feeds back into application state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::SceneCore`] |
//! | [`shapes`] | Scene objects and their per-frame animation |
//! | [`mesh`] | World-space geometry (faces, wire lines, points) for the renderer |
//! | [`camera`] | Orbit camera and perspective projection |
//! | [`math`] | `Vec3`, Euler rotations and transforms |
//! | [`render`] | Draws a frame to a `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants (camera, lighting, motion rates) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod render;
pub mod shapes;
