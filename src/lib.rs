// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive camera and compositing core for 3D scene viewports.
//!
//! Vista keeps an orthographic pan/orbit/zoom camera, converts between
//! window, scene and world coordinates, drives a depth-composited render
//! pass over pluggable image layers, and overlays a depth-ordered
//! coordinate-axis indicator.
//!
//! # Key entry points
//!
//! - [`Viewport`] - one view: camera, input state machine, attached layers
//! - [`camera::Transform`] - world ↔ screen math for a [`CameraState`]
//! - [`layers::DepthLayer`] / [`layers::OverlayControl`] - the contracts
//!   external layers and widgets implement
//! - [`options::Options`] - navigation tuning, colors and keybindings
//!
//! # Architecture
//!
//! An input event is first offered to attached overlay controls in
//! attachment order. If none claims it, the [`input::InputProcessor`]
//! turns it into a [`ViewCommand`] (pan, orbit, zoom, open menu) which the
//! viewport applies to its camera, requesting a repaint and notifying view
//! listeners. On repaint the [`render::Compositor`] queries every layer's
//! depth under the current matrix, has every layer paint with the
//! accumulated range inside a scoped native-paint bracket, and then draws
//! the axis overlay.
//!
//! All of this is single-threaded; see [`viewport`] for the threading
//! notes.

pub mod camera;
pub mod error;
pub mod input;
pub mod layers;
pub mod options;
pub mod render;
pub mod replay;
pub mod viewport;

pub use camera::{CameraState, Transform};
pub use error::VistaError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use render::RecordingSurface;
pub use viewport::{ContextMenuHandler, MenuRequest, ViewCommand, Viewport};
