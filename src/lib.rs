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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Camera navigation and color-picking input dispatch for interactive 3D
//! globe viewers.
//!
//! Globenav owns the parts of a globe viewer that sit between raw device
//! input and the renderer: a perspective camera with a numerically stable
//! ray unprojection, and a per-frame dispatcher that turns mouse, touch and
//! keyboard input into named events routed to whatever object is under
//! the pointer.
//!
//! # Key entry points
//!
//! - [`Navigator`] - camera, dispatcher and picking registry for one
//!   viewport
//! - [`camera::Camera`] - eye/basis camera, projection matrices, frustum,
//!   extent fitting
//! - [`input::InputDispatcher`] - raw input to per-frame semantic events
//! - [`picking::PickingRegistry`] - color key to pickable object lookup
//! - [`options::Options`] - runtime configuration (camera, input
//!   thresholds)
//!
//! # Frame flow
//!
//! Raw [`input::InputEvent`]s only update state snapshots. Once per frame
//! the host samples the picking buffer under the pointer and calls
//! [`Navigator::frame`], which resolves hover transitions, recomputes the
//! pointer ray and fires events in a fixed order: keyboard, then mouse,
//! then touch. Each event goes to the picked object's
//! [`events::EventBus`] first and then to the global bus.

pub mod camera;
pub mod error;
pub mod events;
pub mod geo;
pub mod input;
pub mod options;
pub mod picking;
pub mod time;
pub mod viewer;

pub use error::GlobenavError;
pub use options::Options;
pub use viewer::{Navigator, NavigatorBuilder};
