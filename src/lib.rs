//! Star rating widget for `embedded-graphics` displays
//!
//! [`RatingBar`] draws a row of star icons, turns drags and taps into an
//! integer rating and reports each committed change to a listener. The host
//! drives it through three capabilities: [`Measurable`](ui::Measurable) for
//! layout, [`Drawable`](ui::Drawable) for painting and
//! [`Touchable`](ui::Touchable) for pointer input.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod resources;
pub mod ui;

pub use config::RatingBarConfig;
pub use error::{RatingBarError, RatingBarResult};
pub use resources::{NoResources, ResourceId, ResourceResolver, StaticResources};
pub use ui::RatingBar;
