//! # iconkit
//!
//! Small utilities for preparing icon PNGs.
//!
//! - [`transparency`] erases light backgrounds with a per-pixel RGB threshold,
//!   backing up each original once before rewriting it in place.
//! - [`resize`] renders one source image at fixed square sizes using Lanczos3
//!   resampling.
//!
//! ## Example
//!
//! ```no_run
//! use iconkit::resize::{Config, Resizer};
//!
//! # fn main() -> iconkit::Result<()> {
//! let resizer = Resizer::new(Config::default())?;
//! let summary = resizer.run(".")?;
//!
//! println!("generated {summary} icons");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod logging;
pub mod report;
pub mod resize;
pub mod transparency;

pub use error::{Error, Result};
pub use report::Summary;
