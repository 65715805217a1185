//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_rgba;
pub use save::{save_png, Compression};
