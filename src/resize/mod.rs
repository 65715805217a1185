//! Fixed-size icon generation from a single source image.

mod resizer;
mod square;

pub use resizer::{Config, Resizer, ICON_SIZES, SOURCE_IMAGE};
pub use square::{output_name, resize_icon, resize_to_square};
