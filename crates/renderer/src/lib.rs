//! Rendering of sea-surface-temperature grids onto a background map.
//!
//! - [`colormap`]: byte sample to RGBA, land passes the background through
//! - [`background`]: decoding and fitting the background image
//! - [`canvas`]: background → composited surface
//! - [`png`]: RGBA PNG encoding

pub mod background;
pub mod canvas;
pub mod colormap;
pub mod error;
pub mod png;

pub use background::{fit_background, load_background, solid_background};
pub use canvas::{render_sst_map, BackgroundCanvas, Canvas, CompositedCanvas};
pub use colormap::{is_land, map_pixel, sst_color, Color, LAND_THRESHOLD};
pub use error::{RenderError, Result};
pub use image::RgbaImage;
