pub mod model;
pub mod view;

pub use model::{ClickAction, State};
pub use view::draw;

pub const CENTER_CIRCLE_RADIUS: f64 = 48.0; // drawn inside MIN_RADIUS
pub const SEGMENT_STROKE_WIDTH: f64 = 1.5;
pub const LABEL_FONT_SIZE: f64 = 15.0;
pub const LABEL_FONT: &str = "Sans";
