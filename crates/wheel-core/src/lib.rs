mod macros;

pub mod category;
pub mod chart;
pub mod config;
pub mod geometry;
pub mod paint;
pub mod selection;
pub mod store;

pub use category::{Category, CategoryId, CategoryName, HexColor};
pub use chart::{Chart, ChartError, SegmentView};
pub use geometry::{LabelAnchor, Point, SegmentAddress, Viewport, Wedge};
pub use selection::{Fill, Selection};
