pub mod mapper;
pub mod parser;

pub use mapper::{BoardBounds, ViewTransform};
pub use parser::{parse_footprint, FootprintGeometry, OutlineSegment, PadGeometry};
