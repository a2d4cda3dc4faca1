pub mod events;
pub mod geometry;
pub mod session;
pub mod transform;

pub use events::{wheel_factor, ViewerEvent};
pub use geometry::{ImageDimensions, Point, ScaleLimits, Size, Transform, ViewportBounds};
pub use session::{ViewerCursor, ViewerSession, ViewerState};
pub use transform::{clamp_position, compute_fit_transform, is_pannable, pan_by, zoom_at};
