mod composition;
mod results;
mod ui;
mod viewport;

pub use composition::CompositionState;
pub use results::{ResultEntry, ResultsState};
pub use ui::UIState;
pub use viewport::ViewportState;
