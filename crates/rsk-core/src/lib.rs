pub mod color;
pub mod settings;
pub mod style;
pub mod tool;

pub use color::Color;
pub use settings::{BACKGROUND, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH, Settings};
pub use style::{GLOW_BLUR, Glow, StrokeStyle};
pub use tool::{ToolKind, ToolbarButton};
