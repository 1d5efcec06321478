pub mod renderer;
pub mod result;
pub mod style;
pub mod views;

pub use renderer::ConsoleRenderer;
pub use result::{BadgeKind, CommandResultViewModel, Guidance, StatusBadge};
pub use views::View;
