pub mod button;
pub mod input;
pub mod spinner;
pub mod status;
pub mod textarea;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use button::*;
pub use input::*;
pub use spinner::*;
pub use status::*;
pub use textarea::*;
