//! Reusable UI components

mod button;
mod error_text;
mod success_banner;

pub use button::{render_button, BUTTON_HEIGHT};
pub use error_text::render_error_text;
pub use success_banner::{render_success_banner, BANNER_HEIGHT};
