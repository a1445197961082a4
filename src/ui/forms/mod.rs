//! Form rendering modules

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
