//! Reusable UI components

pub mod input_field;

pub use input_field::{render_input_field, InputFieldConfig};
