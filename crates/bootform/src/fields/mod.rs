//! Field constructors for common controls.

mod choice;
mod text;

pub use choice::{checkbox_field, radio_field, select_field};
pub use text::{
    email_field, hidden_field, password_field, submit_field, text_field, textarea_field,
};
