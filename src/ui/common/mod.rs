//! Common reusable UI components

pub mod message;
pub mod modal;
pub mod spinner;

pub use message::{ErrorMessage, SuccessMessage};
pub use modal::Modal;
pub use spinner::Spinner;
