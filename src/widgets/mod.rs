// Reusable UI widgets

pub mod text_input;
pub mod toast;

pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
