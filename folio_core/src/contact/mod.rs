//! Contact form validation and submission, plus the toast it reports through.

pub mod form;
pub mod toast;

pub use form::{feedback_for, is_valid_email, ContactForm};
pub use toast::{Toast, ToastKind, ToastSlot};
