//! Draft validation for task forms.

pub mod rules;
pub mod service;

pub use service::DefaultTaskValidator;
