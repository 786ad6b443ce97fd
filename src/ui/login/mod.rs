//! Login screen module

pub mod form;
mod render;

pub use form::{FormAction, LoginForm};
pub use render::render_login;
