//! Application state module

mod app_state;
mod cursor;
mod toast;

pub use app_state::*;
pub use cursor::*;
pub use toast::*;
