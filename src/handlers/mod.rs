pub mod auth_handlers;
pub mod fund_handlers;
pub mod pages;

pub use auth_handlers::{callback_handler, logout_handler, magic_link_handler};
pub use fund_handlers::list_funds_handler;
pub use pages::{auth_error_page, not_found_handler};
