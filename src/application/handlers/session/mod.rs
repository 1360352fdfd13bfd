//! Session command and query handlers.

mod get_current_session;
mod login;
mod logout;

pub use get_current_session::{GetCurrentSessionHandler, GetCurrentSessionQuery};
pub use login::{LoginCommand, LoginHandler};
pub use logout::{LogoutCommand, LogoutHandler};
