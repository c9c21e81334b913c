//! UI screens.

mod account_screen;
mod alias_screen;
mod app;
mod login_screen;

pub use account_screen::{AccountAction, AccountScreenState};
pub use alias_screen::{AliasAction, AliasScreen, AliasScreenState};
pub use app::App;
pub use login_screen::{LoginAction, LoginScreen, LoginState};
