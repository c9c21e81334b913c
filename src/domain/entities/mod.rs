//! Domain entity definitions.

mod account;
mod alias;
mod token;

pub use account::Account;
pub use alias::{Alias, AliasId, AliasStatus, ForwardingAddress};
pub use token::SessionToken;
