mod alias_data_port;
mod auth_port;
mod token_storage_port;

pub use alias_data_port::AliasDataPort;
pub use auth_port::{AuthPort, Credentials};
pub use token_storage_port::TokenStoragePort;
