pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use repositories::invite_repository::InviteRepository;
