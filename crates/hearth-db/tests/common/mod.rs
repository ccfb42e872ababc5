#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{create_test_account, create_test_admin, create_test_invite};
pub use test_db::create_test_pool;
