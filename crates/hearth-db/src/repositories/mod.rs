pub mod account_repository;
pub mod invite_repository;
