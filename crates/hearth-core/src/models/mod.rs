pub mod account;
pub mod account_dto;
pub mod invite_code;
