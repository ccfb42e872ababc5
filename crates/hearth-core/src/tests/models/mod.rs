mod account;
mod invite_code;
