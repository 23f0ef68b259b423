pub mod login;
pub mod portal;
pub mod register;
