pub mod validate;
pub mod password;
