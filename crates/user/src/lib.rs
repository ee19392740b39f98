mod command;
pub mod password;

pub use command::*;
pub use password::{
    PasswordCheck, WorkFactor, compare_password, hash_password, hash_password_with,
    validate_password,
};
