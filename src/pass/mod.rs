//! Password generation.

pub mod charset;
mod generate;

pub use generate::build_password;
pub use generate::build_password_list;
pub use generate::is_valid;
