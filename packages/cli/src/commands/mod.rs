pub mod question;
pub mod sql;
