pub mod cd;
pub mod echo;
pub mod env;
pub mod exit;
