pub mod ascii_utils;
pub mod border;
pub mod entry;
pub mod error;
pub mod generator;
pub mod grid;
pub mod json_utils;
pub mod loader;
pub mod network;
pub mod request_handler;
pub mod traversal;
pub mod validator;
