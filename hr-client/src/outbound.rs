pub mod http;
pub mod token_file;
