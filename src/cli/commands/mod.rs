mod command_result;
pub mod init;
pub mod parse;

pub use command_result::*;
