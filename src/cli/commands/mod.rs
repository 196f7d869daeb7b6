pub mod config;
pub mod decode;
pub mod encode;
pub mod init;
pub mod list;
pub mod pick;
