pub mod categories;
pub mod init;
pub mod seed;
pub mod serve;
