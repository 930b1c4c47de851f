pub mod db;
pub mod export;
pub mod init;
pub mod serve;
pub mod stats;
