pub mod backup;
pub mod best;
pub mod config;
pub mod init;
pub mod log;
pub mod menu;
pub mod solver;
pub mod submit;
