//! 基础设施：配置、数据库、日志

pub mod config;
pub mod database;
pub mod logger;
