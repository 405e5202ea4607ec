//! 核心模块：错误、响应、提取器、中间件

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
