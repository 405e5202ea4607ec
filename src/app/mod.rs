//! 业务应用模块

pub mod product;
pub mod routes;
