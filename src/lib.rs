//! # 库存产品目录服务
//!
//! 基于 Axum + SQLx(SQLite) 的单表 CRUD 服务：
//! - `GET    /api/products`      列出全部产品
//! - `POST   /api/products`      创建产品
//! - `DELETE /api/products/:id`  删除产品
//!
//! 存储句柄在启动时显式创建，通过 `AppState` 传入路由，关闭时释放。

pub mod app;
pub mod core;
pub mod infrastructure;

pub use crate::app::product::model::{CreateProduct, Product};
pub use crate::app::product::service::ProductService;
pub use crate::app::routes::create_router;
pub use crate::core::error::ApiError;
pub use crate::infrastructure::config::Config;
pub use crate::infrastructure::database::DatabaseManager;
