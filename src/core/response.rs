//! 核心响应处理模块

use serde::Serialize;

/// `{ "message": "success", "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success",
            data,
        }
    }
}

/// `{ "message": "deleted", "changes": n }`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub changes: u64,
}

impl DeleteResponse {
    pub fn deleted(changes: u64) -> Self {
        Self {
            message: "deleted",
            changes,
        }
    }
}
