//! 核心模块：错误类型和中间件

pub mod error;
pub mod middleware;
