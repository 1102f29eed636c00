//! # 商品库存视图
//!
//! 一个通过 REST 服务列出、新增、行内编辑商品的视图组件：
//! - 显式的状态容器和每个用户操作对应的转换函数
//! - 基于 reqwest 的 `/shop` 客户端
//! - 状态到文本表格的纯函数渲染
//! - 本地调试和测试用的内存商品服务

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::product::{
    Draft, EditField, HttpProductApi, Product, ProductApi, ProductPayload, ProductView, ViewState,
};
pub use config::{Config, ConfigError};
pub use crate::core::error::{ClientError, CoreError};
