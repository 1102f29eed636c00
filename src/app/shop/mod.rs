//! 开发用的内存商品服务
//!
//! 实现 `/shop` 集合的三个端点，供本地调试和集成测试使用，不做持久化。

pub mod handler;
pub mod service;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::core::middleware::request_logging_middleware;
use handler::{create_product, list_products, update_product, AppState};
pub use service::ShopStore;

/// 构建 `/shop` 路由
pub fn router(store: ShopStore, path: &str) -> Router {
    let item_path = format!("{}/:id", path.trim_end_matches('/'));

    Router::new()
        .route(path, get(list_products).post(create_product))
        .route(&item_path, put(update_product))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(AppState { store })
}

/// 在已绑定的监听器上运行服务，直到进程退出
pub async fn serve(listener: TcpListener, store: ShopStore, path: &str) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("商品服务运行在 http://{}{}", addr, path);
    }
    axum::serve(listener, router(store, path)).await
}
