//! 本地调试用的内存商品服务
//! 监听配置中的端口 (默认 8081)，提供 `GET/POST /shop` 和 `PUT /shop/:id`

use product_view::app::product::ProductPayload;
use product_view::app::shop::{self, ShopStore};
use product_view::config::load_config;
use product_view::infrastructure::logger::Logger;
use std::env;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    let _guard = Logger::init(&config.logging)?;

    info!("启动商品服务...");

    let store = ShopStore::with_products(sample_products());
    info!("✅ 已初始化 {} 个示例商品", store.list().map(|p| p.len()).unwrap_or(0));

    let addr = format!("{}:{}", config.api.host, config.api.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("📖 API 端点:");
    info!("   GET    {}      - 获取所有商品", config.api.path);
    info!("   POST   {}      - 创建商品", config.api.path);
    info!("   PUT    {}/:id  - 更新商品", config.api.path);

    shop::serve(listener, store, &config.api.path).await?;
    Ok(())
}

fn sample_products() -> Vec<ProductPayload> {
    [("Pen", 10.0, 1.5), ("Pencil", 40.0, 0.5), ("Eraser", 25.0, 0.75)]
        .into_iter()
        .map(|(name, quantity, price)| ProductPayload {
            product_name: name.to_string(),
            quantity,
            price,
        })
        .collect()
}
