//! 内存商品存储

use crate::app::product::{Product, ProductPayload};
use crate::core::error::CoreError;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inventory {
    next_id: i64,
    products: Vec<Product>,
}

/// 按插入顺序保存商品，id 从 1 开始递增
#[derive(Clone, Default)]
pub struct ShopStore {
    inner: Arc<Mutex<Inventory>>,
}

impl ShopStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用初始数据创建存储，id 依次分配
    pub fn with_products(items: impl IntoIterator<Item = ProductPayload>) -> Self {
        let store = Self::new();
        for item in items {
            // 新建的存储不会出现锁中毒
            let _ = store.create(item);
        }
        store
    }

    pub fn list(&self) -> Result<Vec<Product>, CoreError> {
        let inventory = self.lock()?;
        Ok(inventory.products.clone())
    }

    pub fn create(&self, payload: ProductPayload) -> Result<Product, CoreError> {
        let mut inventory = self.lock()?;
        inventory.next_id += 1;
        let product = payload.into_product(inventory.next_id);
        inventory.products.push(product.clone());
        Ok(product)
    }

    pub fn update(&self, id: i64, payload: ProductPayload) -> Result<Product, CoreError> {
        let mut inventory = self.lock()?;
        let product = inventory
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))?;

        *product = payload.into_product(id);
        Ok(product.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inventory>, CoreError> {
        self.inner
            .lock()
            .map_err(|e| CoreError::InternalServerError(format!("存储锁失败: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, quantity: f64, price: f64) -> ProductPayload {
        ProductPayload {
            product_name: name.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_sequential_ids() {
        let store = ShopStore::new();
        let a = store.create(payload("Pen", 10.0, 1.5)).unwrap();
        let b = store.create(payload("Notebook", 5.0, 3.25)).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.list().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_update_keeps_position() {
        let store = ShopStore::with_products([
            payload("Pen", 10.0, 1.5),
            payload("Pencil", 40.0, 0.5),
        ]);

        let updated = store.update(1, payload("Pen", 10.0, 2.75)).unwrap();
        assert_eq!(updated.price, 2.75);

        let products = store.list().unwrap();
        assert_eq!(products[0], updated);
        assert_eq!(products[1].name, "Pencil");
    }

    #[test]
    fn test_update_unknown_id() {
        let store = ShopStore::new();
        let err = store.update(9, payload("Ghost", 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
