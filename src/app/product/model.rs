//! 商品数据模型

use serde::{Deserialize, Serialize};

/// 商品实体，`id` 由服务端分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "product_name")]
    pub name: String,
    /// 数量按数字处理，输入时不强制为整数
    pub quantity: f64,
    pub price: f64,
}

/// 创建 / 更新请求体，不包含 `id`
///
/// 非有限数值 (NaN) 会被 serde_json 序列化为 `null`，由服务端决定是否接受。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub product_name: String,
    pub quantity: f64,
    pub price: f64,
}

/// 新增表单中尚未提交的草稿
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

/// 行内编辑可修改的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Quantity,
    Price,
}

impl Product {
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            product_name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl Draft {
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            product_name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl ProductPayload {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.product_name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl std::str::FromStr for EditField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "product_name" => Ok(EditField::Name),
            "qty" | "quantity" => Ok(EditField::Quantity),
            "price" => Ok(EditField::Price),
            other => Err(format!("未知字段: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format() {
        let product: Product = serde_json::from_str(
            r#"{"id":2,"product_name":"Notebook","quantity":5,"price":3.25}"#,
        )
        .unwrap();
        assert_eq!(product.id, 2);
        assert_eq!(product.name, "Notebook");
        assert_eq!(product.quantity, 5.0);

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["product_name"], "Notebook");
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_payload_omits_id_and_nulls_nan() {
        let draft = Draft {
            name: "Pen".to_string(),
            quantity: f64::NAN,
            price: 1.5,
        };
        let value = serde_json::to_value(draft.payload()).unwrap();
        assert!(value.get("id").is_none());
        assert!(value["quantity"].is_null());
        assert_eq!(value["price"], 1.5);
    }

    #[test]
    fn test_edit_field_from_str() {
        assert_eq!("qty".parse::<EditField>().unwrap(), EditField::Quantity);
        assert_eq!("product_name".parse::<EditField>().unwrap(), EditField::Name);
        assert!("id".parse::<EditField>().is_err());
    }
}
