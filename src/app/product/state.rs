//! 商品视图状态及其转换函数
//!
//! 所有转换都是同步的纯状态修改；网络请求只在成功后调用 `*_succeeded` 系列函数，
//! 失败时状态保持不变。

use super::input::{parse_float, parse_int};
use super::model::{Draft, EditField, Product};
use tracing::debug;

/// 视图的全部本地状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// 与服务端同步的商品列表，保持返回/追加顺序
    pub products: Vec<Product>,
    /// 新增表单草稿
    pub draft: Draft,
    /// 新增表单是否显示
    pub add_form_open: bool,
    /// 正在编辑的商品副本，同一时刻最多一个
    pub editing: Option<Product>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 首次加载完成，用服务端列表整体替换本地列表
    pub fn products_loaded(&mut self, products: Vec<Product>) {
        debug!("加载商品列表: {} 条", products.len());
        self.products = products;
    }

    /// 切换新增表单的显示，不清空草稿
    pub fn toggle_add_form(&mut self) {
        self.add_form_open = !self.add_form_open;
    }

    pub fn set_draft_name(&mut self, raw: &str) {
        self.draft.name = raw.to_string();
    }

    pub fn set_draft_quantity(&mut self, raw: &str) {
        self.draft.quantity = parse_int(raw);
    }

    pub fn set_draft_price(&mut self, raw: &str) {
        self.draft.price = parse_float(raw);
    }

    /// 新增成功：追加服务端返回的实体，清空草稿并关闭表单
    pub fn product_created(&mut self, product: Product) {
        debug!("新增商品成功: id={}", product.id);
        self.products.push(product);
        self.draft = Draft::default();
        self.add_form_open = false;
    }

    /// 开始编辑指定商品，覆盖之前的编辑副本（未保存的修改直接丢弃）
    ///
    /// 列表中不存在该 id 时不做任何修改并返回 false。
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(product) = self.products.iter().find(|p| p.id == id) else {
            return false;
        };

        if let Some(previous) = &self.editing {
            if previous.id != id {
                debug!("放弃商品 {} 未保存的编辑", previous.id);
            }
        }
        self.editing = Some(product.clone());
        true
    }

    /// 修改编辑副本中的字段，没有编辑中的商品时忽略
    pub fn edit_field(&mut self, field: EditField, raw: &str) {
        let Some(editing) = self.editing.as_mut() else {
            return;
        };

        match field {
            EditField::Name => editing.name = raw.to_string(),
            EditField::Quantity => editing.quantity = parse_float(raw),
            EditField::Price => editing.price = parse_float(raw),
        }
    }

    /// 保存成功：按 id 替换列表中的商品并清除编辑状态
    pub fn product_updated(&mut self, updated: Product) {
        debug!("更新商品成功: id={}", updated.id);
        for product in self.products.iter_mut().filter(|p| p.id == updated.id) {
            *product = updated.clone();
        }
        self.editing = None;
    }

    /// 判断某一行是否处于编辑模式
    pub fn is_editing(&self, id: i64) -> bool {
        self.editing.as_ref().is_some_and(|p| p.id == id)
    }
}
