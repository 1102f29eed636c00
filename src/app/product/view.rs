//! ProductView：持有状态容器和 API 客户端的视图组件
//!
//! 同步的用户操作直接修改状态；提交和保存会发起异步请求，成功后把服务端返回的实体合并回列表。
//! 失败时只记录诊断日志，状态保持不变。并发请求之间没有顺序保证，最后落地的响应生效。

use super::model::{EditField, Product};
use super::render::render;
use super::service::ProductApi;
use super::state::ViewState;
use crate::core::error::ClientError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{error, info};

pub struct ProductView<A> {
    api: Arc<A>,
    state: Arc<Mutex<ViewState>>,
    mounted: Arc<AtomicBool>,
    revision: Arc<watch::Sender<u64>>,
}

// 手动实现，避免要求 A: Clone
impl<A> Clone for ProductView<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
            mounted: Arc::clone(&self.mounted),
            revision: Arc::clone(&self.revision),
        }
    }
}

impl<A: ProductApi + 'static> ProductView<A> {
    pub fn new(api: A) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            api: Arc::new(api),
            state: Arc::new(Mutex::new(ViewState::new())),
            mounted: Arc::new(AtomicBool::new(false)),
            revision: Arc::new(revision),
        }
    }

    /// 订阅状态变更，每次转换后版本号加一
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// 当前状态的快照
    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    /// 按当前状态渲染整个视图
    pub fn render(&self) -> String {
        render(&self.lock())
    }

    /// 首次显示：只拉取一次完整列表，之后不会自动刷新
    pub async fn mount(&self) -> Result<(), ClientError> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        match self.api.list().await {
            Ok(products) => {
                info!("商品列表加载完成: {} 条", products.len());
                self.apply(|state| state.products_loaded(products));
                Ok(())
            }
            Err(e) => {
                error!("获取商品列表失败: {}", e);
                Err(e)
            }
        }
    }

    pub fn toggle_add_form(&self) {
        self.apply(ViewState::toggle_add_form);
    }

    pub fn set_draft_name(&self, raw: &str) {
        self.apply(|state| state.set_draft_name(raw));
    }

    pub fn set_draft_quantity(&self, raw: &str) {
        self.apply(|state| state.set_draft_quantity(raw));
    }

    pub fn set_draft_price(&self, raw: &str) {
        self.apply(|state| state.set_draft_price(raw));
    }

    /// 提交新增表单
    ///
    /// 表单未打开时没有可提交的内容，直接返回。
    pub async fn submit_draft(&self) -> Result<(), ClientError> {
        let payload = {
            let state = self.lock();
            if !state.add_form_open {
                return Ok(());
            }
            state.draft.payload()
        };

        match self.api.create(payload).await {
            Ok(product) => {
                info!("新增商品: id={}, name={}", product.id, product.name);
                self.apply(|state| state.product_created(product));
                Ok(())
            }
            Err(e) => {
                error!("新增商品失败: {}", e);
                Err(e)
            }
        }
    }

    /// 开始编辑某一行，覆盖之前的编辑副本
    pub fn begin_edit(&self, id: i64) -> bool {
        let mut changed = false;
        self.apply(|state| changed = state.begin_edit(id));
        changed
    }

    pub fn edit_field(&self, field: EditField, raw: &str) {
        self.apply(|state| state.edit_field(field, raw));
    }

    /// 保存编辑副本，请求体不包含 id
    pub async fn save_edit(&self) -> Result<(), ClientError> {
        let selection = self.lock().editing.clone();
        let Some(editing) = selection else {
            return Ok(());
        };

        match self.api.update(editing.id, editing.payload()).await {
            Ok(product) => {
                info!("更新商品: id={}", product.id);
                self.apply(|state| state.product_updated(product));
                Ok(())
            }
            Err(e) => {
                error!("更新商品 {} 失败: {}", editing.id, e);
                Err(e)
            }
        }
    }

    /// 当前列表，测试和外部渲染器使用
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn apply(&self, transition: impl FnOnce(&mut ViewState)) {
        {
            let mut state = self.lock();
            transition(&mut state);
        }
        self.revision.send_modify(|rev| *rev += 1);
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        // 锁中毒时继续使用内部数据
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
