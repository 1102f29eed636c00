//! 商品视图组件

pub mod input;
pub mod model;
pub mod render;
pub mod service;
pub mod state;
pub mod view;

pub use model::{Draft, EditField, Product, ProductPayload};
pub use service::{HttpProductApi, ProductApi};
pub use state::ViewState;
pub use view::ProductView;
