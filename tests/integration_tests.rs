use product_view::app::shop::{self, ShopStore};
use product_view::{
    Draft, EditField, HttpProductApi, Product, ProductApi, ProductPayload, ProductView,
};
use tokio::net::TcpListener;

fn payload(name: &str, quantity: f64, price: f64) -> ProductPayload {
    ProductPayload {
        product_name: name.to_string(),
        quantity,
        price,
    }
}

/// 在随机端口启动内存商品服务，返回集合地址
async fn start_shop(store: ShopStore) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        shop::serve(listener, store, "/shop").await.unwrap();
    });
    format!("http://{}/shop", addr)
}

/// 绑定后立即释放的端口，连接会被拒绝
async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/shop", addr)
}

async fn mounted_view_with_pen() -> (ProductView<HttpProductApi>, ShopStore) {
    let store = ShopStore::with_products([payload("Pen", 10.0, 1.5)]);
    let url = start_shop(store.clone()).await;
    let view = ProductView::new(HttpProductApi::with_url(url));
    view.mount().await.unwrap();
    (view, store)
}

#[tokio::test]
async fn test_mount_loads_collection() {
    let (view, _store) = mounted_view_with_pen().await;

    assert_eq!(
        view.products(),
        vec![Product {
            id: 1,
            name: "Pen".to_string(),
            quantity: 10.0,
            price: 1.5,
        }]
    );
}

#[tokio::test]
async fn test_create_appends_server_entity() {
    let (view, store) = mounted_view_with_pen().await;

    view.toggle_add_form();
    view.set_draft_name("Notebook");
    view.set_draft_quantity("5");
    view.set_draft_price("3.25");
    view.submit_draft().await.unwrap();

    let state = view.snapshot();
    assert_eq!(state.products.len(), 2);
    assert_eq!(state.products[0].name, "Pen");
    assert_eq!(
        state.products[1],
        Product {
            id: 2,
            name: "Notebook".to_string(),
            quantity: 5.0,
            price: 3.25,
        }
    );
    assert_eq!(state.draft, Draft::default());
    assert!(!state.add_form_open);
    assert_eq!(store.list().unwrap(), state.products);
}

#[tokio::test]
async fn test_each_create_grows_collection_by_one() {
    let (view, _store) = mounted_view_with_pen().await;

    for (i, name) in ["A", "B", "C"].iter().enumerate() {
        view.toggle_add_form();
        view.set_draft_name(name);
        view.submit_draft().await.unwrap();

        let products = view.products();
        assert_eq!(products.len(), i + 2);
        assert_eq!(products.last().unwrap().name, *name);
    }
}

#[tokio::test]
async fn test_save_edit_replaces_matching_row() {
    let store = ShopStore::with_products([payload("Pen", 10.0, 1.5), payload("Pencil", 40.0, 0.5)]);
    let url = start_shop(store.clone()).await;
    let view = ProductView::new(HttpProductApi::with_url(url));
    view.mount().await.unwrap();

    assert!(view.begin_edit(1));
    view.edit_field(EditField::Price, "2.75");
    view.save_edit().await.unwrap();

    let state = view.snapshot();
    assert_eq!(state.products.len(), 2);
    assert_eq!(
        state.products[0],
        Product {
            id: 1,
            name: "Pen".to_string(),
            quantity: 10.0,
            price: 2.75,
        }
    );
    assert_eq!(state.products[1].name, "Pencil");
    assert!(state.editing.is_none());
}

#[tokio::test]
async fn test_switching_edit_makes_no_server_call() {
    let store = ShopStore::with_products([payload("Pen", 10.0, 1.5), payload("Pencil", 40.0, 0.5)]);
    let url = start_shop(store.clone()).await;
    let view = ProductView::new(HttpProductApi::with_url(url));
    view.mount().await.unwrap();

    view.begin_edit(1);
    view.edit_field(EditField::Name, "Fountain Pen");
    view.begin_edit(2);
    view.save_edit().await.unwrap();

    let products = store.list().unwrap();
    assert_eq!(products[0].name, "Pen");
    assert_eq!(view.products()[0].name, "Pen");
}

#[tokio::test]
async fn test_create_failure_keeps_draft_and_form() {
    let view = ProductView::new(HttpProductApi::with_url(unreachable_url().await));
    assert!(view.mount().await.is_err());

    view.toggle_add_form();
    view.set_draft_name("Notebook");
    view.set_draft_quantity("5");
    view.set_draft_price("3.25");
    let before = view.snapshot();

    assert!(view.submit_draft().await.is_err());

    let after = view.snapshot();
    assert_eq!(after, before);
    assert!(after.products.is_empty());
    assert!(after.add_form_open);
    assert_eq!(after.draft.name, "Notebook");
}

#[tokio::test]
async fn test_server_rejection_is_treated_as_failure() {
    let (view, _store) = mounted_view_with_pen().await;

    // 空数量输入解析为 NaN，序列化为 null，服务端拒绝解码
    view.toggle_add_form();
    view.set_draft_name("Broken");
    view.set_draft_quantity("");
    assert!(view.submit_draft().await.is_err());

    let state = view.snapshot();
    assert_eq!(state.products.len(), 1);
    assert!(state.add_form_open);
    assert_eq!(state.draft.name, "Broken");
}

#[tokio::test]
async fn test_update_unknown_id_returns_not_found() {
    let url = start_shop(ShopStore::new()).await;
    let api = HttpProductApi::with_url(url);

    let err = api.update(42, payload("Ghost", 1.0, 1.0)).await.unwrap_err();
    match err {
        product_view::ClientError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_rendered_table_follows_state() {
    let (view, _store) = mounted_view_with_pen().await;
    assert!(view.render().contains("[Edit]"));

    view.begin_edit(1);
    let out = view.render();
    assert!(out.contains("<Pen>"));
    assert!(out.contains("[Save]"));
}
