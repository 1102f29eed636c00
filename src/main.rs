use product_view::config::load_config;
use product_view::infrastructure::logger::Logger;
use product_view::{EditField, HttpProductApi, ProductView};
use std::env;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

type View = ProductView<HttpProductApi>;

enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个参数可选：配置文件路径
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    let _guard = Logger::init(&config.logging)?;

    info!("连接商品服务: {}", config.api.collection_url());
    let view = ProductView::new(HttpProductApi::new(&config.api));
    let mut changes = view.subscribe();

    // 首次显示时拉取一次列表，失败只记录日志
    let mounting = view.clone();
    tokio::spawn(async move {
        let _ = mounting.mount().await;
    });

    print!("{}", view.render());
    print_usage();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Flow::Quit = handle_command(&view, line.trim()) {
                    break;
                }
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                print!("{}", view.render());
            }
        }
    }

    info!("退出");
    Ok(())
}

fn handle_command(view: &View, line: &str) -> Flow {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

    match command {
        "" => {}
        "add" => view.toggle_add_form(),
        "name" | "qty" | "price" => {
            // 表单输入框只在表单打开时存在
            if !view.snapshot().add_form_open {
                println!("新增表单未打开，先输入 add");
                return Flow::Continue;
            }
            match command {
                "name" => view.set_draft_name(rest),
                "qty" => view.set_draft_quantity(rest),
                _ => view.set_draft_price(rest),
            }
        }
        "submit" => {
            let view = view.clone();
            tokio::spawn(async move {
                let _ = view.submit_draft().await;
            });
        }
        "edit" => match rest.trim().parse::<i64>() {
            Ok(id) => {
                if !view.begin_edit(id) {
                    println!("没有 id 为 {} 的商品", id);
                }
            }
            Err(_) => println!("用法: edit <id>"),
        },
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            let Ok(field) = field.parse::<EditField>() else {
                println!("用法: set <name|qty|price> <value>");
                return Flow::Continue;
            };
            if view.snapshot().editing.is_none() {
                println!("没有正在编辑的商品，先输入 edit <id>");
                return Flow::Continue;
            }
            view.edit_field(field, value);
        }
        "save" => {
            let view = view.clone();
            tokio::spawn(async move {
                let _ = view.save_edit().await;
            });
        }
        "show" => print!("{}", view.render()),
        "help" => print_usage(),
        "quit" | "exit" => return Flow::Quit,
        other => {
            println!("未知命令: {}", other);
            print_usage();
        }
    }

    Flow::Continue
}

fn print_usage() {
    println!();
    println!("可用命令:");
    println!("  add                       - 打开/关闭新增表单");
    println!("  name <text>               - 设置商品名称");
    println!("  qty <n>                   - 设置数量");
    println!("  price <n>                 - 设置价格");
    println!("  submit                    - 提交新增表单");
    println!("  edit <id>                 - 编辑某一行");
    println!("  set <name|qty|price> <v>  - 修改正在编辑的字段");
    println!("  save                      - 保存编辑");
    println!("  show                      - 重新显示表格");
    println!("  help                      - 显示帮助");
    println!("  quit                      - 退出");
    println!();
}
