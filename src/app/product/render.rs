//! 文本渲染
//!
//! 渲染是状态的纯函数，每次都重新生成整张表格。

use super::model::{Draft, Product};
use super::state::ViewState;
use std::fmt::Write;

const HEADERS: [&str; 5] = ["ID", "Name", "Quantity", "Price", "Operations"];

/// 渲染完整视图：标题、新增区域（表单打开时附带弹出表单）和商品表格
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    out.push_str("Products\n\n");
    out.push_str("Add Product\n");
    out.push_str("[Add Product]\n");
    if state.add_form_open {
        render_form(&mut out, &state.draft);
    }

    out.push_str("\nProduct List\n");
    let rows: Vec<[String; 5]> = state
        .products
        .iter()
        .map(|product| match &state.editing {
            Some(editing) if editing.id == product.id => editing_row(editing),
            _ => viewing_row(product),
        })
        .collect();
    render_table(&mut out, &rows);

    out
}

fn render_form(out: &mut String, draft: &Draft) {
    out.push_str("+-- popup ------------------------\n");
    let _ = writeln!(out, "| Product Name: {}", input(&draft.name));
    let _ = writeln!(out, "| Quantity: {}", input(&number_input(draft.quantity)));
    let _ = writeln!(out, "| Price: {}", input(&number_input(draft.price)));
    out.push_str("| [Add]\n");
    out.push_str("+---------------------------------\n");
}

fn viewing_row(product: &Product) -> [String; 5] {
    [
        product.id.to_string(),
        product.name.clone(),
        product.quantity.to_string(),
        product.price.to_string(),
        "[Edit]".to_string(),
    ]
}

fn editing_row(editing: &Product) -> [String; 5] {
    [
        editing.id.to_string(),
        input(&editing.name),
        input(&number_input(editing.quantity)),
        input(&number_input(editing.price)),
        "[Save]".to_string(),
    ]
}

fn input(value: &str) -> String {
    format!("<{}>", value)
}

/// 数字输入框无法显示 NaN / Infinity，渲染为空
fn number_input(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

fn render_table(out: &mut String, rows: &[[String; 5]]) {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{}+\n", separator);

    out.push_str(&separator);
    write_row(out, &HEADERS.map(String::from), &widths);
    out.push_str(&separator);
    for row in rows {
        write_row(out, row, &widths);
    }
    out.push_str(&separator);
}

fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        let _ = write!(out, " {}{} |", cell, " ".repeat(pad));
    }
    out.push('\n');
}
