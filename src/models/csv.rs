//! 菜单的表格交换格式
//!
//! 与前端编辑器约定：导入用逗号分隔，导出用制表符分隔，
//! 两者的列顺序是固定的（历史原因，两边并不一致）

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{AppError, AppResult};
use crate::models::menu::{MenuItem, MenuOption};

/// 导入列顺序: No, Name, ChineseName, Description, Price, Options, Category
const IMPORT_COLUMNS: usize = 7;

/// 导出表头的固定前缀，标签列接在后面
const EXPORT_FIXED_HEADER: [&str; 5] = ["No.", "Price", "Name", "Chinese Name", "Description"];

/// 完整导出表头：固定列 + 标签列（顺序取自 MenuOption::ALL）
fn export_header() -> Vec<&'static str> {
    let mut header = EXPORT_FIXED_HEADER.to_vec();
    header.extend(MenuOption::ALL.map(MenuOption::column_header));
    header
}

/// 解析逗号分隔的菜单文本，首行为表头
///
/// Options 列用 `|` 分隔多个标签，空分类归入 Uncategorized
pub fn import_menu_csv(text: &str) -> AppResult<Vec<MenuItem>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;

        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        let name = field(1);
        if name.is_empty() && field(0).is_empty() {
            continue;
        }

        let options: Vec<MenuOption> = field(5)
            .split('|')
            .filter_map(MenuOption::from_label)
            .collect();

        let category = {
            let c = field(6);
            if c.is_empty() {
                "Uncategorized".to_string()
            } else {
                c
            }
        };

        let mut item = MenuItem::new(field(0), name, category);
        item.chinese_name = field(2);
        let description = field(3);
        item.description = (!description.is_empty()).then_some(description);
        item.price = field(4);
        item.options = options;
        items.push(item);
    }

    Ok(items)
}

/// 导出为制表符分隔文本
///
/// 分类变化时插入一行分类行（分类名放在 Name 列，其余列留空），
/// 标签列用 X 标记
pub fn export_menu_tsv(items: &[MenuItem]) -> AppResult<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());

    let header = export_header();
    writer.write_record(&header)?;

    let mut current_category = String::new();
    for item in items {
        if !item.category.is_empty() && item.category != current_category {
            current_category = item.category.clone();
            let mut category_row = vec![""; header.len()];
            category_row[2] = current_category.as_str();
            writer.write_record(&category_row)?;
        }

        let mut row: Vec<String> = vec![
            item.no.clone(),
            item.price.clone(),
            item.name.clone(),
            item.chinese_name.clone(),
            item.description.clone().unwrap_or_default(),
        ];
        for option in MenuOption::ALL {
            row.push(if item.has_option(option) { "X" } else { "" }.to_string());
        }
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Other(format!("TSV 写出失败: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(format!("TSV 编码失败: {}", e)))
}
