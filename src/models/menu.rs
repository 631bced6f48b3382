//! 菜单领域模型
//!
//! 与前端编辑器共享的数据结构：一条菜品记录属于且仅属于一个分类，
//! 图片列表可以为空

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 菜品标签（饮食选项）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuOption {
    /// 推荐
    Recommend,
    /// 辣
    Spicy,
    /// 纯素
    Vegan,
    /// 素食
    Vegetarian,
    /// 无麸质
    #[serde(rename = "Gluten Free")]
    GlutenFree,
}

/// 标签文本到枚举的静态映射，兼容前端两种拼写
static OPTION_LABELS: phf::Map<&'static str, MenuOption> = phf::phf_map! {
    "Recommend" => MenuOption::Recommend,
    "Spicy" => MenuOption::Spicy,
    "Vegan" => MenuOption::Vegan,
    "Vegetarian" => MenuOption::Vegetarian,
    "Gluten Free" => MenuOption::GlutenFree,
    "GlutenFree" => MenuOption::GlutenFree,
};

impl MenuOption {
    /// 导出列顺序，与前端表头保持一致
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Recommend,
        MenuOption::Spicy,
        MenuOption::Vegan,
        MenuOption::Vegetarian,
        MenuOption::GlutenFree,
    ];

    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Recommend => "Recommend",
            MenuOption::Spicy => "Spicy",
            MenuOption::Vegan => "Vegan",
            MenuOption::Vegetarian => "Vegetarian",
            MenuOption::GlutenFree => "Gluten Free",
        }
    }

    /// 导出表头列名（无空格变体）
    pub fn column_header(self) -> &'static str {
        match self {
            MenuOption::GlutenFree => "GlutenFree",
            other => other.label(),
        }
    }

    /// 默认图标资源路径
    pub fn default_icon_asset(self) -> &'static str {
        match self {
            MenuOption::Recommend => "/src/asset/svg/recommend.svg",
            MenuOption::Spicy => "/src/asset/svg/spicy.svg",
            MenuOption::Vegan => "/src/asset/svg/vegan.svg",
            MenuOption::Vegetarian => "/src/asset/svg/vegetarian.svg",
            MenuOption::GlutenFree => "/src/asset/svg/glutenfree.svg",
        }
    }

    /// 从标签文本解析（精确匹配，忽略首尾空白）
    pub fn from_label(s: &str) -> Option<Self> {
        OPTION_LABELS.get(s.trim()).copied()
    }
}

/// 菜品图片（文件名 + base64 编码内容）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuImage {
    pub name: String,
    pub base64: String,
}

/// 菜品记录
///
/// 字段名与前端 JSON 保持一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// 唯一标识（创建或导入时生成）
    pub id: String,
    #[serde(rename = "No")]
    pub no: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Measure", default)]
    pub measure: String,
    #[serde(rename = "ChineseName", default)]
    pub chinese_name: String,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Options", default)]
    pub options: Vec<MenuOption>,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(
        rename = "mainImageBase64",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub main_image_base64: Option<String>,
    #[serde(rename = "images", default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<MenuImage>,
    /// 最后修改时间（毫秒时间戳）
    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
}

impl MenuItem {
    /// 创建一条新菜品记录，自动生成 id 与时间戳
    pub fn new(no: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            no: no.into(),
            price: String::new(),
            name: name.into(),
            measure: String::new(),
            chinese_name: String::new(),
            description: None,
            options: Vec::new(),
            category: category.into(),
            main_image_base64: None,
            images: Vec::new(),
            last_updated: Some(chrono::Utc::now().timestamp_millis()),
        }
    }

    pub fn has_option(&self, option: MenuOption) -> bool {
        self.options.contains(&option)
    }
}
