//! 物理页面尺寸
//!
//! 前端传来的是 CSS 风格的长度字符串（如 "210mm"），
//! 而 CDP 的 printToPDF 只接受英寸，这里负责换算

use regex::Regex;

use crate::error::{AppError, AppResult, RequestError};

/// 页面物理尺寸（英寸）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_in: f64,
    pub height_in: f64,
}

/// 长度字符串匹配：数字 + 可选单位（mm/cm/in/px），无单位按毫米处理
const DIMENSION_PATTERN: &str = r"^\s*([0-9]+(?:\.[0-9]+)?)\s*(mm|cm|in|px)?\s*$";

impl PageSize {
    /// 解析页面宽高字符串
    ///
    /// # 参数
    /// - `width`: 宽度字符串（如 "210mm"）
    /// - `height`: 高度字符串（如 "297mm"）
    pub fn parse(width: &str, height: &str) -> AppResult<Self> {
        Ok(Self {
            width_in: dimension_to_inches(width)?,
            height_in: dimension_to_inches(height)?,
        })
    }
}

/// 将单个长度字符串换算为英寸
fn dimension_to_inches(value: &str) -> AppResult<f64> {
    let re = Regex::new(DIMENSION_PATTERN)
        .map_err(|e| AppError::Other(format!("尺寸正则构建失败: {}", e)))?;

    let caps = re.captures(value).ok_or_else(|| {
        AppError::Request(RequestError::InvalidDimension {
            value: value.to_string(),
        })
    })?;

    let number: f64 = caps[1].parse().map_err(|_| {
        AppError::Request(RequestError::InvalidDimension {
            value: value.to_string(),
        })
    })?;

    let inches = match caps.get(2).map(|m| m.as_str()) {
        Some("cm") => number * 10.0 / 25.4,
        Some("in") => number,
        Some("px") => number / 96.0,
        // 无单位按毫米处理，与前端默认值保持一致
        _ => number / 25.4,
    };

    Ok(inches)
}
