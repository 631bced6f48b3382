use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 请求参数错误（返回 4xx）
    Request(RequestError),
    /// 图片资源处理错误
    Asset(AssetError),
    /// 浏览器渲染错误
    Render(RenderError),
    /// 文件操作错误
    File(FileError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(e) => write!(f, "请求错误: {}", e),
            AppError::Asset(e) => write!(f, "资源错误: {}", e),
            AppError::Render(e) => write!(f, "渲染错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Request(e) => Some(e),
            AppError::Asset(e) => Some(e),
            AppError::Render(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 请求参数错误
#[derive(Debug)]
pub enum RequestError {
    /// 请求体缺少 HTML 内容
    MissingHtml,
    /// 页面尺寸无法解析
    InvalidDimension { value: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingHtml => write!(f, "请求缺少 HTML 内容"),
            RequestError::InvalidDimension { value } => {
                write!(f, "无法解析页面尺寸: '{}'", value)
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// 图片资源处理错误
///
/// 注意：资源文件不存在不算错误，内联步骤会打上 data-missing 标记继续处理
#[derive(Debug)]
pub enum AssetError {
    /// 读取资源文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 图片解码或重编码失败
    CodecFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::ReadFailed { path, source } => {
                write!(f, "读取资源文件失败 ({}): {}", path, source)
            }
            AssetError::CodecFailed { path, source } => {
                write!(f, "图片处理失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::ReadFailed { source, .. } | AssetError::CodecFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 浏览器渲染错误
#[derive(Debug)]
pub enum RenderError {
    /// 浏览器配置失败
    ConfigurationFailed { message: String },
    /// 启动浏览器失败
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 创建页面失败
    PageCreationFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 设置页面内容失败
    SetContentFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 执行脚本失败
    ScriptExecutionFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 打印 PDF 失败
    PdfFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ConfigurationFailed { message } => {
                write!(f, "浏览器配置失败: {}", message)
            }
            RenderError::LaunchFailed { source } => {
                write!(f, "启动无头浏览器失败: {}", source)
            }
            RenderError::PageCreationFailed { source } => {
                write!(f, "创建页面失败: {}", source)
            }
            RenderError::SetContentFailed { source } => {
                write!(f, "设置页面内容失败: {}", source)
            }
            RenderError::ScriptExecutionFailed { source } => {
                write!(f, "执行脚本失败: {}", source)
            }
            RenderError::PdfFailed { source } => {
                write!(f, "打印 PDF 失败: {}", source)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::ConfigurationFailed { .. } => None,
            RenderError::LaunchFailed { source }
            | RenderError::PageCreationFailed { source }
            | RenderError::SetContentFailed { source }
            | RenderError::ScriptExecutionFailed { source }
            | RenderError::PdfFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// CSV 处理失败
    CsvFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
            FileError::CsvFailed { source } => write!(f, "CSV处理失败: {}", source),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::TomlParseFailed { source, .. }
            | FileError::CsvFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Render(RenderError::ScriptExecutionFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::File(FileError::CsvFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建资源读取错误
    pub fn asset_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Asset(AssetError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建图片编解码错误
    pub fn asset_codec_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Asset(AssetError::CodecFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
