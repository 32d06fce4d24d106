use thiserror::Error;

/// 应用程序错误类型
///
/// 全部集中在 I/O 边界：解析流水线本身不产生错误，
/// 无法识别的题目块直接被丢弃（见 parsing 模块）。
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入文件不存在
    #[error("输入文件不存在: {path}")]
    InputNotFound { path: String },

    /// 既没有输入文件，标准输入又是交互终端
    #[error("请提供输入文件路径，或通过管道传入文本")]
    StdinUnavailable,

    /// 读取输入文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 读取标准输入失败
    #[error("读取标准输入失败: {source}")]
    StdinReadFailed {
        #[source]
        source: std::io::Error,
    },

    /// 写入输出文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// 映射为进程退出码
    ///
    /// 缺少标准输入（交互终端）退出码为 2，其余错误为 1
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::StdinUnavailable => 2,
            _ => 1,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
