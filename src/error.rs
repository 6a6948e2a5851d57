//! # 统一错误处理模块
//!
//! 定义 mallctl 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mallctl 统一错误类型
#[derive(Error, Debug)]
pub enum MallctlError {
    // ─────────────────────────────────────────────────────────────
    // API 错误
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API rejected the request: {message}")]
    ApiRejected { message: String },

    #[error("Unexpected API response: {reason}")]
    InvalidResponse { reason: String },

    // ─────────────────────────────────────────────────────────────
    // 批量工作流错误
    // ─────────────────────────────────────────────────────────────
    #[error("No targets selected: a batch operation requires at least one item")]
    EmptySelection,

    #[error("Invalid operation config:\n{}", .errors.join("\n"))]
    ConfigInvalid { errors: Vec<String> },

    #[error("Invalid wizard transition: cannot {action} from the {from} step")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid id range format: {0}")]
    InvalidRange(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    // ─────────────────────────────────────────────────────────────
    // 文件与终端错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MallctlError>;
