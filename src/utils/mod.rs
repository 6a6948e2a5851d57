//! # 工具模块
//!
//! 终端输出、进度条与交互确认的统一封装。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/report.rs` 使用
//! - 使用 `colored`, `indicatif`, `console`

pub mod output;
pub mod progress;
pub mod prompt;
