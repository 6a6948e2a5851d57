//! # 数据模型模块
//!
//! 定义批量操作的目标快照与操作配置模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/`, `api/` 使用
//! - 无外部模块依赖

pub mod operation;
pub mod target;

pub use operation::{OperationConfig, OperationKind, RecipientScope, TargetStatus};
pub use target::BatchTarget;
