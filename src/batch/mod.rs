//! # 批量操作工作流模块
//!
//! 提供统一的批量操作能力：三步向导（配置 → 确认 → 执行）、
//! 逐项顺序执行与部分失败汇总。
//!
//! ## 功能
//! - 操作类型到必填字段的纯映射
//! - 向导状态机与前置条件校验
//! - 顺序执行器：逐项调用、进度回调、失败累积
//! - 终态报告：全部成功 / 部分失败
//!
//! ## 依赖关系
//! - 被各 `commands/` 模块使用
//! - 使用 `models/` 的目标快照与操作配置

pub mod executor;
pub mod report;
pub mod selector;
pub mod workflow;

pub use executor::{ExecutionResult, SequentialExecutor};
pub use selector::{required_fields, validate, FieldSpec};
pub use workflow::{BatchWorkflow, WizardStep};
