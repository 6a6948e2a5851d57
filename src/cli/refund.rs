//! # refund 子命令 CLI 定义
//!
//! 退款申请列表与批量审核参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/refund.rs`

use clap::{Args, Subcommand, ValueEnum};

/// refund 子命令参数
#[derive(Args, Debug)]
pub struct RefundArgs {
    #[command(subcommand)]
    pub command: RefundCommands,
}

#[derive(Subcommand, Debug)]
pub enum RefundCommands {
    /// List refund requests
    List(RefundListArgs),

    /// Approve or reject selected refund requests in batch
    Batch(RefundBatchArgs),
}

/// refund list 参数
#[derive(Args, Debug)]
pub struct RefundListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,
}

/// 批量审核决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RefundDecision {
    Approve,
    Reject,
}

/// refund batch 参数
#[derive(Args, Debug)]
pub struct RefundBatchArgs {
    /// Refund ids, comma/range separated (e.g., "3,5,10-12")
    pub ids: String,

    /// Decision applied to every selected refund
    #[arg(long, value_enum)]
    pub decision: RefundDecision,

    /// Skip the interactive confirm step
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}
