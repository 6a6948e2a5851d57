//! # coupon 子命令 CLI 定义
//!
//! 优惠券列表查询与批量操作参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/coupon.rs`

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::models::{OperationKind, RecipientScope, TargetStatus};

/// coupon 子命令参数
#[derive(Args, Debug)]
pub struct CouponArgs {
    #[command(subcommand)]
    pub command: CouponCommands,
}

#[derive(Subcommand, Debug)]
pub enum CouponCommands {
    /// List coupons with optional status filter
    List(CouponListArgs),

    /// Run a batch operation over selected coupons
    Batch(CouponBatchArgs),
}

/// coupon list 参数
#[derive(Args, Debug)]
pub struct CouponListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,

    /// Filter by coupon status (e.g., online, offline)
    #[arg(long)]
    pub status: Option<String>,
}

/// coupon batch 参数
#[derive(Args, Debug)]
pub struct CouponBatchArgs {
    /// Coupon ids, comma/range separated (e.g., "3,5,10-12")
    pub ids: String,

    /// Operation to apply to every selected coupon
    #[arg(long, value_enum)]
    pub op: OperationKind,

    /// Target status (required for status-change)
    #[arg(long, value_enum)]
    pub status: Option<TargetStatus>,

    /// Explicit confirmation for delete
    #[arg(long, default_value_t = false)]
    pub confirmed: bool,

    /// Message text for send (at most 200 characters)
    #[arg(long)]
    pub message: Option<String>,

    /// Recipient scope for send
    #[arg(long, value_enum, default_value_t = RecipientScope::All)]
    pub scope: RecipientScope,

    /// Output CSV path for export
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip the interactive confirm step
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}
