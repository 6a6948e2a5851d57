//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `coupon`: 优惠券管理（list / batch）
//! - `refund`: 退款审核（list / batch）
//! - `user`: 用户账号管理（list / batch）
//! - `message`: 平台消息（list / batch）
//! - `stats`: 数据看板（summary / trend）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: coupon, refund, user, message, stats

pub mod coupon;
pub mod message;
pub mod refund;
pub mod stats;
pub mod user;

use clap::{Parser, Subcommand};

/// mallctl - 商城后台管理工具箱
#[derive(Parser)]
#[command(name = "mallctl")]
#[command(version)]
#[command(about = "Back-office administration toolkit for the mall platform", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the admin REST API
    #[arg(
        long,
        global = true,
        env = "MALLCTL_API_URL",
        default_value = "http://localhost:28019"
    )]
    pub api_url: String,

    /// Bearer token for the admin REST API
    #[arg(long, global = true, env = "MALLCTL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Manage coupons and run coupon batch operations
    Coupon(coupon::CouponArgs),

    /// Review refund requests in batch
    Refund(refund::RefundArgs),

    /// Manage user accounts
    User(user::UserArgs),

    /// List platform notices and send messages in batch
    Message(message::MessageArgs),

    /// Dashboard statistics and trend charts
    Stats(stats::StatsArgs),
}
