//! # user 子命令 CLI 定义
//!
//! 用户账号列表与批量启用/停用参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/user.rs`

use clap::{Args, Subcommand, ValueEnum};

/// user 子命令参数
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List user accounts with optional keyword filter
    List(UserListArgs),

    /// Enable or disable selected user accounts in batch
    Batch(UserBatchArgs),
}

/// user list 参数
#[derive(Args, Debug)]
pub struct UserListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,

    /// Keyword filter on nickname/phone
    #[arg(long)]
    pub keyword: Option<String>,
}

/// 账号批量操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountAction {
    Enable,
    Disable,
}

/// user batch 参数
#[derive(Args, Debug)]
pub struct UserBatchArgs {
    /// User ids, comma/range separated (e.g., "3,5,10-12")
    pub ids: String,

    /// Action applied to every selected account
    #[arg(long, value_enum)]
    pub action: AccountAction,

    /// Skip the interactive confirm step
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}
