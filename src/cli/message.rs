//! # message 子命令 CLI 定义
//!
//! 平台通知列表与批量发送参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/message.rs`

use clap::{Args, Subcommand};

/// message 子命令参数
#[derive(Args, Debug)]
pub struct MessageArgs {
    #[command(subcommand)]
    pub command: MessageCommands,
}

#[derive(Subcommand, Debug)]
pub enum MessageCommands {
    /// List platform notices
    List(MessageListArgs),

    /// Send a message to selected users in batch
    Batch(MessageBatchArgs),
}

/// message list 参数
#[derive(Args, Debug)]
pub struct MessageListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,
}

/// message batch 参数
#[derive(Args, Debug)]
pub struct MessageBatchArgs {
    /// User ids, comma/range separated (e.g., "3,5,10-12")
    pub ids: String,

    /// Message text (at most 200 characters)
    #[arg(long)]
    pub message: String,

    /// Skip the interactive confirm step
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}
