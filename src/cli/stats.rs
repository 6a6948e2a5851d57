//! # stats 子命令 CLI 定义
//!
//! 数据看板汇总与趋势查询参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/stats.rs`

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// stats 子命令参数
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommands,
}

#[derive(Subcommand, Debug)]
pub enum StatsCommands {
    /// Show dashboard summary tiles
    Summary,

    /// Show the N-day order/sales trend
    Trend(TrendArgs),
}

/// stats trend 参数
#[derive(Args, Debug)]
pub struct TrendArgs {
    /// Number of days to fetch
    #[arg(long, default_value_t = 7)]
    pub days: u32,

    /// Start date (YYYY-MM-DD), defaults to server-side "today - days"
    #[arg(long)]
    pub since: Option<String>,

    /// Save the trend data to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Render the trend to a PNG chart
    #[arg(long)]
    pub plot: Option<PathBuf>,
}
