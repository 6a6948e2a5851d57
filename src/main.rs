//! # mallctl - 商城后台管理工具箱
//!
//! 将后台管理操作收敛为单一可执行文件，通过管理 REST API 驱动，
//! 业务规则全部在服务端。
//!
//! ## 子命令
//! - `coupon`  - 优惠券管理与批量操作
//! - `refund`  - 退款批量审核
//! - `user`    - 用户账号管理
//! - `message` - 平台消息批量发送
//! - `stats`   - 数据看板与趋势图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── api/      (管理接口客户端)
//!   │     ├── batch/    (批量操作向导与执行器)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod api;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
