//! # 美化输出工具
//!
//! 提供统一的终端输出样式，所有消息走同一组带标记的打印入口。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/` 模块使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

fn print_tagged(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    print_tagged("[OK]".green().bold(), msg);
}

/// 打印错误消息（走 stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    print_tagged("[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    print_tagged("[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    print_tagged("[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
