//! # 交互确认工具
//!
//! 向导确认步骤的 y/N 询问。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `console` crate

use console::Term;

use crate::error::Result;

/// 在终端询问 y/N，默认否
pub fn confirm(question: &str) -> Result<bool> {
    let term = Term::stderr();
    term.write_str(&format!("{} [y/N] ", question))?;
    let answer = term.read_line()?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
