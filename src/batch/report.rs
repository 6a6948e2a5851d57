//! # 批次确认摘要与结果报告
//!
//! 渲染向导确认步骤的只读摘要，以及执行终态：
//! 全部成功或部分失败（逐条列出失败目标与原因）。
//!
//! ## 依赖关系
//! - 被各 `commands/` 模块调用
//! - 使用 `utils/output.rs` 与 `tabled`

use tabled::{Table, Tabled};

use crate::batch::executor::ExecutionResult;
use crate::batch::workflow::BatchWorkflow;
use crate::utils::output;

/// 确认页目标行
#[derive(Tabled)]
struct TargetRow {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 渲染确认步骤：配置摘要 + 完整目标列表
pub fn render_confirm(workflow: &BatchWorkflow<'_>) {
    let rows: Vec<TargetRow> = workflow
        .targets()
        .iter()
        .map(|t| TargetRow {
            id: t.id,
            name: t.name.clone(),
            status: t.status.clone(),
        })
        .collect();

    println!("{}", Table::new(&rows));

    if let Some(config) = workflow.config() {
        output::print_info(&format!(
            "Operation [{}]: {} ({} targets)",
            config.kind(),
            config.summary(),
            workflow.targets().len()
        ));
        if config.is_destructive() {
            output::print_warning("This operation is irreversible.");
        }
    }
}

/// 渲染执行汇总
///
/// 部分失败时逐条列出 `errors`，不提供重试入口。
pub fn render(result: &ExecutionResult) {
    output::print_separator();

    if result.is_full_success() {
        output::print_done(&format!(
            "Batch finished: all {} targets succeeded",
            result.success
        ));
        return;
    }

    output::print_warning(&format!(
        "Batch finished with partial failure: {} succeeded, {} of {} failed",
        result.success,
        result.failed,
        result.total()
    ));

    for error in &result.errors {
        output::print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // render 只做终端输出；这里守住它依赖的终态判定
    #[test]
    fn test_full_success_detection() {
        let result = ExecutionResult {
            success: 3,
            failed: 0,
            errors: vec![],
        };
        assert!(result.is_full_success());
        render(&result);
    }

    #[test]
    fn test_partial_failure_detection() {
        let mut result = ExecutionResult::default();
        result.record_success();
        result.record_failure("T2", "insufficient stock");
        assert!(!result.is_full_success());
        assert_eq!(result.errors.len(), result.failed);
        render(&result);
    }
}
