//! # 顺序执行器
//!
//! 按输入顺序逐项执行批量操作，累积成功/失败计数与错误消息。
//!
//! ## 功能
//! - 严格顺序执行，单项一次尝试、无重试
//! - 单项失败不中断批次，失败信息按输入顺序追加
//! - 每项完成后回调整数百分比进度
//!
//! ## 依赖关系
//! - 被 `batch/workflow.rs` 调用
//! - 使用 `models/` 的目标快照与操作配置

use crate::error::Result;
use crate::models::{BatchTarget, OperationConfig};

/// 批量执行汇总结果
///
/// 不变式：任意时刻 `success + failed` 等于已处理的目标数，
/// `errors.len()` 等于 `failed`，顺序与失败目标的输入顺序一致。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情，逐项追加
    pub errors: Vec<String>,
}

impl ExecutionResult {
    /// 记录一次成功
    pub fn record_success(&mut self) {
        self.success += 1;
    }

    /// 记录一次失败并追加格式化错误
    pub fn record_failure(&mut self, name: &str, error: impl std::fmt::Display) {
        self.failed += 1;
        self.errors.push(format!("{} operation failed: {}", name, error));
    }

    /// 已处理总数
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 是否全部成功
    pub fn is_full_success(&self) -> bool {
        self.failed == 0
    }
}

/// 顺序执行器
pub struct SequentialExecutor;

impl SequentialExecutor {
    /// 逐项执行批量操作
    ///
    /// `per_item` 为外部提供的单项操作调用（REST 协作方的薄封装），
    /// `on_progress` 在每项完成后收到四舍五入的整数百分比。
    pub fn execute<F, P>(
        targets: &[BatchTarget],
        config: &OperationConfig,
        mut per_item: F,
        mut on_progress: P,
    ) -> ExecutionResult
    where
        F: FnMut(&BatchTarget, &OperationConfig) -> Result<()>,
        P: FnMut(u32),
    {
        let total = targets.len();
        let mut result = ExecutionResult::default();

        for (index, target) in targets.iter().enumerate() {
            match per_item(target, config) {
                Ok(()) => result.record_success(),
                Err(e) => result.record_failure(&target.name, e),
            }

            let percent = (((index + 1) as f64 / total as f64) * 100.0).round() as u32;
            on_progress(percent);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MallctlError;
    use crate::models::TargetStatus;

    fn targets(names: &[&str]) -> Vec<BatchTarget> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| BatchTarget::new(i as u64 + 1, *name, "online"))
            .collect()
    }

    fn status_change() -> OperationConfig {
        OperationConfig::StatusChange {
            target: TargetStatus::Offline,
        }
    }

    #[test]
    fn test_all_succeed() {
        let targets = targets(&["T1", "T2", "T3"]);
        let result =
            SequentialExecutor::execute(&targets, &status_change(), |_, _| Ok(()), |_| {});

        assert_eq!(result.success, 3);
        assert_eq!(result.failed, 0);
        assert!(result.errors.is_empty());
        assert!(result.is_full_success());
    }

    #[test]
    fn test_partial_failure_message_format() {
        let targets = targets(&["T1", "T2"]);
        let result = SequentialExecutor::execute(
            &targets,
            &status_change(),
            |target, _| {
                if target.name == "T2" {
                    Err(MallctlError::ApiRejected {
                        message: "insufficient stock".to_string(),
                    })
                } else {
                    Ok(())
                }
            },
            |_| {},
        );

        assert_eq!(result.success, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(
            result.errors,
            vec!["T2 operation failed: API rejected the request: insufficient stock"]
        );
    }

    #[test]
    fn test_failure_never_aborts_batch() {
        let targets = targets(&["A", "B", "C", "D"]);
        let mut calls = 0usize;
        let result = SequentialExecutor::execute(
            &targets,
            &status_change(),
            |target, _| {
                calls += 1;
                if target.name == "B" || target.name == "C" {
                    Err(MallctlError::Other("boom".to_string()))
                } else {
                    Ok(())
                }
            },
            |_| {},
        );

        // 每个目标恰好尝试一次，失败不阻断后续
        assert_eq!(calls, 4);
        assert_eq!(result.total(), 4);
        assert_eq!(result.success, 2);
        assert_eq!(result.failed, 2);
        // 错误顺序与失败目标的输入顺序一致
        assert!(result.errors[0].starts_with("B "));
        assert!(result.errors[1].starts_with("C "));
    }

    #[test]
    fn test_errors_len_matches_failed_count() {
        let targets = targets(&["A", "B", "C"]);
        let result = SequentialExecutor::execute(
            &targets,
            &status_change(),
            |_, _| Err(MallctlError::Other("down".to_string())),
            |_| {},
        );

        assert_eq!(result.success + result.failed, targets.len());
        assert_eq!(result.errors.len(), result.failed);
    }

    #[test]
    fn test_structural_failure_finishes_batch() {
        // per_item 结构性失败时等价于每项以同一消息失败
        let targets = targets(&["A", "B", "C"]);
        let result = SequentialExecutor::execute(
            &targets,
            &status_change(),
            |_, _| {
                Err(MallctlError::ApiRejected {
                    message: "endpoint gone".to_string(),
                })
            },
            |_| {},
        );

        assert_eq!(result.failed, 3);
        assert!(result
            .errors
            .iter()
            .all(|e| e.ends_with("endpoint gone")));
    }

    #[test]
    fn test_progress_is_rounded_percent_in_order() {
        let targets = targets(&["A", "B", "C"]);
        let mut seen = Vec::new();
        SequentialExecutor::execute(&targets, &status_change(), |_, _| Ok(()), |p| seen.push(p));

        // 1/3 -> 33, 2/3 -> 67, 3/3 -> 100
        assert_eq!(seen, vec![33, 67, 100]);
    }

    #[test]
    fn test_single_target_progress() {
        let targets = targets(&["only"]);
        let mut seen = Vec::new();
        SequentialExecutor::execute(&targets, &status_change(), |_, _| Ok(()), |p| seen.push(p));
        assert_eq!(seen, vec![100]);
    }
}
