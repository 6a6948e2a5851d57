//! # 批量操作向导状态机
//!
//! 驱动 配置 → 确认 → 执行 三步向导，并把执行委托给顺序执行器。
//!
//! ## 功能
//! - 零目标前置条件校验：不创建状态机实例
//! - 配置校验门禁：未通过则停留在配置步骤
//! - 确认步骤可回退编辑，进入执行后不可回头
//! - 执行完成后保存汇总结果，状态机到达终态
//!
//! ## 依赖关系
//! - 被各 `commands/` 模块驱动
//! - 使用 `batch/selector.rs` 校验配置
//! - 使用 `batch/executor.rs` 执行批次

use crate::batch::executor::{ExecutionResult, SequentialExecutor};
use crate::batch::selector;
use crate::error::{MallctlError, Result};
use crate::models::{BatchTarget, OperationConfig};

/// 向导步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// 选择操作类型并填写字段
    Config,
    /// 只读确认配置与目标列表
    Confirm,
    /// 执行批次并展示结果（终态）
    Execute,
}

impl WizardStep {
    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::Config => "config",
            WizardStep::Confirm => "confirm",
            WizardStep::Execute => "execute",
        }
    }
}

/// 批量操作向导
///
/// 目标快照从调用方借入，向导生命周期内只读；
/// 配置与执行结果由向导独占持有。
pub struct BatchWorkflow<'a> {
    step: WizardStep,
    targets: &'a [BatchTarget],
    config: Option<OperationConfig>,
    result: Option<ExecutionResult>,
}

impl<'a> BatchWorkflow<'a> {
    /// 打开向导
    ///
    /// 零目标视为前置条件失败，直接报错给调用方，不创建实例。
    pub fn open(targets: &'a [BatchTarget]) -> Result<Self> {
        if targets.is_empty() {
            return Err(MallctlError::EmptySelection);
        }

        Ok(BatchWorkflow {
            step: WizardStep::Config,
            targets,
            config: None,
            result: None,
        })
    }

    /// 当前步骤
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// 借出的目标快照
    pub fn targets(&self) -> &[BatchTarget] {
        self.targets
    }

    /// 当前配置
    pub fn config(&self) -> Option<&OperationConfig> {
        self.config.as_ref()
    }

    /// 填写操作配置（仅限配置步骤）
    pub fn configure(&mut self, config: OperationConfig) -> Result<()> {
        if self.step != WizardStep::Config {
            return Err(MallctlError::InvalidTransition {
                from: self.step.name(),
                action: "configure",
            });
        }

        self.config = Some(config);
        Ok(())
    }

    /// 配置 → 确认
    ///
    /// 校验失败时返回逐字段错误并停留在配置步骤。
    pub fn advance(&mut self) -> Result<()> {
        if self.step != WizardStep::Config {
            return Err(MallctlError::InvalidTransition {
                from: self.step.name(),
                action: "advance",
            });
        }

        let config = self.config.as_ref().ok_or_else(|| MallctlError::ConfigInvalid {
            errors: vec!["operation: no operation configured".to_string()],
        })?;

        let errors = selector::validate(config);
        if !errors.is_empty() {
            return Err(MallctlError::ConfigInvalid { errors });
        }

        self.step = WizardStep::Confirm;
        Ok(())
    }

    /// 确认 → 配置（回退编辑）
    pub fn back(&mut self) -> Result<()> {
        if self.step != WizardStep::Confirm {
            return Err(MallctlError::InvalidTransition {
                from: self.step.name(),
                action: "back",
            });
        }

        self.step = WizardStep::Config;
        Ok(())
    }

    /// 确认 → 执行
    ///
    /// 委托顺序执行器处理全部目标，保存并返回汇总结果。
    /// 执行是终态入口：没有从执行步骤重试的转移，
    /// 重试失败项需要开启新的向导实例。
    pub fn execute<F, P>(&mut self, per_item: F, on_progress: P) -> Result<&ExecutionResult>
    where
        F: FnMut(&BatchTarget, &OperationConfig) -> Result<()>,
        P: FnMut(u32),
    {
        if self.step != WizardStep::Confirm {
            return Err(MallctlError::InvalidTransition {
                from: self.step.name(),
                action: "execute",
            });
        }

        let config = self.config.as_ref().ok_or_else(|| MallctlError::ConfigInvalid {
            errors: vec!["operation: no operation configured".to_string()],
        })?;

        self.step = WizardStep::Execute;
        let result = SequentialExecutor::execute(self.targets, config, per_item, on_progress);
        Ok(self.result.insert(result))
    }

    /// 执行结果（仅终态可用）
    pub fn result(&self) -> Option<&ExecutionResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecipientScope, TargetStatus};

    fn targets(names: &[&str]) -> Vec<BatchTarget> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| BatchTarget::new(i as u64 + 1, *name, "online"))
            .collect()
    }

    #[test]
    fn test_zero_targets_refused_before_instance_exists() {
        let empty: Vec<BatchTarget> = Vec::new();
        match BatchWorkflow::open(&empty) {
            Err(MallctlError::EmptySelection) => {}
            other => panic!("expected EmptySelection, got {:?}", other.map(|w| w.step())),
        }
    }

    #[test]
    fn test_initial_step_is_config() {
        let targets = targets(&["T1"]);
        let wizard = BatchWorkflow::open(&targets).unwrap();
        assert_eq!(wizard.step(), WizardStep::Config);
        assert!(wizard.config().is_none());
        assert!(wizard.result().is_none());
    }

    #[test]
    fn test_unconfirmed_delete_blocks_advance() {
        let targets = targets(&["T1"]);
        let mut wizard = BatchWorkflow::open(&targets).unwrap();
        wizard
            .configure(OperationConfig::Delete { confirmed: false })
            .unwrap();

        match wizard.advance() {
            Err(MallctlError::ConfigInvalid { errors }) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].starts_with("confirmed:"));
            }
            other => panic!("expected ConfigInvalid, got {:?}", other),
        }
        // 校验失败后停留在配置步骤
        assert_eq!(wizard.step(), WizardStep::Config);
    }

    #[test]
    fn test_advance_without_config_is_blocked() {
        let targets = targets(&["T1"]);
        let mut wizard = BatchWorkflow::open(&targets).unwrap();
        assert!(matches!(
            wizard.advance(),
            Err(MallctlError::ConfigInvalid { .. })
        ));
        assert_eq!(wizard.step(), WizardStep::Config);
    }

    #[test]
    fn test_back_edge_returns_to_config() {
        let targets = targets(&["T1"]);
        let mut wizard = BatchWorkflow::open(&targets).unwrap();
        wizard
            .configure(OperationConfig::StatusChange {
                target: TargetStatus::Offline,
            })
            .unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirm);

        wizard.back().unwrap();
        assert_eq!(wizard.step(), WizardStep::Config);

        // 回退后可重新配置并再次前进
        wizard
            .configure(OperationConfig::Send {
                message: "final notice".to_string(),
                scope: RecipientScope::Member,
            })
            .unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirm);
    }

    #[test]
    fn test_execute_from_config_is_invalid() {
        let targets = targets(&["T1"]);
        let mut wizard = BatchWorkflow::open(&targets).unwrap();
        let result = wizard.execute(|_, _| Ok(()), |_| {});
        assert!(matches!(
            result,
            Err(MallctlError::InvalidTransition {
                from: "config",
                action: "execute",
            })
        ));
    }

    #[test]
    fn test_configure_after_confirm_is_invalid() {
        let targets = targets(&["T1"]);
        let mut wizard = BatchWorkflow::open(&targets).unwrap();
        wizard
            .configure(OperationConfig::Delete { confirmed: true })
            .unwrap();
        wizard.advance().unwrap();

        let result = wizard.configure(OperationConfig::Delete { confirmed: false });
        assert!(matches!(
            result,
            Err(MallctlError::InvalidTransition { from: "confirm", .. })
        ));
    }

    #[test]
    fn test_full_run_reaches_terminal_state_with_result() {
        let targets = targets(&["T1", "T2", "T3"]);
        let mut wizard = BatchWorkflow::open(&targets).unwrap();
        wizard
            .configure(OperationConfig::StatusChange {
                target: TargetStatus::Offline,
            })
            .unwrap();
        wizard.advance().unwrap();

        let result = wizard.execute(|_, _| Ok(()), |_| {}).unwrap();
        assert_eq!(result.success, 3);
        assert_eq!(result.failed, 0);

        assert_eq!(wizard.step(), WizardStep::Execute);
        assert_eq!(wizard.result().unwrap().total(), 3);
    }

    #[test]
    fn test_no_retry_from_terminal_state() {
        let targets = targets(&["T1"]);
        let mut wizard = BatchWorkflow::open(&targets).unwrap();
        wizard
            .configure(OperationConfig::StatusChange {
                target: TargetStatus::Online,
            })
            .unwrap();
        wizard.advance().unwrap();
        wizard.execute(|_, _| Ok(()), |_| {}).unwrap();

        // 终态后 execute / advance / back 均为非法转移
        assert!(wizard.execute(|_, _| Ok(()), |_| {}).is_err());
        assert!(wizard.advance().is_err());
        assert!(wizard.back().is_err());
    }
}
