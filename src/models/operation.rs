//! # 批量操作配置模型
//!
//! 操作类型与各类型的专属配置字段。配置在向导第一步创建，
//! 进入执行阶段后不再修改。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 被 `cli/` 作为 value_enum 使用

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 批量操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OperationKind {
    /// 修改目标状态
    StatusChange,
    /// 删除目标
    Delete,
    /// 向目标发送消息/推送
    Send,
    /// 导出目标明细
    Export,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::StatusChange => write!(f, "status-change"),
            OperationKind::Delete => write!(f, "delete"),
            OperationKind::Send => write!(f, "send"),
            OperationKind::Export => write!(f, "export"),
        }
    }
}

/// 平台固定的目标状态集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum TargetStatus {
    Online,
    Offline,
    Approved,
    Rejected,
    Enabled,
    Disabled,
}

impl TargetStatus {
    /// 接口层使用的状态字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStatus::Online => "online",
            TargetStatus::Offline => "offline",
            TargetStatus::Approved => "approved",
            TargetStatus::Rejected => "rejected",
            TargetStatus::Enabled => "enabled",
            TargetStatus::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 消息/推送的接收范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum RecipientScope {
    /// 全部用户
    All,
    /// 会员用户
    Member,
    /// 新注册用户
    New,
    /// 仅选中目标本身
    Single,
}

impl RecipientScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientScope::All => "all",
            RecipientScope::Member => "member",
            RecipientScope::New => "new",
            RecipientScope::Single => "single",
        }
    }
}

impl std::fmt::Display for RecipientScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 批量操作配置
///
/// 按操作类型携带各自的必填字段，穷尽匹配由编译器保证。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OperationConfig {
    /// 状态修改：目标状态取自固定集合
    StatusChange { target: TargetStatus },

    /// 删除：必须显式设置确认标记
    Delete { confirmed: bool },

    /// 发送：非空消息文本（至多 200 字符）与接收范围
    Send {
        message: String,
        scope: RecipientScope,
    },

    /// 导出：非空输出路径
    Export { output: PathBuf },
}

impl OperationConfig {
    /// 配置对应的操作类型
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationConfig::StatusChange { .. } => OperationKind::StatusChange,
            OperationConfig::Delete { .. } => OperationKind::Delete,
            OperationConfig::Send { .. } => OperationKind::Send,
            OperationConfig::Export { .. } => OperationKind::Export,
        }
    }

    /// 该操作是否不可逆
    pub fn is_destructive(&self) -> bool {
        matches!(self, OperationConfig::Delete { .. })
    }

    /// 确认页显示的单行摘要
    pub fn summary(&self) -> String {
        match self {
            OperationConfig::StatusChange { target } => {
                format!("change status to '{}'", target)
            }
            OperationConfig::Delete { .. } => "delete permanently".to_string(),
            OperationConfig::Send { message, scope } => {
                format!("send \"{}\" to scope '{}'", message, scope)
            }
            OperationConfig::Export { output } => {
                format!("export to '{}'", output.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_kind_mapping() {
        let configs = [
            (
                OperationConfig::StatusChange {
                    target: TargetStatus::Offline,
                },
                OperationKind::StatusChange,
            ),
            (
                OperationConfig::Delete { confirmed: true },
                OperationKind::Delete,
            ),
            (
                OperationConfig::Send {
                    message: "hi".to_string(),
                    scope: RecipientScope::All,
                },
                OperationKind::Send,
            ),
            (
                OperationConfig::Export {
                    output: PathBuf::from("out.csv"),
                },
                OperationKind::Export,
            ),
        ];

        for (config, kind) in configs {
            assert_eq!(config.kind(), kind);
        }
    }

    #[test]
    fn test_only_delete_is_destructive() {
        assert!(OperationConfig::Delete { confirmed: true }.is_destructive());
        assert!(!OperationConfig::StatusChange {
            target: TargetStatus::Online
        }
        .is_destructive());
        assert!(!OperationConfig::Send {
            message: "x".to_string(),
            scope: RecipientScope::Single,
        }
        .is_destructive());
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(TargetStatus::Online.as_str(), "online");
        assert_eq!(TargetStatus::Rejected.as_str(), "rejected");
        assert_eq!(RecipientScope::Member.as_str(), "member");
    }
}
