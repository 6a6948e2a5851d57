//! # 操作字段映射
//!
//! 操作类型到必填字段及校验规则的纯映射，无副作用、无网络访问。
//!
//! ## 依赖关系
//! - 被 `batch/workflow.rs` 的配置校验使用
//! - 被 `commands/` 用于渲染配置步骤的字段说明

use crate::models::{OperationConfig, OperationKind};

/// 发送消息文本的最大字符数
pub const MAX_MESSAGE_CHARS: usize = 200;

/// 必填字段说明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 字段名
    pub name: &'static str,
    /// 校验规则描述
    pub rule: &'static str,
}

const STATUS_CHANGE_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "status",
    rule: "one of the fixed target status set",
}];

const DELETE_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "confirmed",
    rule: "explicit confirmation flag must be set",
}];

const SEND_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "message",
        rule: "non-empty, at most 200 characters",
    },
    FieldSpec {
        name: "scope",
        rule: "recipient scope",
    },
];

const EXPORT_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "output",
    rule: "non-empty output path",
}];

/// 查询操作类型的必填字段
///
/// 纯函数：同一类型的两次调用返回同一字段集。
pub fn required_fields(kind: OperationKind) -> &'static [FieldSpec] {
    match kind {
        OperationKind::StatusChange => STATUS_CHANGE_FIELDS,
        OperationKind::Delete => DELETE_FIELDS,
        OperationKind::Send => SEND_FIELDS,
        OperationKind::Export => EXPORT_FIELDS,
    }
}

/// 校验具体配置，返回逐字段错误消息（为空表示通过）
pub fn validate(config: &OperationConfig) -> Vec<String> {
    let mut errors = Vec::new();

    match config {
        // 状态取自固定枚举，结构上已保证合法
        OperationConfig::StatusChange { .. } => {}

        OperationConfig::Delete { confirmed } => {
            if !confirmed {
                errors.push("confirmed: explicit confirmation flag must be set".to_string());
            }
        }

        OperationConfig::Send { message, .. } => {
            if message.trim().is_empty() {
                errors.push("message: must not be empty".to_string());
            } else if message.chars().count() > MAX_MESSAGE_CHARS {
                errors.push(format!(
                    "message: must be at most {} characters (got {})",
                    MAX_MESSAGE_CHARS,
                    message.chars().count()
                ));
            }
        }

        OperationConfig::Export { output } => {
            if output.as_os_str().is_empty() {
                errors.push("output: must not be empty".to_string());
            }
        }
    }

    errors
}
