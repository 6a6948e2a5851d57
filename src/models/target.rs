//! # 批量操作目标快照
//!
//! 目标项在用户选中时从列表视图取得的只读快照。
//! 快照由调用方借出，工作流期间不做本地修改。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 从 `api/types.rs` 的 DTO 转换而来

use serde::{Deserialize, Serialize};

use crate::api::types::{CouponDto, RefundDto, UserDto};

/// 批量操作目标
///
/// `id` 由外部系统分配，`status` 为外部所有的生命周期状态字符串。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTarget {
    /// 外部系统分配的唯一 id
    pub id: u64,

    /// 显示名称
    pub name: String,

    /// 当前生命周期状态
    pub status: String,
}

impl BatchTarget {
    pub fn new(id: u64, name: impl Into<String>, status: impl Into<String>) -> Self {
        BatchTarget {
            id,
            name: name.into(),
            status: status.into(),
        }
    }
}

impl From<&CouponDto> for BatchTarget {
    fn from(dto: &CouponDto) -> Self {
        BatchTarget::new(dto.coupon_id, dto.coupon_name.clone(), dto.status.clone())
    }
}

impl From<&RefundDto> for BatchTarget {
    fn from(dto: &RefundDto) -> Self {
        BatchTarget::new(dto.refund_id, dto.order_no.clone(), dto.status.clone())
    }
}

impl From<&UserDto> for BatchTarget {
    fn from(dto: &UserDto) -> Self {
        BatchTarget::new(dto.user_id, dto.nickname.clone(), dto.status.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_coupon_dto() {
        let dto = CouponDto {
            coupon_id: 42,
            coupon_name: "Summer Sale".to_string(),
            coupon_desc: Some("10 off over 100".to_string()),
            total: 500,
            used: 123,
            status: "online".to_string(),
        };

        let target = BatchTarget::from(&dto);
        assert_eq!(target.id, 42);
        assert_eq!(target.name, "Summer Sale");
        assert_eq!(target.status, "online");
    }

    #[test]
    fn test_target_from_refund_dto_uses_order_no() {
        let dto = RefundDto {
            refund_id: 7,
            order_no: "NO20260801123456".to_string(),
            user_name: "alice".to_string(),
            amount: 59.9,
            status: "pending".to_string(),
            create_time: "2026-08-01 10:00:00".to_string(),
        };

        let target = BatchTarget::from(&dto);
        assert_eq!(target.id, 7);
        assert_eq!(target.name, "NO20260801123456");
    }
}
