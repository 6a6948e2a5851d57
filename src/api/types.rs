//! # 接口数据传输对象
//!
//! 后台 API 的响应信封、分页结构与各模块 DTO。
//! 字段按服务端的 camelCase 命名映射。
//!
//! ## 依赖关系
//! - 被 `api/client.rs` 与 `commands/` 使用
//! - 被 `models/target.rs` 转换为目标快照

use serde::Deserialize;

/// 统一响应信封：`code != 200` 表示服务端拒绝
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// 分页查询结果
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub list: Vec<T>,
    pub total_count: u64,
    pub curr_page: u32,
}

/// 优惠券
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub coupon_id: u64,
    pub coupon_name: String,
    pub coupon_desc: Option<String>,
    pub total: u32,
    pub used: u32,
    pub status: String,
}

/// 退款申请
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundDto {
    pub refund_id: u64,
    pub order_no: String,
    pub user_name: String,
    pub amount: f64,
    pub status: String,
    pub create_time: String,
}

/// 用户账号
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: u64,
    pub nickname: String,
    pub phone: String,
    pub points: i64,
    pub status: String,
}

/// 平台通知
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDto {
    pub notice_id: u64,
    pub title: String,
    pub content: String,
    pub status: String,
    pub create_time: String,
}

/// 看板汇总指标
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub user_count: u64,
    pub order_count: u64,
    pub sales_total: f64,
    pub refund_count: u64,
}

/// 趋势数据点（按天）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub order_count: u64,
    pub sales_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let raw = r#"{"code":200,"message":"SUCCESS","data":{"couponId":3,"couponName":"New User Gift","couponDesc":null,"total":1000,"used":57,"status":"online"}}"#;
        let envelope: ApiEnvelope<CouponDto> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.code, 200);
        let coupon = envelope.data.unwrap();
        assert_eq!(coupon.coupon_id, 3);
        assert_eq!(coupon.coupon_name, "New User Gift");
        assert!(coupon.coupon_desc.is_none());
    }

    #[test]
    fn test_envelope_rejection_without_data() {
        let raw = r#"{"code":500,"message":"token expired"}"#;
        let envelope: ApiEnvelope<CouponDto> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.code, 500);
        assert_eq!(envelope.message, "token expired");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_page_result_camel_case() {
        let raw = r#"{"list":[{"userId":9,"nickname":"bob","phone":"138****0000","points":420,"status":"enabled"}],"totalCount":1,"currPage":1}"#;
        let page: PageResult<UserDto> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.curr_page, 1);
        assert_eq!(page.list[0].user_id, 9);
        assert_eq!(page.list[0].points, 420);
    }

    #[test]
    fn test_trend_point_fields() {
        let raw = r#"[{"date":"2026-08-01","orderCount":31,"salesAmount":1520.5},{"date":"2026-08-02","orderCount":28,"salesAmount":1333.0}]"#;
        let points: Vec<TrendPoint> = serde_json::from_str(raw).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2026-08-01");
        assert_eq!(points[1].order_count, 28);
    }
}
