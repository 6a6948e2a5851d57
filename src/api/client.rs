//! # 管理接口客户端
//!
//! 阻塞式 REST 客户端：固定 base URL 与 bearer token，
//! 每个端点一个薄封装方法。
//!
//! ## 功能
//! - 统一信封解包与服务端拒绝映射
//! - 优惠券 / 退款 / 用户 / 消息 / 统计端点
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `api/types.rs` 的 DTO
//! - 使用 `reqwest` (blocking)

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::api::types::{
    ApiEnvelope, CouponDto, NoticeDto, PageResult, RefundDto, StatsSummary, TrendPoint, UserDto,
};
use crate::error::{MallctlError, Result};

/// 请求超时（秒）
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// 管理接口客户端
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// 创建客户端
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.token.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.token)
        }
    }

    /// 解包信封并取出 data
    fn unwrap_data<T: DeserializeOwned>(response: Response) -> Result<T> {
        let envelope: ApiEnvelope<T> = response.json()?;
        if envelope.code != 200 {
            return Err(MallctlError::ApiRejected {
                message: envelope.message,
            });
        }
        envelope.data.ok_or(MallctlError::InvalidResponse {
            reason: "missing data field".to_string(),
        })
    }

    /// 解包信封，忽略 data（写操作端点）
    fn check_ok(response: Response) -> Result<()> {
        let envelope: ApiEnvelope<serde_json::Value> = response.json()?;
        if envelope.code != 200 {
            return Err(MallctlError::ApiRejected {
                message: envelope.message,
            });
        }
        Ok(())
    }

    fn get_data<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .authed(self.http.get(self.url(path)))
            .query(query)
            .send()?;
        Self::unwrap_data(response)
    }

    fn post_ok<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let response = self
            .authed(self.http.post(self.url(path)))
            .json(body)
            .send()?;
        Self::check_ok(response)
    }

    fn put_ok<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let response = self
            .authed(self.http.put(self.url(path)))
            .json(body)
            .send()?;
        Self::check_ok(response)
    }

    fn delete_ok(&self, path: &str) -> Result<()> {
        let response = self.authed(self.http.delete(self.url(path))).send()?;
        Self::check_ok(response)
    }

    // ─────────────────────────────────────────────────────────────
    // 优惠券
    // ─────────────────────────────────────────────────────────────

    pub fn list_coupons(
        &self,
        page: u32,
        page_size: u32,
        status: Option<&str>,
    ) -> Result<PageResult<CouponDto>> {
        let mut query = vec![
            ("pageNumber", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get_data("/api/admin/coupons", &query)
    }

    pub fn get_coupon(&self, id: u64) -> Result<CouponDto> {
        self.get_data(&format!("/api/admin/coupons/{}", id), &[])
    }

    pub fn update_coupon_status(&self, id: u64, status: &str) -> Result<()> {
        self.put_ok(
            &format!("/api/admin/coupons/{}/status", id),
            &json!({ "status": status }),
        )
    }

    pub fn delete_coupon(&self, id: u64) -> Result<()> {
        self.delete_ok(&format!("/api/admin/coupons/{}", id))
    }

    pub fn send_coupon(&self, id: u64, scope: &str, message: &str) -> Result<()> {
        self.post_ok(
            &format!("/api/admin/coupons/{}/send", id),
            &json!({ "scope": scope, "message": message }),
        )
    }

    // ─────────────────────────────────────────────────────────────
    // 退款
    // ─────────────────────────────────────────────────────────────

    pub fn list_refunds(&self, page: u32, page_size: u32) -> Result<PageResult<RefundDto>> {
        let query = vec![
            ("pageNumber", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        self.get_data("/api/admin/refunds", &query)
    }

    pub fn get_refund(&self, id: u64) -> Result<RefundDto> {
        self.get_data(&format!("/api/admin/refunds/{}", id), &[])
    }

    pub fn decide_refund(&self, id: u64, status: &str) -> Result<()> {
        self.put_ok(
            &format!("/api/admin/refunds/{}/status", id),
            &json!({ "status": status }),
        )
    }

    // ─────────────────────────────────────────────────────────────
    // 用户
    // ─────────────────────────────────────────────────────────────

    pub fn list_users(
        &self,
        page: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<PageResult<UserDto>> {
        let mut query = vec![
            ("pageNumber", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(keyword) = keyword {
            query.push(("keyword", keyword.to_string()));
        }
        self.get_data("/api/admin/users", &query)
    }

    pub fn get_user(&self, id: u64) -> Result<UserDto> {
        self.get_data(&format!("/api/admin/users/{}", id), &[])
    }

    pub fn update_user_status(&self, id: u64, status: &str) -> Result<()> {
        self.put_ok(
            &format!("/api/admin/users/{}/status", id),
            &json!({ "status": status }),
        )
    }

    // ─────────────────────────────────────────────────────────────
    // 消息
    // ─────────────────────────────────────────────────────────────

    pub fn list_notices(&self, page: u32, page_size: u32) -> Result<PageResult<NoticeDto>> {
        let query = vec![
            ("pageNumber", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        self.get_data("/api/admin/notices", &query)
    }

    pub fn send_notice(&self, user_id: u64, content: &str) -> Result<()> {
        self.post_ok(
            "/api/admin/messages",
            &json!({ "userId": user_id, "content": content }),
        )
    }

    // ─────────────────────────────────────────────────────────────
    // 统计
    // ─────────────────────────────────────────────────────────────

    pub fn stats_summary(&self) -> Result<StatsSummary> {
        self.get_data("/api/admin/statistics/summary", &[])
    }

    pub fn stats_trend(&self, days: u32, since: Option<&str>) -> Result<Vec<TrendPoint>> {
        let mut query = vec![("days", days.to_string())];
        if let Some(since) = since {
            query.push(("since", since.to_string()));
        }
        self.get_data("/api/admin/statistics/trend", &query)
    }
}
