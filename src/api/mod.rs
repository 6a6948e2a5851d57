//! # 管理接口客户端模块
//!
//! 后台 REST API 的薄封装：所有业务规则、持久化与校验都在服务端，
//! 这里只负责请求组装、鉴权头与响应信封解包。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `reqwest` (blocking) 与 `serde`

pub mod client;
pub mod types;

pub use client::ApiClient;
