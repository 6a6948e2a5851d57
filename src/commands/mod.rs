//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `api/`, `batch/`, `models/`, `utils/`
//! - 子模块: coupon, refund, user, message, stats

pub mod coupon;
pub mod message;
pub mod refund;
pub mod stats;
pub mod user;

use crate::api::ApiClient;
use crate::cli::{Cli, Commands};
use crate::error::{MallctlError, Result};

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let client = ApiClient::new(&cli.api_url, cli.token.as_deref().unwrap_or(""))?;

    match cli.command {
        Commands::Coupon(args) => coupon::execute(&client, args),
        Commands::Refund(args) => refund::execute(&client, args),
        Commands::User(args) => user::execute(&client, args),
        Commands::Message(args) => message::execute(&client, args),
        Commands::Stats(args) => stats::execute(&client, args),
    }
}

/// 解析 id 列表表达式 (e.g., "3,5,10-12")
///
/// 保留首次出现的顺序并去重，批次按该顺序执行。
pub(crate) fn parse_id_list(expr: &str) -> Result<Vec<u64>> {
    fn push(ids: &mut Vec<u64>, v: u64) {
        if !ids.contains(&v) {
            ids.push(v);
        }
    }

    let mut ids: Vec<u64> = Vec::new();

    for chunk in expr.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }

        if let Some((a, b)) = chunk.split_once('-') {
            let a: u64 = a
                .trim()
                .parse()
                .map_err(|_| MallctlError::InvalidRange(chunk.to_string()))?;
            let b: u64 = b
                .trim()
                .parse()
                .map_err(|_| MallctlError::InvalidRange(chunk.to_string()))?;
            if a < 1 || b < a {
                return Err(MallctlError::InvalidRange(chunk.to_string()));
            }
            for v in a..=b {
                push(&mut ids, v);
            }
        } else {
            let v: u64 = chunk
                .parse()
                .map_err(|_| MallctlError::InvalidRange(chunk.to_string()))?;
            if v < 1 {
                return Err(MallctlError::InvalidRange(chunk.to_string()));
            }
            push(&mut ids, v);
        }
    }

    if ids.is_empty() {
        return Err(MallctlError::InvalidArgument(format!(
            "no ids found in '{}'",
            expr
        )));
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_ids_and_ranges() {
        assert_eq!(parse_id_list("3,5,10-12").unwrap(), vec![3, 5, 10, 11, 12]);
        assert_eq!(parse_id_list("7").unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_preserves_input_order_and_dedups() {
        assert_eq!(parse_id_list("5,3,5,4-6").unwrap(), vec![5, 3, 4, 6]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_id_list("abc").is_err());
        assert!(parse_id_list("5-3").is_err());
        assert!(parse_id_list("0").is_err());
        assert!(parse_id_list("").is_err());
        assert!(parse_id_list(" , ,").is_err());
    }
}
