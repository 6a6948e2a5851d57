//! # coupon 命令实现
//!
//! 优惠券列表查询与批量操作向导。
//!
//! ## 功能
//! - 分页列表，状态过滤，表格输出
//! - 批量操作：状态修改 / 删除 / 发送 / 导出
//! - 每种操作对应一个接口端点封装，由向导逐项驱动
//!
//! ## 依赖关系
//! - 使用 `cli/coupon.rs` 定义的参数
//! - 使用 `batch/` 的向导、执行器与报告
//! - 使用 `api/client.rs`, `utils/`

use std::fs::File;

use tabled::{Table, Tabled};

use crate::api::ApiClient;
use crate::batch::{report, BatchWorkflow};
use crate::cli::coupon::{CouponArgs, CouponBatchArgs, CouponCommands, CouponListArgs};
use crate::error::{MallctlError, Result};
use crate::models::{BatchTarget, OperationConfig, OperationKind};
use crate::utils::{output, progress, prompt};

/// 优惠券列表行
#[derive(Tabled)]
struct CouponRow {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Usage")]
    usage: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 执行 coupon 命令
pub fn execute(client: &ApiClient, args: CouponArgs) -> Result<()> {
    match args.command {
        CouponCommands::List(args) => list(client, &args),
        CouponCommands::Batch(args) => batch(client, &args),
    }
}

/// 列表查询
fn list(client: &ApiClient, args: &CouponListArgs) -> Result<()> {
    output::print_header("Coupons");

    let spinner = progress::create_spinner("Fetching coupon list");
    let page = client.list_coupons(args.page, args.page_size, args.status.as_deref());
    spinner.finish_and_clear();
    let page = page?;

    if page.list.is_empty() {
        output::print_warning("No coupons found.");
        return Ok(());
    }

    let rows: Vec<CouponRow> = page
        .list
        .iter()
        .map(|c| CouponRow {
            id: c.coupon_id,
            name: c.coupon_name.clone(),
            usage: format!("{}/{}", c.used, c.total),
            status: c.status.clone(),
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "Page {} | {} coupons in total",
        page.curr_page, page.total_count
    ));

    Ok(())
}

/// 批量操作向导
fn batch(client: &ApiClient, args: &CouponBatchArgs) -> Result<()> {
    output::print_header("Coupon Batch Operation");

    let ids = super::parse_id_list(&args.ids)?;

    // 取目标只读快照
    let spinner = progress::create_spinner("Fetching coupon snapshots");
    let snapshots: Result<Vec<BatchTarget>> = ids
        .iter()
        .map(|id| client.get_coupon(*id).map(|dto| BatchTarget::from(&dto)))
        .collect();
    spinner.finish_and_clear();
    let targets = snapshots?;

    // 配置步骤：校验未通过则停留于此并报出逐字段错误
    let mut wizard = BatchWorkflow::open(&targets)?;
    wizard.configure(build_config(args)?)?;
    if let Err(e) = wizard.advance() {
        if matches!(e, MallctlError::ConfigInvalid { .. }) {
            for field in crate::batch::required_fields(args.op) {
                output::print_info(&format!("required field '{}': {}", field.name, field.rule));
            }
        }
        return Err(e);
    }

    // 确认步骤：只读摘要
    report::render_confirm(&wizard);
    if !args.yes && !prompt::confirm("Proceed with this batch operation?")? {
        wizard.back()?;
        output::print_warning(&format!(
            "Batch aborted; wizard closed at the {} step.",
            wizard.step().name()
        ));
        return Ok(());
    }

    // 导出操作需要本地 CSV 写入器
    let mut exporter = make_exporter(args)?;

    // 执行步骤
    let pb = progress::create_percent_bar("Executing");
    let outcome = wizard.execute(
        |target, config| apply_operation(client, &mut exporter, target, config),
        |percent| pb.set_position(percent as u64),
    )?;
    pb.finish_and_clear();

    report::render(outcome);
    let refresh = outcome.is_full_success() && args.op != OperationKind::Export;

    if let Some(mut writer) = exporter {
        writer.flush().map_err(|e| MallctlError::FileWriteError {
            path: args
                .output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            source: e,
        })?;
        output::print_success(&format!("Exported {} coupons", targets.len()));
    }

    // 操作全部成功后刷新列表视图（重新拉取）
    if refresh {
        output::print_info("Refreshing coupon list...");
        list(
            client,
            &CouponListArgs {
                page: 1,
                page_size: 20,
                status: None,
            },
        )?;
    }

    Ok(())
}

/// 从 CLI 参数组装操作配置
fn build_config(args: &CouponBatchArgs) -> Result<OperationConfig> {
    match args.op {
        OperationKind::StatusChange => {
            let target = args.status.ok_or_else(|| {
                MallctlError::InvalidArgument("--status is required for status-change".to_string())
            })?;
            Ok(OperationConfig::StatusChange { target })
        }
        OperationKind::Delete => Ok(OperationConfig::Delete {
            confirmed: args.confirmed,
        }),
        OperationKind::Send => Ok(OperationConfig::Send {
            message: args.message.clone().unwrap_or_default(),
            scope: args.scope,
        }),
        OperationKind::Export => Ok(OperationConfig::Export {
            output: args.output.clone().unwrap_or_default(),
        }),
    }
}

/// 导出操作的 CSV 写入器（其余操作返回 None）
fn make_exporter(args: &CouponBatchArgs) -> Result<Option<csv::Writer<File>>> {
    if args.op != OperationKind::Export {
        return Ok(None);
    }

    let output = match args.output.as_ref() {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => return Ok(None),
    };

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(["coupon_id", "name", "description", "total", "used", "status"])?;
    Ok(Some(writer))
}

/// 单项操作：按配置类型调用对应端点
fn apply_operation(
    client: &ApiClient,
    exporter: &mut Option<csv::Writer<File>>,
    target: &BatchTarget,
    config: &OperationConfig,
) -> Result<()> {
    match config {
        OperationConfig::StatusChange { target: status } => {
            client.update_coupon_status(target.id, status.as_str())
        }
        OperationConfig::Delete { .. } => client.delete_coupon(target.id),
        OperationConfig::Send { message, scope } => {
            client.send_coupon(target.id, scope.as_str(), message)
        }
        OperationConfig::Export { .. } => {
            let detail = client.get_coupon(target.id)?;
            let writer = exporter.as_mut().ok_or_else(|| {
                MallctlError::Other("export writer not initialized".to_string())
            })?;
            writer.write_record([
                detail.coupon_id.to_string(),
                detail.coupon_name.clone(),
                detail.coupon_desc.clone().unwrap_or_default(),
                detail.total.to_string(),
                detail.used.to_string(),
                detail.status.clone(),
            ])?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecipientScope, TargetStatus};

    fn base_args() -> CouponBatchArgs {
        CouponBatchArgs {
            ids: "1".to_string(),
            op: OperationKind::StatusChange,
            status: None,
            confirmed: false,
            message: None,
            scope: RecipientScope::All,
            output: None,
            yes: true,
        }
    }

    #[test]
    fn test_build_config_status_change_requires_status() {
        let args = base_args();
        assert!(matches!(
            build_config(&args),
            Err(MallctlError::InvalidArgument(_))
        ));

        let args = CouponBatchArgs {
            status: Some(TargetStatus::Offline),
            ..base_args()
        };
        assert_eq!(
            build_config(&args).unwrap(),
            OperationConfig::StatusChange {
                target: TargetStatus::Offline
            }
        );
    }

    #[test]
    fn test_build_config_send_defaults_to_empty_message() {
        // 空消息在向导校验处被拦截，而不是在参数组装处
        let args = CouponBatchArgs {
            op: OperationKind::Send,
            ..base_args()
        };
        let config = build_config(&args).unwrap();
        assert_eq!(config.kind(), OperationKind::Send);
        assert!(!crate::batch::validate(&config).is_empty());
    }

    #[test]
    fn test_exporter_only_created_for_export() {
        let args = base_args();
        assert!(make_exporter(&args).unwrap().is_none());
    }
}
