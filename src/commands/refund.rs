//! # refund 命令实现
//!
//! 退款申请列表与批量审核（通过/驳回）。
//!
//! ## 依赖关系
//! - 使用 `cli/refund.rs` 定义的参数
//! - 使用 `batch/` 的向导、执行器与报告
//! - 使用 `api/client.rs`, `utils/`

use tabled::{Table, Tabled};

use crate::api::ApiClient;
use crate::batch::{report, BatchWorkflow};
use crate::cli::refund::{RefundArgs, RefundBatchArgs, RefundCommands, RefundDecision, RefundListArgs};
use crate::error::Result;
use crate::models::{BatchTarget, OperationConfig, TargetStatus};
use crate::utils::{output, progress, prompt};

/// 退款列表行
#[derive(Tabled)]
struct RefundRow {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Order")]
    order_no: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// 执行 refund 命令
pub fn execute(client: &ApiClient, args: RefundArgs) -> Result<()> {
    match args.command {
        RefundCommands::List(args) => list(client, &args),
        RefundCommands::Batch(args) => batch(client, &args),
    }
}

/// 列表查询
fn list(client: &ApiClient, args: &RefundListArgs) -> Result<()> {
    output::print_header("Refund Requests");

    let spinner = progress::create_spinner("Fetching refund list");
    let page = client.list_refunds(args.page, args.page_size);
    spinner.finish_and_clear();
    let page = page?;

    if page.list.is_empty() {
        output::print_warning("No refund requests found.");
        return Ok(());
    }

    let rows: Vec<RefundRow> = page
        .list
        .iter()
        .map(|r| RefundRow {
            id: r.refund_id,
            order_no: r.order_no.clone(),
            user: r.user_name.clone(),
            amount: format!("{:.2}", r.amount),
            status: r.status.clone(),
            created: r.create_time.clone(),
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "Page {} | {} requests in total",
        page.curr_page, page.total_count
    ));

    Ok(())
}

/// 批量审核
fn batch(client: &ApiClient, args: &RefundBatchArgs) -> Result<()> {
    output::print_header("Refund Batch Review");

    let ids = super::parse_id_list(&args.ids)?;

    let spinner = progress::create_spinner("Fetching refund snapshots");
    let snapshots: Result<Vec<BatchTarget>> = ids
        .iter()
        .map(|id| client.get_refund(*id).map(|dto| BatchTarget::from(&dto)))
        .collect();
    spinner.finish_and_clear();
    let targets = snapshots?;

    let status = match args.decision {
        RefundDecision::Approve => TargetStatus::Approved,
        RefundDecision::Reject => TargetStatus::Rejected,
    };

    let mut wizard = BatchWorkflow::open(&targets)?;
    wizard.configure(OperationConfig::StatusChange { target: status })?;
    wizard.advance()?;

    report::render_confirm(&wizard);
    if !args.yes && !prompt::confirm("Apply this decision to all listed refunds?")? {
        wizard.back()?;
        output::print_warning(&format!(
            "Batch aborted; wizard closed at the {} step.",
            wizard.step().name()
        ));
        return Ok(());
    }

    let pb = progress::create_percent_bar("Reviewing");
    let outcome = wizard.execute(
        |target, config| match config {
            OperationConfig::StatusChange { target: status } => {
                client.decide_refund(target.id, status.as_str())
            }
            // refund 模块只装配状态修改操作
            _ => unreachable!("refund batch only builds status-change configs"),
        },
        |percent| pb.set_position(percent as u64),
    )?;
    pb.finish_and_clear();

    report::render(outcome);
    let refresh = outcome.is_full_success();

    // 审核通过后刷新列表视图
    if refresh {
        output::print_info("Refreshing refund list...");
        list(
            client,
            &RefundListArgs {
                page: 1,
                page_size: 20,
            },
        )?;
    }

    Ok(())
}
