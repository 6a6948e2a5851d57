//! # user 命令实现
//!
//! 用户账号列表与批量启用/停用。
//!
//! ## 依赖关系
//! - 使用 `cli/user.rs` 定义的参数
//! - 使用 `batch/` 的向导、执行器与报告
//! - 使用 `api/client.rs`, `utils/`

use tabled::{Table, Tabled};

use crate::api::ApiClient;
use crate::batch::{report, BatchWorkflow};
use crate::cli::user::{AccountAction, UserArgs, UserBatchArgs, UserCommands, UserListArgs};
use crate::error::Result;
use crate::models::{BatchTarget, OperationConfig, TargetStatus};
use crate::utils::{output, progress, prompt};

/// 用户列表行
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Nickname")]
    nickname: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Points")]
    points: i64,
    #[tabled(rename = "Status")]
    status: String,
}

/// 执行 user 命令
pub fn execute(client: &ApiClient, args: UserArgs) -> Result<()> {
    match args.command {
        UserCommands::List(args) => list(client, &args),
        UserCommands::Batch(args) => batch(client, &args),
    }
}

/// 列表查询
fn list(client: &ApiClient, args: &UserListArgs) -> Result<()> {
    output::print_header("User Accounts");

    let spinner = progress::create_spinner("Fetching user list");
    let page = client.list_users(args.page, args.page_size, args.keyword.as_deref());
    spinner.finish_and_clear();
    let page = page?;

    if page.list.is_empty() {
        output::print_warning("No users found.");
        return Ok(());
    }

    let rows: Vec<UserRow> = page
        .list
        .iter()
        .map(|u| UserRow {
            id: u.user_id,
            nickname: u.nickname.clone(),
            phone: u.phone.clone(),
            points: u.points,
            status: u.status.clone(),
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "Page {} | {} users in total",
        page.curr_page, page.total_count
    ));

    Ok(())
}

/// 批量启用/停用
fn batch(client: &ApiClient, args: &UserBatchArgs) -> Result<()> {
    output::print_header("User Account Batch Operation");

    let ids = super::parse_id_list(&args.ids)?;

    let spinner = progress::create_spinner("Fetching user snapshots");
    let snapshots: Result<Vec<BatchTarget>> = ids
        .iter()
        .map(|id| client.get_user(*id).map(|dto| BatchTarget::from(&dto)))
        .collect();
    spinner.finish_and_clear();
    let targets = snapshots?;

    let status = match args.action {
        AccountAction::Enable => TargetStatus::Enabled,
        AccountAction::Disable => TargetStatus::Disabled,
    };

    let mut wizard = BatchWorkflow::open(&targets)?;
    wizard.configure(OperationConfig::StatusChange { target: status })?;
    wizard.advance()?;

    report::render_confirm(&wizard);
    if !args.yes && !prompt::confirm("Apply this action to all listed accounts?")? {
        wizard.back()?;
        output::print_warning(&format!(
            "Batch aborted; wizard closed at the {} step.",
            wizard.step().name()
        ));
        return Ok(());
    }

    let pb = progress::create_percent_bar("Updating");
    let outcome = wizard.execute(
        |target, config| match config {
            OperationConfig::StatusChange { target: status } => {
                client.update_user_status(target.id, status.as_str())
            }
            // user 模块只装配状态修改操作
            _ => unreachable!("user batch only builds status-change configs"),
        },
        |percent| pb.set_position(percent as u64),
    )?;
    pb.finish_and_clear();

    report::render(outcome);
    let refresh = outcome.is_full_success();

    if refresh {
        output::print_info("Refreshing user list...");
        list(
            client,
            &UserListArgs {
                page: 1,
                page_size: 20,
                keyword: None,
            },
        )?;
    }

    Ok(())
}
