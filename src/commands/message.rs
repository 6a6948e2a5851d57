//! # message 命令实现
//!
//! 平台通知列表与批量定向发送。
//!
//! ## 依赖关系
//! - 使用 `cli/message.rs` 定义的参数
//! - 使用 `batch/` 的向导、执行器与报告
//! - 使用 `api/client.rs`, `utils/`

use tabled::{Table, Tabled};

use crate::api::ApiClient;
use crate::batch::{report, BatchWorkflow};
use crate::cli::message::{MessageArgs, MessageBatchArgs, MessageCommands, MessageListArgs};
use crate::error::Result;
use crate::models::{BatchTarget, OperationConfig, RecipientScope};
use crate::utils::{output, progress, prompt};

/// 通知列表行
#[derive(Tabled)]
struct NoticeRow {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Content")]
    content: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// 截断过长的通知正文，避免表格换行
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// 执行 message 命令
pub fn execute(client: &ApiClient, args: MessageArgs) -> Result<()> {
    match args.command {
        MessageCommands::List(args) => list(client, &args),
        MessageCommands::Batch(args) => batch(client, &args),
    }
}

/// 列表查询
fn list(client: &ApiClient, args: &MessageListArgs) -> Result<()> {
    output::print_header("Platform Notices");

    let spinner = progress::create_spinner("Fetching notice list");
    let page = client.list_notices(args.page, args.page_size);
    spinner.finish_and_clear();
    let page = page?;

    if page.list.is_empty() {
        output::print_warning("No notices found.");
        return Ok(());
    }

    let rows: Vec<NoticeRow> = page
        .list
        .iter()
        .map(|n| NoticeRow {
            id: n.notice_id,
            title: n.title.clone(),
            content: truncate(&n.content, 24),
            status: n.status.clone(),
            created: n.create_time.clone(),
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "Page {} | {} notices in total",
        page.curr_page, page.total_count
    ));

    Ok(())
}

/// 批量定向发送
fn batch(client: &ApiClient, args: &MessageBatchArgs) -> Result<()> {
    output::print_header("Message Batch Send");

    let ids = super::parse_id_list(&args.ids)?;

    let spinner = progress::create_spinner("Fetching user snapshots");
    let snapshots: Result<Vec<BatchTarget>> = ids
        .iter()
        .map(|id| client.get_user(*id).map(|dto| BatchTarget::from(&dto)))
        .collect();
    spinner.finish_and_clear();
    let targets = snapshots?;

    let mut wizard = BatchWorkflow::open(&targets)?;
    // 逐个用户定向发送，范围固定为 single
    wizard.configure(OperationConfig::Send {
        message: args.message.clone(),
        scope: RecipientScope::Single,
    })?;
    wizard.advance()?;

    report::render_confirm(&wizard);
    if !args.yes && !prompt::confirm("Send this message to all listed users?")? {
        wizard.back()?;
        output::print_warning(&format!(
            "Batch aborted; wizard closed at the {} step.",
            wizard.step().name()
        ));
        return Ok(());
    }

    let pb = progress::create_percent_bar("Sending");
    wizard.execute(
        |target, config| match config {
            OperationConfig::Send { message, .. } => client.send_notice(target.id, message),
            // message 模块只装配发送操作
            _ => unreachable!("message batch only builds send configs"),
        },
        |percent| pb.set_position(percent as u64),
    )?;
    pb.finish_and_clear();

    // 终态后从向导读取汇总
    if let Some(result) = wizard.result() {
        report::render(result);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("low stock notice", 24), "low stock notice");
    }

    #[test]
    fn test_truncate_long_text_appends_ellipsis() {
        let text = "x".repeat(30);
        assert_eq!(truncate(&text, 24), format!("{}...", "x".repeat(24)));
    }
}
