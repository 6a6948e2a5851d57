//! # stats 命令实现
//!
//! 数据看板：汇总指标与按天趋势。
//!
//! ## 功能
//! - 汇总指标表格（用户/订单/销售额/退款）
//! - N 天趋势表格，可导出 CSV、绘制 PNG 图
//!
//! ## 依赖关系
//! - 使用 `cli/stats.rs` 定义的参数
//! - 使用 `api/client.rs`, `utils/`
//! - 使用 `csv`, `plotters`

use std::path::Path;

use regex::Regex;
use tabled::{Table, Tabled};

use crate::api::types::TrendPoint;
use crate::api::ApiClient;
use crate::cli::stats::{StatsArgs, StatsCommands, TrendArgs};
use crate::error::{MallctlError, Result};
use crate::utils::{output, progress};

/// 汇总指标行
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 趋势数据行
#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Orders")]
    orders: u64,
    #[tabled(rename = "Sales")]
    sales: String,
}

/// 执行 stats 命令
pub fn execute(client: &ApiClient, args: StatsArgs) -> Result<()> {
    match args.command {
        StatsCommands::Summary => summary(client),
        StatsCommands::Trend(args) => trend(client, &args),
    }
}

/// 汇总指标
fn summary(client: &ApiClient) -> Result<()> {
    output::print_header("Dashboard Summary");

    let spinner = progress::create_spinner("Fetching summary");
    let stats = client.stats_summary();
    spinner.finish_and_clear();
    let stats = stats?;

    let rows = vec![
        SummaryRow {
            metric: "Users",
            value: stats.user_count.to_string(),
        },
        SummaryRow {
            metric: "Orders",
            value: stats.order_count.to_string(),
        },
        SummaryRow {
            metric: "Sales total",
            value: format!("{:.2}", stats.sales_total),
        },
        SummaryRow {
            metric: "Refunds",
            value: stats.refund_count.to_string(),
        },
    ];

    println!("{}", Table::new(&rows));
    Ok(())
}

/// 按天趋势
fn trend(client: &ApiClient, args: &TrendArgs) -> Result<()> {
    output::print_header(&format!("{}-Day Trend", args.days));

    if let Some(since) = args.since.as_deref() {
        validate_date(since)?;
    }

    let spinner = progress::create_spinner("Fetching trend data");
    let points = client.stats_trend(args.days, args.since.as_deref());
    spinner.finish_and_clear();
    let points = points?;

    if points.is_empty() {
        output::print_warning("No trend data returned.");
        return Ok(());
    }

    let rows: Vec<TrendRow> = points
        .iter()
        .map(|p| TrendRow {
            date: p.date.clone(),
            orders: p.order_count,
            sales: format!("{:.2}", p.sales_amount),
        })
        .collect();
    println!("{}", Table::new(&rows));

    if let Some(ref csv_path) = args.output_csv {
        save_trend_csv(&points, csv_path)?;
        output::print_success(&format!("Trend data saved to '{}'", csv_path.display()));
    }

    if let Some(ref plot_path) = args.plot {
        generate_trend_plot(&points, plot_path)?;
        output::print_success(&format!("Trend chart saved to '{}'", plot_path.display()));
    }

    Ok(())
}

/// 校验日期参数格式 (YYYY-MM-DD)
fn validate_date(date: &str) -> Result<()> {
    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    if pattern.is_match(date) {
        Ok(())
    } else {
        Err(MallctlError::InvalidDate(date.to_string()))
    }
}

/// 保存趋势数据到 CSV
fn save_trend_csv(points: &[TrendPoint], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["date", "order_count", "sales_amount"])?;
    for point in points {
        wtr.write_record([
            point.date.clone(),
            point.order_count.to_string(),
            format!("{:.2}", point.sales_amount),
        ])?;
    }

    wtr.flush().map_err(|e| MallctlError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 绘制趋势图
fn generate_trend_plot(points: &[TrendPoint], output_path: &Path) -> Result<()> {
    use plotters::prelude::*;

    let sales_max = points
        .iter()
        .map(|p| p.sales_amount)
        .fold(f64::NEG_INFINITY, f64::max);
    let orders_max = points.iter().map(|p| p.order_count as f64).fold(0.0, f64::max);
    let y_max = sales_max.max(orders_max);
    let y_margin = (y_max.abs() * 0.1).max(1.0);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| MallctlError::Other(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Order & Sales Trend", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            -0.5f64..(points.len() as f64 - 0.5),
            0f64..(y_max + y_margin),
        )
        .map_err(|e| MallctlError::Other(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Amount")
        .x_labels(points.len().min(10))
        .x_label_formatter(&|x| {
            let index = x.round().max(0.0) as usize;
            points
                .get(index)
                .map(|p| p.date.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| MallctlError::Other(e.to_string()))?;

    // 销售额折线
    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.sales_amount)),
            RED.stroke_width(2),
        ))
        .map_err(|e| MallctlError::Other(e.to_string()))?
        .label("Sales")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    // 订单量折线
    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.order_count as f64)),
            BLUE.stroke_width(2),
        ))
        .map_err(|e| MallctlError::Other(e.to_string()))?
        .label("Orders")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, BLUE.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| MallctlError::Other(e.to_string()))?;

    root.present()
        .map_err(|e| MallctlError::Other(e.to_string()))?;

    Ok(())
}
