use crate::domain::models::GraphReport;
use crate::services::chart::{render_pie_svg, CHART_HEIGHT, CHART_WIDTH};
use crate::services::output::{print_one, print_out};
use crate::services::ownership::{aggregate, load_report, ranked};
use std::path::Path;

pub fn handle_shares(json: bool, report: &Path) -> anyhow::Result<()> {
    let mapping = load_report(report)?;
    let rows = ranked(&aggregate(&mapping));
    print_out(json, &rows, |r| format!("{}\t{:.4}", r.maintainer, r.share))
}

pub fn handle_graph(json: bool, report: &Path, output: &Path) -> anyhow::Result<()> {
    let mapping = load_report(report)?;
    let shares = aggregate(&mapping);
    let svg = render_pie_svg(&shares, CHART_WIDTH, CHART_HEIGHT);
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, svg)?;
    tracing::info!(output = %output.display(), maintainers = shares.len(), "rendered chart");

    let data = GraphReport {
        output: output.display().to_string(),
        maintainers: ranked(&shares),
    };
    print_one(json, data, |d| format!("wrote {}", d.output))
}
