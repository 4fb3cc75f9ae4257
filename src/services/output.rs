//! Stdout rendering.
//!
//! `render_report` is the bare `project => [alias]` shape `audit` prints and
//! `shares`/`graph` read back; it is never wrapped. `print_out`/`print_one`
//! are the `--json` envelope (`JsonOut`) or tab-separated text rows.

use crate::domain::models::{JsonOut, ProjectMaintainers};
use serde::Serialize;

/// Pretty JSON, two-space indent. This is the shape `shares`/`graph` read back.
pub fn render_report(report: &ProjectMaintainers) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}
