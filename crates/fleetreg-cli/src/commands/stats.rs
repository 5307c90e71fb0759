//! Statistics command handlers.

use tabled::Tabled;

use fleetreg_api::RegistryClient;
use fleetreg_api::models::{OfficerStat, ViolationStats};

use crate::cli::{GlobalOpts, StatsArgs, StatsCommand};
use crate::error::CliError;
use crate::output::{print_output, render_list, render_single};

#[derive(Tabled)]
struct OfficerRow {
    #[tabled(rename = "OFFICER")]
    officer: String,
    #[tabled(rename = "RECORDED")]
    recorded: i64,
    #[tabled(rename = "APPROVED")]
    approved: i64,
    #[tabled(rename = "REJECTED")]
    rejected: i64,
}

fn officer_row(s: &OfficerStat) -> OfficerRow {
    OfficerRow {
        officer: s.officer_name.clone(),
        recorded: s.violations_recorded,
        approved: s.approved,
        rejected: s.rejected,
    }
}

fn violation_detail(stats: &ViolationStats) -> String {
    let mut lines = vec![
        format!("Total:    {}", stats.total),
        format!("Pending:  {}", stats.pending),
        format!("Approved: {}", stats.approved),
        format!("Rejected: {}", stats.rejected),
    ];
    if !stats.by_type.is_empty() {
        lines.push("By type:".into());
        for (kind, count) in &stats.by_type {
            lines.push(format!("  {kind}: {count}"));
        }
    }
    lines.join("\n")
}

pub async fn handle(
    client: &RegistryClient,
    args: StatsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        StatsCommand::Violations => {
            let stats = client.get_violation_stats().await?;
            let rendered = render_single(&global.output, &stats, violation_detail, |s| {
                s.total.to_string()
            });
            print_output(&rendered, global.quiet);
            Ok(())
        }

        StatsCommand::Officers => {
            let stats = client.get_officer_stats().await?;
            let rendered = render_list(&global.output, &stats, officer_row, |s| {
                s.officer_name.clone()
            });
            print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
