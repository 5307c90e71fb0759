//! Violation command handlers.

use tabled::Tabled;

use fleetreg_api::RegistryClient;
use fleetreg_api::models::{NewViolation, Violation};

use crate::cli::{GlobalOpts, ViolationsArgs, ViolationsCommand};
use crate::error::CliError;
use crate::output::{print_output, render_list};

#[derive(Tabled)]
struct ViolationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "REG")]
    reg: String,
    #[tabled(rename = "TYPE")]
    violation_type: String,
    #[tabled(rename = "LOCATION")]
    location: String,
    #[tabled(rename = "OFFICER")]
    officer: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "FINE")]
    fine: String,
}

fn to_row(v: &Violation) -> ViolationRow {
    ViolationRow {
        id: v.id.map_or_else(|| "-".into(), |id| id.to_string()),
        reg: v.reg_number.clone(),
        violation_type: v.violation_type.clone(),
        location: v.location.clone().unwrap_or_else(|| "-".into()),
        officer: v.officer_name.clone().unwrap_or_else(|| "-".into()),
        status: v.status.clone(),
        fine: v
            .fine_amount
            .map_or_else(|| "-".into(), |amount| format!("£{amount:.2}")),
    }
}

pub async fn handle(
    client: &RegistryClient,
    args: ViolationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ViolationsCommand::List => {
            let violations = client.get_violations().await?;
            let rendered = render_list(&global.output, &violations, to_row, |v| {
                v.id.map_or_else(|| v.reg_number.clone(), |id| id.to_string())
            });
            print_output(&rendered, global.quiet);
            Ok(())
        }

        ViolationsCommand::Submit {
            reg_number,
            violation_type,
            location,
            description,
            fine,
        } => {
            let new = NewViolation {
                reg_number,
                violation_type,
                location,
                description,
                fine_amount: fine,
            };
            let violation = client.submit_violation(&new).await?;
            if !global.quiet {
                match violation.id {
                    Some(id) => eprintln!("Violation recorded (id {id})"),
                    None => eprintln!("Violation recorded"),
                }
            }
            Ok(())
        }

        ViolationsCommand::Approve { id } => {
            let outcome = client.approve_violation(id).await?;
            if !global.quiet {
                eprintln!(
                    "Violation {id}: {}",
                    outcome.status.as_deref().unwrap_or("approved")
                );
            }
            Ok(())
        }

        ViolationsCommand::Reject { id, reason } => {
            let outcome = client.reject_violation(id, reason.as_deref()).await?;
            if !global.quiet {
                eprintln!(
                    "Violation {id}: {}",
                    outcome.status.as_deref().unwrap_or("rejected")
                );
            }
            Ok(())
        }
    }
}
