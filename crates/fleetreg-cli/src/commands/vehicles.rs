//! Vehicle command handlers.

use tabled::Tabled;

use fleetreg_api::RegistryClient;
use fleetreg_api::models::Vehicle;

use crate::cli::{GlobalOpts, VehiclesArgs, VehiclesCommand};
use crate::error::CliError;
use crate::output::{print_output, render_list, render_single};

#[derive(Tabled)]
struct VehicleRow {
    #[tabled(rename = "REG")]
    reg: String,
    #[tabled(rename = "OWNER")]
    owner: String,
    #[tabled(rename = "VEHICLE")]
    vehicle: String,
    #[tabled(rename = "YEAR")]
    year: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "TAX")]
    tax: String,
    #[tabled(rename = "MOT")]
    mot: String,
}

fn to_row(v: &Vehicle) -> VehicleRow {
    VehicleRow {
        reg: v.reg_number.clone(),
        owner: v.owner_name.clone(),
        vehicle: format!(
            "{} {}",
            v.make.as_deref().unwrap_or("-"),
            v.model.as_deref().unwrap_or("-")
        ),
        year: v.year.map_or_else(|| "-".into(), |y| y.to_string()),
        status: v.status.clone(),
        tax: v.tax_status.clone().unwrap_or_else(|| "-".into()),
        mot: v.mot_status.clone().unwrap_or_else(|| "-".into()),
    }
}

fn detail(v: &Vehicle) -> String {
    let mut lines = vec![
        format!("Registration: {}", v.reg_number),
        format!("Owner:        {}", v.owner_name),
        format!(
            "Vehicle:      {} {} ({})",
            v.make.as_deref().unwrap_or("-"),
            v.model.as_deref().unwrap_or("-"),
            v.colour.as_deref().unwrap_or("-")
        ),
        format!("Status:       {}", v.status),
    ];
    if let Some(ref tax) = v.tax_status {
        lines.push(format!("Tax:          {tax}"));
    }
    if let Some(ref mot) = v.mot_status {
        lines.push(format!("MOT:          {mot}"));
    }
    if let Some(ref expires) = v.registration_expires {
        lines.push(format!("Expires:      {expires}"));
    }
    lines.join("\n")
}

pub async fn handle(
    client: &RegistryClient,
    args: VehiclesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VehiclesCommand::List => {
            let vehicles = client.get_vehicles().await?;
            let rendered = render_list(&global.output, &vehicles, to_row, |v| {
                v.reg_number.clone()
            });
            print_output(&rendered, global.quiet);
            Ok(())
        }

        VehiclesCommand::Lookup { reg_number } => {
            let vehicle = client.lookup_vehicle(&reg_number).await?;
            let rendered = render_single(&global.output, &vehicle, detail, |v| {
                v.reg_number.clone()
            });
            print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
