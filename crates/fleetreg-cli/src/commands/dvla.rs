//! DVLA registry command handlers.

use tabled::Tabled;

use fleetreg_api::RegistryClient;
use fleetreg_api::models::{DvlaAnalytics, Fine, NewVehicle, Vehicle};

use crate::cli::{
    DvlaArgs, DvlaCommand, DvlaFinesCommand, DvlaVehiclesCommand, GlobalOpts,
};
use crate::error::CliError;
use crate::output::{print_output, render_list, render_single};

use super::util;

#[derive(Tabled)]
struct RegistryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "REG")]
    reg: String,
    #[tabled(rename = "OWNER")]
    owner: String,
    #[tabled(rename = "VEHICLE")]
    vehicle: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "EXPIRES")]
    expires: String,
}

fn registry_row(v: &Vehicle) -> RegistryRow {
    RegistryRow {
        id: v.id.map_or_else(|| "-".into(), |id| id.to_string()),
        reg: v.reg_number.clone(),
        owner: v.owner_name.clone(),
        vehicle: format!(
            "{} {}",
            v.make.as_deref().unwrap_or("-"),
            v.model.as_deref().unwrap_or("-")
        ),
        status: v.status.clone(),
        expires: v
            .registration_expires
            .clone()
            .unwrap_or_else(|| "-".into()),
    }
}

#[derive(Tabled)]
struct FineRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "REG")]
    reg: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "REASON")]
    reason: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

fn fine_row(f: &Fine) -> FineRow {
    FineRow {
        id: f.id.map_or_else(|| "-".into(), |id| id.to_string()),
        reg: f.reg_number.clone(),
        amount: format!("£{:.2}", f.amount),
        reason: f.reason.clone().unwrap_or_else(|| "-".into()),
        status: f.status.clone(),
    }
}

fn analytics_detail(a: &DvlaAnalytics) -> String {
    vec![
        format!("Total vehicles:        {}", a.total_vehicles),
        format!("Active registrations:  {}", a.active_registrations),
        format!("Expired registrations: {}", a.expired_registrations),
        format!("SORN vehicles:         {}", a.sorn_vehicles),
        format!("Renewals this month:   {}", a.renewals_this_month),
        format!("Fines outstanding:     {}", a.fines_outstanding),
    ]
    .join("\n")
}

pub async fn handle(
    client: &RegistryClient,
    args: DvlaArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DvlaCommand::Vehicles(vehicles_args) => match vehicles_args.command {
            DvlaVehiclesCommand::List => {
                let vehicles = client.get_dvla_vehicles().await?;
                let rendered = render_list(&global.output, &vehicles, registry_row, |v| {
                    v.reg_number.clone()
                });
                print_output(&rendered, global.quiet);
                Ok(())
            }

            DvlaVehiclesCommand::Create {
                reg_number,
                owner,
                make,
                model,
                colour,
                year,
            } => {
                let new = NewVehicle {
                    reg_number,
                    owner_name: owner,
                    make,
                    model,
                    colour,
                    year,
                };
                let vehicle = client.create_dvla_vehicle(&new).await?;
                if !global.quiet {
                    eprintln!("Vehicle {} registered", vehicle.reg_number);
                }
                Ok(())
            }

            DvlaVehiclesCommand::Update {
                id,
                reg_number,
                owner,
                make,
                model,
                colour,
                year,
            } => {
                let new = NewVehicle {
                    reg_number,
                    owner_name: owner,
                    make,
                    model,
                    colour,
                    year,
                };
                let vehicle = client.update_dvla_vehicle(id, &new).await?;
                if !global.quiet {
                    eprintln!("Vehicle {} updated", vehicle.reg_number);
                }
                Ok(())
            }

            DvlaVehiclesCommand::Delete { id } => {
                if !util::confirm(
                    &format!("Delete vehicle record {id}? This is destructive."),
                    global.yes,
                )? {
                    return Ok(());
                }
                client.delete_dvla_vehicle(id).await?;
                if !global.quiet {
                    eprintln!("Vehicle record {id} deleted");
                }
                Ok(())
            }
        },

        DvlaCommand::Renew { reg_number, months } => {
            let renewal = client.create_dvla_renewal(&reg_number, months).await?;
            if !global.quiet {
                match renewal.expires_at {
                    Some(expires) => {
                        eprintln!("Renewal for {reg_number} {}: expires {expires}", renewal.status);
                    }
                    None => eprintln!("Renewal for {reg_number} {}", renewal.status),
                }
            }
            Ok(())
        }

        DvlaCommand::Fines(fines_args) => match fines_args.command {
            DvlaFinesCommand::List => {
                let fines = client.get_dvla_fines().await?;
                let rendered = render_list(&global.output, &fines, fine_row, |f| {
                    f.id.map_or_else(|| f.reg_number.clone(), |id| id.to_string())
                });
                print_output(&rendered, global.quiet);
                Ok(())
            }

            DvlaFinesCommand::Clear { id } => {
                let outcome = client.clear_dvla_fine(id).await?;
                if !global.quiet {
                    eprintln!(
                        "Fine {id}: {}",
                        outcome.status.as_deref().unwrap_or("cleared")
                    );
                }
                Ok(())
            }
        },

        DvlaCommand::Analytics => {
            let analytics = client.get_dvla_analytics().await?;
            let rendered = render_single(&global.output, &analytics, analytics_detail, |a| {
                a.total_vehicles.to_string()
            });
            print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
