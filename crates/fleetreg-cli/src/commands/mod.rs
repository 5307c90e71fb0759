//! Command dispatch: bridges CLI args -> typed client calls -> output.

pub mod auth;
pub mod config_cmd;
pub mod dvla;
pub mod stats;
pub mod util;
pub mod vehicles;
pub mod violations;

use fleetreg_api::RegistryClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a registry-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &RegistryClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Auth(args) => auth::handle(client, args, global).await,
        Command::Vehicles(args) => vehicles::handle(client, args, global).await,
        Command::Violations(args) => violations::handle(client, args, global).await,
        Command::Dvla(args) => dvla::handle(client, args, global).await,
        Command::Stats(args) => stats::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
