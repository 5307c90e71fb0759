//! Auth command handlers.

use owo_colors::OwoColorize;

use fleetreg_api::RegistryClient;

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::should_color;

use super::util;

pub async fn handle(
    client: &RegistryClient,
    args: AuthArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login { username, password } => {
            let password = util::resolve_password(password)?;
            let resp = client.login(&username, &password).await?;
            if !global.quiet {
                let role = resp
                    .role
                    .unwrap_or_else(|| client.portal().role().to_owned());
                eprintln!("Logged in to the {} console as {role}", client.portal().as_str());
            }
            Ok(())
        }

        AuthCommand::Logout => {
            client.logout().await?;
            if !global.quiet {
                eprintln!("Logged out");
            }
            Ok(())
        }

        AuthCommand::Register {
            username,
            full_name,
            password,
        } => {
            let password = util::resolve_password(password)?;
            let outcome = client.register(&username, &password, &full_name).await?;
            if !global.quiet {
                match outcome.message {
                    Some(message) => eprintln!("{message}"),
                    None => eprintln!("Account '{username}' registered"),
                }
            }
            Ok(())
        }

        AuthCommand::Status => {
            let color = should_color(&global.color);
            match client.session() {
                Some(session) => {
                    let label = if color {
                        "authenticated".green().to_string()
                    } else {
                        "authenticated".to_owned()
                    };
                    println!("{label} (role: {})", session.role);
                }
                None => {
                    let label = if color {
                        "anonymous".yellow().to_string()
                    } else {
                        "anonymous".to_owned()
                    };
                    println!("{label}");
                }
            }
            Ok(())
        }
    }
}
