use std::io::Write;

use clap::{Args, Subcommand};
use salesdesk_app::context::AppContext;

use crate::cli::write_line;

#[derive(Debug, Args)]
pub(crate) struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
enum AuthSubcommand {
    Login(LoginArgs),
    Register(RegisterArgs),
    Logout,
    Whoami,
}

#[derive(Debug, Args)]
struct LoginArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "SALESDESK_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
struct RegisterArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "SALESDESK_PASSWORD", hide_env_values = true)]
    password: String,

    /// Display name
    #[arg(long)]
    name: String,
}

pub(crate) async fn run(
    command: AuthCommand,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        AuthSubcommand::Login(args) => {
            let signed_in = app
                .auth
                .login(&args.email, &args.password)
                .await
                .map_err(|error| format!("login failed: {error}"))?;

            if !signed_in {
                return Err("invalid email or password".to_string());
            }

            whoami(app, out)
        }
        AuthSubcommand::Register(args) => {
            let registered = app
                .auth
                .register(&args.email, &args.password, &args.name)
                .await
                .map_err(|error| format!("registration failed: {error}"))?;

            if !registered {
                return Err(format!("{} is already registered", args.email));
            }

            whoami(app, out)
        }
        AuthSubcommand::Logout => {
            app.auth
                .logout()
                .await
                .map_err(|error| format!("logout failed: {error}"))?;

            write_line(out, "signed out")
        }
        AuthSubcommand::Whoami => whoami(app, out),
    }
}

fn whoami(app: &AppContext, out: &mut impl Write) -> Result<(), String> {
    match app.auth.current_user() {
        Some(user) => write_line(out, &format!("{} <{}>", user.name, user.email)),
        None => write_line(out, "not signed in"),
    }
}
