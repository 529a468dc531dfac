use crate::*;

pub fn handle_account_commands(cli: &Cli, state: &mut State) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Register {
            name,
            email,
            nim,
            password,
        } => {
            let user = register(state, name, email, nim, password)?;
            save_users(state)?;
            audit("register", serde_json::json!({ "user": user.id }));
            print_one(cli.json, user.summary(), |u| {
                format!("registered {} ({}), log in to continue", u.name, u.email)
            })?;
        }
        Commands::Login {
            identifier,
            password,
        } => {
            let user = login(state, identifier, password)?;
            audit("login", serde_json::json!({ "user": user.id }));
            print_one(cli.json, user.summary(), |u| {
                format!("logged in as {} ({:?})", u.name, u.role)
            })?;
        }
        Commands::Logout => {
            let existed = logout()?;
            audit("logout", serde_json::json!({ "had_session": existed }));
            print_one(cli.json, existed, |e| {
                if *e {
                    "logged out".to_string()
                } else {
                    "no active session".to_string()
                }
            })?;
        }
        Commands::Whoami => {
            let user = session_user(state)?;
            let report = WhoamiReport {
                logged_in: user.is_some(),
                user: user.map(|u| u.summary()),
            };
            print_one(cli.json, report, |r| match &r.user {
                Some(u) => format!("{} <{}> ({:?})", u.name, u.email, u.role),
                None => "not logged in".to_string(),
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
