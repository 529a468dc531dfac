use crate::*;

pub fn handle_admin_commands(cli: &Cli, state: &mut State) -> anyhow::Result<bool> {
    let Commands::Admin { command } = &cli.command else {
        return Ok(false);
    };
    let admin = require_admin(state)?;

    match command {
        AdminCommands::Review => {
            let rows: Vec<ReviewRow> = state
                .services
                .iter()
                .filter(|l| l.status == ListingStatus::Flagged)
                .map(|l| ReviewRow {
                    id: l.id.clone(),
                    title: l.title.clone(),
                    provider_name: l.provider_name.clone(),
                    reports: l.reports.len(),
                })
                .collect();
            print_out(cli.json, &rows, |r| {
                format!(
                    "{}\t{}\t{}\t{} reports",
                    r.id, r.title, r.provider_name, r.reports
                )
            })?;
        }
        AdminCommands::Approve { listing } => {
            let approved = approve_listing(state, listing)?;
            save_services(state)?;
            audit(
                "approve",
                serde_json::json!({ "listing": approved.id, "admin": admin.id }),
            );
            print_one(cli.json, approved, |l| {
                format!("approved {} ({})", l.title, l.id)
            })?;
        }
        AdminCommands::Remove { listing } => {
            let removed = soft_delete(state, listing)?;
            save_services(state)?;
            audit(
                "admin_remove",
                serde_json::json!({ "listing": removed.id, "admin": admin.id }),
            );
            print_one(cli.json, removed, |l| {
                format!("removed {} ({})", l.title, l.id)
            })?;
        }
        AdminCommands::Export { out } => {
            let report = export_state(state, out.as_deref())?;
            audit(
                "export",
                serde_json::json!({ "path": report.path, "admin": admin.id }),
            );
            print_one(cli.json, report, |r| {
                format!(
                    "exported {} users and {} services to {}",
                    r.users, r.services, r.path
                )
            })?;
        }
    }

    Ok(true)
}
