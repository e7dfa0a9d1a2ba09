//! One-shot donation commands: list public-good projects and contribute.

use crate::controller::DashboardController;
use crate::ui::format::format_currency;
use crate::{print_cmd_error, print_cmd_info, print_cmd_item, print_cmd_success};
use std::error::Error;

/// Lists public-good projects and the user's contribution history.
pub async fn run_donations(controller: &DashboardController) -> Result<(), Box<dyn Error>> {
    controller
        .load_donations()
        .await
        .map_err(|e| format!("Failed to load donation data: {}", e))?;

    let snapshot = controller.snapshot();
    if snapshot.projects.is_empty() {
        print_cmd_info!("No public-good projects are open right now.", "");
    } else {
        print_cmd_info!("Open projects", "{}", snapshot.projects.len());
        for project in &snapshot.projects {
            print_cmd_item!(
                &project.name,
                "[{}] {} of {} ({:.0}%), real donations {}",
                project.id,
                format_currency(project.current_virtual_amount),
                format_currency(project.target_amount),
                project.progress() * 100.0,
                format_currency(project.real_donated_amount)
            );
        }
    }

    if snapshot.contributions.is_empty() {
        print_cmd_info!("No contributions recorded yet.", "");
    } else {
        print_cmd_info!(
            "Contribution history",
            "{} entries",
            snapshot.contributions.len()
        );
        for record in &snapshot.contributions {
            print_cmd_item!(
                &record.project_id.name,
                "{} virtual ({} real) on {}",
                format_currency(record.virtual_amount),
                format_currency(record.real_amount_equivalent),
                record.timestamp
            );
        }
    }
    Ok(())
}

/// Records a contribution against a project, then shows the refreshed state.
pub async fn run_contribute(
    controller: &DashboardController,
    project_id: &str,
    amount: &str,
) -> Result<(), Box<dyn Error>> {
    match controller.contribute(project_id, amount).await {
        Ok(()) => {
            print_cmd_success!("Contribution recorded.", "Project: {}", project_id);
            let snapshot = controller.snapshot();
            if let Some(project) = snapshot.projects.iter().find(|p| p.id == project_id) {
                print_cmd_item!(
                    &project.name,
                    "Now at {} of {} ({:.0}%)",
                    format_currency(project.current_virtual_amount),
                    format_currency(project.target_amount),
                    project.progress() * 100.0
                );
            }
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Contribution failed.", &e.user_message());
            Err(e.into())
        }
    }
}
