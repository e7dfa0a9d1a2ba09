//! One-shot deposit and purchase commands against the backend.

use crate::controller::{DashboardController, TransactionError};
use crate::ui::format::format_currency;
use crate::{print_cmd_error, print_cmd_info, print_cmd_success};
use std::error::Error;

/// Submits a deposit for the configured user.
///
/// # Arguments
/// * `controller` - The dashboard controller bound to the user.
/// * `amount` - The raw amount argument; validated before any request.
pub async fn run_deposit(
    controller: &DashboardController,
    amount: &str,
) -> Result<(), Box<dyn Error>> {
    match controller.deposit(amount).await {
        Ok(receipt) => {
            print_cmd_success!(
                "Funds received.",
                "Available balance: {}",
                format_currency(receipt.available_balance)
            );
            if let Some(overview) = controller.snapshot().overview {
                print_cmd_info!(
                    "Account overview refreshed.",
                    "Total assets: {}",
                    format_currency(overview.total_assets)
                );
            }
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Deposit failed.", &e.user_message());
            Err(e.into())
        }
    }
}

/// Submits a fund purchase for the configured user.
pub async fn run_purchase(
    controller: &DashboardController,
    fund_id: &str,
    amount: &str,
) -> Result<(), Box<dyn Error>> {
    match controller.purchase(fund_id, amount).await {
        Ok(()) => {
            print_cmd_success!("Purchase submitted.", "Fund: {}", fund_id);
            let snapshot = controller.snapshot();
            if let Some(overview) = snapshot.overview {
                print_cmd_info!(
                    "Account overview refreshed.",
                    "Available balance: {}",
                    format_currency(overview.available_balance)
                );
            }
            print_cmd_info!("Holdings refreshed.", "{} positions", snapshot.holdings.len());
            Ok(())
        }
        Err(e @ TransactionError::Invalid(_)) => {
            print_cmd_error!("Purchase rejected.", &e.user_message());
            Err(e.into())
        }
        Err(e) => {
            print_cmd_error!("Purchase failed.", &e.user_message());
            Err(e.into())
        }
    }
}
