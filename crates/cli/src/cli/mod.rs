use clap::{Parser, Subcommand};
use estoque::{
    admin::{Admin, AdminError, Refreshed},
    api::{ApiClient, HttpTransport},
    notifications::{Operation, Subject},
};

use crate::{
    config::{ApiConfig, DisplayConfig, LoggingConfig},
    render,
};

mod dashboard;
mod orders;
mod products;
mod status;
mod stock;

type ConsoleAdmin = Admin<HttpTransport>;

#[derive(Debug, Parser)]
#[command(
    name = "estoque",
    about = "Inventory and order administration console",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(flatten)]
    api: ApiConfig,

    #[command(flatten)]
    display: DisplayConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summary figures, recent orders and low stock
    Dashboard,

    /// Product catalog
    Products(products::ProductsCommand),

    /// Orders
    Orders(orders::OrdersCommand),

    /// Stock levels
    Stock(stock::StockCommand),

    /// Backend status
    Status,
}

impl Cli {
    /// Parse arguments, reading `.env` first.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let locale = self.display.locale().map_err(|error| error.to_string())?;

        let admin = Admin::new(
            ApiClient::new(HttpTransport::new(self.api.api_url)),
            locale,
        );

        match self.command {
            Commands::Dashboard => dashboard::run(&admin).await,
            Commands::Products(command) => products::run(&admin, command).await,
            Commands::Orders(command) => orders::run(&admin, command).await,
            Commands::Stock(command) => stock::run(&admin, command).await,
            Commands::Status => status::run(&admin).await,
        }
    }
}

/// User-facing message for a failed operation.
fn failure(operation: Operation, subject: Subject) -> impl FnOnce(AdminError) -> String {
    move |error| error.user_message(operation, subject)
}

/// Print the outcome of a mutation and the sections reloaded after it.
fn report(refreshed: &Refreshed, subject: Subject) {
    println!("{}", refreshed.message);

    match &refreshed.section {
        Ok(view) => println!("\n{}", render::section(view)),
        Err(error) => eprintln!("{}", error.user_message(Operation::Load, subject)),
    }

    if let Err(error) = &refreshed.dashboard {
        eprintln!(
            "{}",
            error.user_message(Operation::Load, Subject::Dashboard)
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommands() -> TestResult {
        let cli = Cli::try_parse_from([
            "estoque",
            "stock",
            "adjust",
            "3",
            "0",
            "--api-url",
            "http://backend/api",
        ])?;

        assert_eq!(cli.api.api_url, "http://backend/api");
        assert!(
            matches!(cli.command, Commands::Stock(_)),
            "expected stock command"
        );

        Ok(())
    }

    #[test]
    fn order_items_repeat() -> TestResult {
        let cli = Cli::try_parse_from([
            "estoque", "orders", "create", "--customer", "Ana", "--item", "3:2", "--item", "4:1",
        ])?;

        assert!(
            matches!(cli.command, Commands::Orders(_)),
            "expected orders command"
        );

        Ok(())
    }
}
