use clap::{Args, Subcommand};
use estoque::{
    notifications::{Operation, Subject},
    products::ProductId,
};

use crate::{
    cli::{ConsoleAdmin, failure, report},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct StockCommand {
    #[command(subcommand)]
    command: StockSubcommand,
}

#[derive(Debug, Subcommand)]
enum StockSubcommand {
    /// Stock level of every product
    List,

    /// Set a product's stock quantity
    Adjust(AdjustStockArgs),
}

#[derive(Debug, Args)]
struct AdjustStockArgs {
    /// Product to adjust
    id: ProductId,

    /// New quantity
    #[arg(allow_hyphen_values = true)]
    quantity: String,
}

pub(crate) async fn run(admin: &ConsoleAdmin, command: StockCommand) -> Result<(), String> {
    match command.command {
        StockSubcommand::List => {
            let view = admin
                .load_stock()
                .await
                .map_err(failure(Operation::Load, Subject::Stock))?;

            println!("{}", render::stock(&view));

            Ok(())
        }
        StockSubcommand::Adjust(args) => {
            let refreshed = admin
                .adjust_stock(args.id, &args.quantity)
                .await
                .map_err(failure(Operation::Update, Subject::Stock))?;

            report(&refreshed, Subject::Stock);

            Ok(())
        }
    }
}
