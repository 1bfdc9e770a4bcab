use std::str::FromStr;

use clap::{Args, Subcommand};
use estoque::{
    admin::AdminError,
    builder::{OrderDraft, RowId},
    notifications::{Confirmation, Operation, Subject},
    orders::OrderId,
    products::ProductId,
};
use thiserror::Error;

use crate::{
    cli::{ConsoleAdmin, failure, report},
    render,
};

/// Row every new draft starts with.
const FIRST_ROW: RowId = RowId(1);

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List every order
    List,

    /// Show an order's items
    Show(ShowOrderArgs),

    /// Place an order
    Create(CreateOrderArgs),

    /// Delete an order
    Delete(DeleteOrderArgs),
}

#[derive(Debug, Args)]
struct ShowOrderArgs {
    /// Order to show
    id: OrderId,
}

#[derive(Debug, Args)]
struct CreateOrderArgs {
    /// Customer name
    #[arg(long, default_value = "")]
    customer: String,

    /// Order line as `<product id>:<quantity>`; repeat for more lines
    #[arg(long = "item")]
    items: Vec<ItemArg>,
}

#[derive(Debug, Args)]
struct DeleteOrderArgs {
    /// Order to delete
    id: OrderId,

    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
}

/// A `<product id>:<quantity>` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemArg {
    product: ProductId,
    quantity: String,
}

#[derive(Debug, Error)]
#[error("expected <product id>:<quantity>, got {0:?}")]
struct ItemArgError(String);

impl FromStr for ItemArg {
    type Err = ItemArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product, quantity) = s
            .split_once(':')
            .ok_or_else(|| ItemArgError(s.to_string()))?;

        let product = product
            .parse()
            .map_err(|_err| ItemArgError(s.to_string()))?;

        Ok(Self {
            product,
            quantity: quantity.trim().to_string(),
        })
    }
}

pub(crate) async fn run(admin: &ConsoleAdmin, command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List => list(admin).await,
        OrdersSubcommand::Show(args) => show(admin, args).await,
        OrdersSubcommand::Create(args) => create(admin, args).await,
        OrdersSubcommand::Delete(args) => delete(admin, args).await,
    }
}

async fn list(admin: &ConsoleAdmin) -> Result<(), String> {
    let view = admin
        .load_orders()
        .await
        .map_err(failure(Operation::Load, Subject::Orders))?;

    println!("{}", render::orders(&view));

    Ok(())
}

async fn show(admin: &ConsoleAdmin, args: ShowOrderArgs) -> Result<(), String> {
    let details = admin
        .order_details(args.id)
        .await
        .map_err(|error| match error {
            AdminError::UnknownOrder(id) => format!("Pedido #{id} não encontrado"),
            error => error.user_message(Operation::Load, Subject::Order),
        })?;

    println!("{}", render::order_details(&details));

    Ok(())
}

async fn create(admin: &ConsoleAdmin, args: CreateOrderArgs) -> Result<(), String> {
    let mut draft = OrderDraft::new();

    draft.set_customer(args.customer);

    if !args.items.is_empty() {
        admin
            .reload_products()
            .await
            .map_err(failure(Operation::Load, Subject::Products))?;
    }

    let options = admin.product_options();

    for (index, item) in args.items.into_iter().enumerate() {
        let option = options
            .iter()
            .find(|option| option.id == item.product)
            .ok_or_else(|| format!("Produto #{} não encontrado", item.product))?;

        let row = if index == 0 {
            FIRST_ROW
        } else {
            draft.add_row()
        };

        draft.select_product(row, Some(option));
        draft.set_quantity(row, item.quantity);
    }

    let total = admin.locale().format_price(draft.grand_total());

    let refreshed = admin
        .submit_order(&draft)
        .await
        .map_err(failure(Operation::Save, Subject::Order))?;

    println!("Total estimado: {total}");

    report(&refreshed, Subject::Orders);

    Ok(())
}

async fn delete(admin: &ConsoleAdmin, args: DeleteOrderArgs) -> Result<(), String> {
    if !args.yes {
        return Err(format!(
            "{} Use --yes para confirmar.",
            Confirmation::DeleteOrder(args.id)
        ));
    }

    let refreshed = admin
        .delete_order(args.id)
        .await
        .map_err(failure(Operation::Delete, Subject::Order))?;

    report(&refreshed, Subject::Orders);

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn item_args_split_product_and_quantity() -> TestResult {
        let item: ItemArg = "3:2".parse()?;

        assert_eq!(
            item,
            ItemArg {
                product: ProductId(3),
                quantity: "2".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn item_args_need_a_separator_and_numeric_product() {
        assert!("3".parse::<ItemArg>().is_err());
        assert!("abc:2".parse::<ItemArg>().is_err());
    }

    #[test]
    fn bad_quantities_are_left_to_the_draft() -> TestResult {
        let item: ItemArg = "3:lots".parse()?;

        assert_eq!(item.quantity, "lots");

        Ok(())
    }
}
