use clap::{Args, Subcommand};
use estoque::{
    notifications::{Confirmation, Operation, Subject},
    products::{ProductForm, ProductId},
};

use crate::{
    cli::{ConsoleAdmin, failure, report},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List every product
    List,

    /// Create a product
    Create(CreateProductArgs),

    /// Change a product's fields
    Update(UpdateProductArgs),

    /// Delete a product
    Delete(DeleteProductArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Optional description
    #[arg(long, default_value = "")]
    description: String,

    /// Unit price; `,` or `.` as decimal separator
    #[arg(long)]
    price: String,

    /// Units in stock
    #[arg(long, allow_hyphen_values = true)]
    quantity: String,
}

#[derive(Debug, Args)]
struct UpdateProductArgs {
    /// Product to change
    id: ProductId,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New description; empty to clear it
    #[arg(long)]
    description: Option<String>,

    /// New unit price
    #[arg(long)]
    price: Option<String>,

    /// New stock quantity
    #[arg(long, allow_hyphen_values = true)]
    quantity: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteProductArgs {
    /// Product to delete
    id: ProductId,

    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(admin: &ConsoleAdmin, command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List => list(admin).await,
        ProductsSubcommand::Create(args) => create(admin, args).await,
        ProductsSubcommand::Update(args) => update(admin, args).await,
        ProductsSubcommand::Delete(args) => delete(admin, args).await,
    }
}

async fn list(admin: &ConsoleAdmin) -> Result<(), String> {
    let view = admin
        .load_products()
        .await
        .map_err(failure(Operation::Load, Subject::Products))?;

    println!("{}", render::products(&view));

    Ok(())
}

async fn create(admin: &ConsoleAdmin, args: CreateProductArgs) -> Result<(), String> {
    let form = ProductForm {
        product: None,
        name: args.name,
        description: args.description,
        price: args.price,
        quantity: args.quantity,
    };

    save(admin, &form).await
}

async fn update(admin: &ConsoleAdmin, args: UpdateProductArgs) -> Result<(), String> {
    let product = admin
        .product(args.id)
        .await
        .map_err(failure(Operation::Load, Subject::Product))?;

    let mut form = ProductForm::edit(&product);

    if let Some(name) = args.name {
        form.name = name;
    }

    if let Some(description) = args.description {
        form.description = description;
    }

    if let Some(price) = args.price {
        form.price = price;
    }

    if let Some(quantity) = args.quantity {
        form.quantity = quantity;
    }

    save(admin, &form).await
}

async fn save(admin: &ConsoleAdmin, form: &ProductForm) -> Result<(), String> {
    let refreshed = admin
        .save_product(form)
        .await
        .map_err(failure(Operation::Save, Subject::Product))?;

    report(&refreshed, Subject::Products);

    Ok(())
}

async fn delete(admin: &ConsoleAdmin, args: DeleteProductArgs) -> Result<(), String> {
    if !args.yes {
        return Err(format!(
            "{} Use --yes para confirmar.",
            Confirmation::DeleteProduct(args.id)
        ));
    }

    let refreshed = admin
        .delete_product(args.id)
        .await
        .map_err(failure(Operation::Delete, Subject::Product))?;

    report(&refreshed, Subject::Products);

    Ok(())
}
