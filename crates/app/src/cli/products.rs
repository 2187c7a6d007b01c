use std::io::Write;

use clap::{Args, Subcommand};
use salesdesk::review::format_amount;
use salesdesk_app::{context::AppContext, domain::products::records::ProductRecord};
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};

use crate::cli::write_line;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    List(ListProductsArgs),
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Filter on code, name or category
    #[arg(long)]
    search: Option<String>,
}

pub(crate) async fn run(
    command: ProductsCommand,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    let ProductsSubcommand::List(args) = command.command;

    let products = match args.search.as_deref() {
        Some(term) => app.products.search_products(term).await,
        None => app.products.list_products().await,
    }
    .map_err(|error| format!("failed to fetch products: {error}"))?;

    if products.is_empty() {
        return write_line(out, "no products found");
    }

    let mut builder = Builder::default();

    builder.push_record(["Code", "Name", "Category", "Subcategory", "Dimensions", "Prices"]);

    for product in &products {
        builder.push_record([
            product.code.clone(),
            product.name.clone(),
            product.category.clone(),
            product.subcategory.clone(),
            product.dimensions.clone(),
            prices(product)?,
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    write_line(out, &table.to_string())
}

fn prices(product: &ProductRecord) -> Result<String, String> {
    let mut prices: Vec<_> = product.prices.iter().collect();
    prices.sort_by(|a, b| a.0.cmp(b.0));

    prices
        .into_iter()
        .map(|(country, price)| {
            format_amount(*price)
                .map(|amount| format!("{country} {amount}"))
                .map_err(|error| format!("failed to format price: {error}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|prices| prices.join("\n"))
}
