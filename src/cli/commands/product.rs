use crate::cli::commands::{parse_variant, CommandDefinition};
use crate::cli::core::{parse_amount, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::ui::table::{Table, TableColumn};
use crate::domain::{Product, ProductCondition, ProductSeries};
use crate::services::ProductService;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "product",
        "Manage catalog products",
        "product <add|list> — add: product add <code> <name> <series> <condition> <buy> <sell> [stock]",
        cmd_product,
    )]
}

fn cmd_product(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_admin()?;
    match args.split_first() {
        Some((subcommand, rest)) => match subcommand.to_ascii_lowercase().as_str() {
            "add" => handle_add(context, rest),
            "list" => handle_list(context),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown product subcommand `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: product <add|list>".into(),
        )),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let product = if args.is_empty() {
        if context.mode() != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: product add <code> <name> <series> <condition> <buy> <sell> [stock]".into(),
            ));
        }
        forms::product_form(&context.theme)?
    } else {
        parse_add_args(args)?
    };

    let name = product.name.clone();
    ProductService::add(&mut context.state.store, product)?;
    io::print_success(format!("Product `{name}` added."));
    Ok(())
}

fn parse_add_args(args: &[&str]) -> Result<Product, CommandError> {
    let [code, name, series, condition, buy, sell, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: product add <code> <name> <series> <condition> <buy> <sell> [stock]".into(),
        ));
    };
    let series = parse_variant(series, &ProductSeries::ALL, "series")?;
    let condition = parse_variant(condition, &ProductCondition::ALL, "condition")?;
    let purchase_price = parse_amount(buy)?;
    let selling_price = parse_amount(sell)?;
    let stock: i64 = match rest.first() {
        Some(raw) => raw
            .parse()
            .map_err(|_| CommandError::InvalidArguments(format!("invalid stock `{raw}`")))?,
        None => 0,
    };
    Ok(
        Product::new(*code, *name, series, condition, purchase_price, selling_price)
            .with_stock(stock),
    )
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let products = ProductService::list(&context.state.store);
    if products.is_empty() {
        io::print_info("No products recorded.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Code"),
        TableColumn::left("Name"),
        TableColumn::left("Series"),
        TableColumn::left("Condition"),
        TableColumn::right("Buy"),
        TableColumn::right("Sell"),
        TableColumn::right("Stock"),
    ]);
    for product in products {
        table.push_row(vec![
            product.code.clone(),
            product.name.clone(),
            product.series.to_string(),
            product.condition.to_string(),
            context.state.format_amount(product.purchase_price),
            context.state.format_amount(product.selling_price),
            product.stock_quantity.to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
