use crate::cli::commands::{find_product_by_code, CommandDefinition};
use crate::cli::core::{
    parse_amount, parse_date, parse_quantity, CliMode, CommandError, CommandResult, ShellContext,
};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::ui::table::{Table, TableColumn};
use crate::domain::Purchase;
use crate::services::PurchaseService;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "purchase",
        "Record and list stock purchases",
        "purchase <add|list> — add: purchase add <supplier> <product-code> <qty> <cost> [date]",
        cmd_purchase,
    )]
}

fn cmd_purchase(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_admin()?;
    match args.split_first() {
        Some((subcommand, rest)) => match subcommand.to_ascii_lowercase().as_str() {
            "add" => handle_add(context, rest),
            "list" => handle_list(context),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown purchase subcommand `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: purchase <add|list>".into(),
        )),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let purchase = if args.is_empty() {
        if context.mode() != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: purchase add <supplier> <product-code> <qty> <cost> [date]".into(),
            ));
        }
        forms::purchase_form(&context.theme, &context.state.store)?
    } else {
        let [supplier, product_code, quantity, unit_cost, rest @ ..] = args else {
            return Err(CommandError::InvalidArguments(
                "usage: purchase add <supplier> <product-code> <qty> <cost> [date]".into(),
            ));
        };
        let product = find_product_by_code(&context.state.store, product_code)?;
        let quantity = parse_quantity(quantity)?;
        let unit_cost = parse_amount(unit_cost)?;
        let date = match rest.first() {
            Some(raw) => parse_date(raw)?,
            None => context.today(),
        };
        Purchase::new(date, *supplier, product.id, quantity, unit_cost)
    };

    let supplier = purchase.supplier_name.clone();
    PurchaseService::add(&mut context.state.store, purchase)?;
    io::print_success(format!("Purchase from `{supplier}` recorded."));
    Ok(())
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let store = &context.state.store;
    let purchases = PurchaseService::list(store);
    if purchases.is_empty() {
        io::print_info("No purchases recorded.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Supplier"),
        TableColumn::left("Product"),
        TableColumn::right("Qty"),
        TableColumn::right("Unit Cost"),
        TableColumn::right("Total"),
        TableColumn::left("Notes"),
    ]);
    for purchase in purchases {
        let product = store
            .product(purchase.product_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "N/A".into());
        table.push_row(vec![
            purchase.date.to_string(),
            purchase.supplier_name.clone(),
            product,
            purchase.quantity.to_string(),
            context.state.format_amount(purchase.unit_cost),
            context.state.format_amount(purchase.total_cost()),
            purchase.notes.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
