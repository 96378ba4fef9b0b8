use crate::cli::commands::{
    find_customer_by_name, find_product_by_code, parse_variant, CommandDefinition,
};
use crate::cli::core::{
    parse_amount, parse_date, parse_quantity, CliMode, CommandError, CommandResult, ShellContext,
};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::ui::table::{Table, TableColumn};
use crate::domain::{PaymentMethod, Sale, SaleStatus};
use crate::services::SaleService;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "sale",
        "Record and list sales",
        "sale <add|list> — add: sale add <customer> <product-code> <qty> <price> <payment> <status> [date]",
        cmd_sale,
    )]
}

fn cmd_sale(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_admin()?;
    match args.split_first() {
        Some((subcommand, rest)) => match subcommand.to_ascii_lowercase().as_str() {
            "add" => handle_add(context, rest),
            "list" => handle_list(context),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown sale subcommand `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: sale <add|list>".into(),
        )),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sale = if args.is_empty() {
        if context.mode() != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: sale add <customer> <product-code> <qty> <price> <payment> <status> [date]"
                    .into(),
            ));
        }
        forms::sale_form(&context.theme, &context.state.store)?
    } else {
        parse_add_args(context, args)?
    };

    let id = SaleService::add(&mut context.state.store, sale)?;
    io::print_success(format!("Sale recorded (#{}).", crate::cli::core::short_id(id)));
    Ok(())
}

fn parse_add_args(context: &ShellContext, args: &[&str]) -> Result<Sale, CommandError> {
    let [customer, product_code, quantity, unit_price, payment, status, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: sale add <customer> <product-code> <qty> <price> <payment> <status> [date]"
                .into(),
        ));
    };

    let store = &context.state.store;
    let customer = find_customer_by_name(store, customer)?;
    let product = find_product_by_code(store, product_code)?;
    let quantity = parse_quantity(quantity)?;
    let unit_price = parse_amount(unit_price)?;
    let payment = parse_variant(payment, &PaymentMethod::ALL, "payment method")?;
    let status = parse_variant(status, &SaleStatus::ALL, "status")?;
    let date = match rest.first() {
        Some(raw) => parse_date(raw)?,
        None => context.today(),
    };

    Ok(
        Sale::new(date, customer.id, product.id, quantity, unit_price, payment)
            .with_status(status),
    )
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let store = &context.state.store;
    let sales = SaleService::list(store);
    if sales.is_empty() {
        io::print_info("No sales recorded.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Customer"),
        TableColumn::left("Product"),
        TableColumn::right("Qty"),
        TableColumn::right("Unit Price"),
        TableColumn::right("Total"),
        TableColumn::left("Payment"),
        TableColumn::left("Status"),
    ]);
    for sale in sales {
        let customer = store
            .customer(sale.customer_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "N/A".into());
        let product = store
            .product(sale.product_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "N/A".into());
        table.push_row(vec![
            sale.date.to_string(),
            customer,
            product,
            sale.quantity.to_string(),
            context.state.format_amount(sale.unit_price),
            context.state.format_amount(sale.total()),
            sale.payment_method.to_string(),
            sale.status.to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
