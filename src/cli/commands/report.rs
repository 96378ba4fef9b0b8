use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::ui::table::{Table, TableColumn};
use crate::reports::{self, ReportPeriod};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "report",
        "Financial reports and the dashboard",
        "report <pnl [month|all]|series|customers|stock|dashboard>",
        cmd_report,
    )]
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_admin()?;
    match args.split_first() {
        Some((subcommand, rest)) => match subcommand.to_ascii_lowercase().as_str() {
            "pnl" => show_profit_and_loss(context, rest),
            "series" => show_profit_by_series(context),
            "customers" => show_revenue_by_customer_type(context),
            "stock" => show_stock_valuation(context),
            "dashboard" => show_dashboard(context),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown report `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: report <pnl|series|customers|stock|dashboard>".into(),
        )),
    }
}

fn show_profit_and_loss(context: &ShellContext, args: &[&str]) -> CommandResult {
    let period = match args.first().map(|raw| raw.to_ascii_lowercase()) {
        None => ReportPeriod::CurrentMonth,
        Some(raw) if raw == "month" => ReportPeriod::CurrentMonth,
        Some(raw) if raw == "all" => ReportPeriod::AllTime,
        Some(raw) => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown period `{}` (month or all)",
                raw
            )))
        }
    };

    let statement = reports::profit_and_loss(&context.state.store, period, context.today());
    let fmt = |amount: f64| context.state.format_amount(amount);

    output::section(format!("Profit & Loss — {}", statement.period));
    io::print_info(format!("Revenue              {}", fmt(statement.revenue)));
    io::print_info(format!("COGS                ({})", fmt(statement.cogs)));
    io::print_info(format!("Gross Profit         {}", fmt(statement.gross_profit)));
    io::print_info(format!(
        "Operating Expenses  ({})",
        fmt(statement.operating_expenses)
    ));
    if statement.net_profit < 0.0 {
        io::print_warning(format!("Net Profit           {}", fmt(statement.net_profit)));
    } else {
        io::print_success(format!("Net Profit           {}", fmt(statement.net_profit)));
    }
    Ok(())
}

fn show_profit_by_series(context: &ShellContext) -> CommandResult {
    let rows = reports::profit_by_series(&context.state.store);
    if rows.is_empty() {
        io::print_info("No paid sales with a matching product yet.");
        return Ok(());
    }
    let mut table = Table::new(vec![
        TableColumn::left("Series"),
        TableColumn::right("Profit"),
    ]);
    for row in rows {
        table.push_row(vec![
            row.series.to_string(),
            context.state.format_amount(row.profit),
        ]);
    }
    output::section("Profit per Series");
    println!("{}", table.render());
    Ok(())
}

fn show_revenue_by_customer_type(context: &ShellContext) -> CommandResult {
    let rows = reports::revenue_by_customer_type(&context.state.store);
    if rows.is_empty() {
        io::print_info("No paid sales with a matching customer yet.");
        return Ok(());
    }
    let mut table = Table::new(vec![
        TableColumn::left("Customer Type"),
        TableColumn::right("Revenue"),
    ]);
    for row in rows {
        table.push_row(vec![
            row.customer_type.to_string(),
            context.state.format_amount(row.revenue),
        ]);
    }
    output::section("Sales per Customer Type");
    println!("{}", table.render());
    Ok(())
}

fn show_stock_valuation(context: &ShellContext) -> CommandResult {
    let valuation = reports::stock_valuation(&context.state.store);
    let mut table = Table::new(vec![
        TableColumn::left("Product Name"),
        TableColumn::right("Value"),
    ]);
    for row in &valuation.rows {
        table.push_row(vec![
            row.product_name.clone(),
            context.state.format_amount(row.value),
        ]);
    }
    output::section("Stock Value Report");
    println!("{}", table.render());
    io::print_info(format!(
        "Total stock value: {}",
        context.state.format_amount(valuation.total)
    ));
    Ok(())
}

fn show_dashboard(context: &ShellContext) -> CommandResult {
    let snapshot = reports::dashboard(&context.state.store, context.today());
    let fmt = |amount: f64| context.state.format_amount(amount);

    output::section("Dashboard");
    io::print_info(format!("Monthly Revenue      {}", fmt(snapshot.monthly_revenue)));
    io::print_info(format!("Monthly Profit       {}", fmt(snapshot.monthly_profit)));
    io::print_info(format!("Total Stock          {}", snapshot.total_stock));
    io::print_info(format!(
        "Best Selling Series  {}",
        snapshot
            .best_series
            .map(|series| series.to_string())
            .unwrap_or_else(|| "N/A".into())
    ));
    io::print_info(format!(
        "Customers {} · Products {} · Pending Orders {}",
        snapshot.total_customers, snapshot.total_products, snapshot.pending_orders
    ));

    if !snapshot.daily_sales.is_empty() {
        let mut table = Table::new(vec![
            TableColumn::left("Date"),
            TableColumn::right("Sales"),
        ]);
        for day in &snapshot.daily_sales {
            table.push_row(vec![day.date.to_string(), fmt(day.total)]);
        }
        output::section("Sales by Day");
        println!("{}", table.render());
    }

    output::section("Recent Activity");
    for sale in &snapshot.recent_sales {
        io::print_info(format!(
            "{} bought {}x {}",
            sale.customer_name, sale.quantity, sale.product_name
        ));
    }
    for expense in &snapshot.recent_expenses {
        io::print_info(format!("{} — {}", expense.description, fmt(expense.amount)));
    }

    if snapshot.low_stock.is_empty() {
        io::print_info("No low stock items.");
    } else {
        output::section("Low Stock Alerts");
        for alert in &snapshot.low_stock {
            io::print_warning(format!(
                "{} — {} left",
                alert.product_name, alert.stock_quantity
            ));
        }
    }
    Ok(())
}
