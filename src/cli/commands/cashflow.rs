use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::ui::table::{Table, TableColumn};
use crate::cashflow;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "cashflow",
        "Show the derived cash-flow feed",
        "cashflow",
        cmd_cashflow,
    )]
}

fn cmd_cashflow(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.require_admin()?;
    let entries = context.state.store.cash_flow();
    if entries.is_empty() {
        io::print_info("No cash-flow activity yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Type"),
        TableColumn::left("Source"),
        TableColumn::right("Amount"),
        TableColumn::right("Balance"),
    ]);
    for balanced in cashflow::with_running_balance(entries) {
        table.push_row(vec![
            balanced.entry.date.to_string(),
            balanced.entry.direction.to_string(),
            balanced.entry.source.clone(),
            context.state.format_amount(balanced.entry.amount),
            context.state.format_amount(balanced.balance),
        ]);
    }

    output::section("Cash Flow");
    println!("{}", table.render());

    let inflow = cashflow::total_inflow(entries);
    let outflow = cashflow::total_outflow(entries);
    io::print_info(format!(
        "Inflow {}  ·  Outflow {}  ·  Net {}",
        context.state.format_amount(inflow),
        context.state.format_amount(outflow),
        context.state.format_amount(inflow - outflow),
    ));
    Ok(())
}
