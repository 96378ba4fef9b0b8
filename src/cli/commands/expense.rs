use crate::cli::commands::{parse_variant, CommandDefinition};
use crate::cli::core::{parse_amount, parse_date, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::ui::table::{Table, TableColumn};
use crate::domain::{Expense, ExpenseCategory};
use crate::services::ExpenseService;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "expense",
        "Record and list expenses",
        "expense <add|list> — add: expense add <category> <description> <amount> [date]",
        cmd_expense,
    )]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_admin()?;
    match args.split_first() {
        Some((subcommand, rest)) => match subcommand.to_ascii_lowercase().as_str() {
            "add" => handle_add(context, rest),
            "list" => handle_list(context),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown expense subcommand `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: expense <add|list>".into(),
        )),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let expense = if args.is_empty() {
        if context.mode() != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: expense add <category> <description> <amount> [date]".into(),
            ));
        }
        forms::expense_form(&context.theme)?
    } else {
        let [category, description, amount, rest @ ..] = args else {
            return Err(CommandError::InvalidArguments(
                "usage: expense add <category> <description> <amount> [date]".into(),
            ));
        };
        let category = parse_variant(category, &ExpenseCategory::ALL, "category")?;
        let amount = parse_amount(amount)?;
        let date = match rest.first() {
            Some(raw) => parse_date(raw)?,
            None => context.today(),
        };
        Expense::new(date, category, *description, amount)
    };

    let description = expense.description.clone();
    ExpenseService::add(&mut context.state.store, expense)?;
    io::print_success(format!("Expense `{description}` recorded."));
    Ok(())
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let expenses = ExpenseService::list(&context.state.store);
    if expenses.is_empty() {
        io::print_info("No expenses recorded.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Category"),
        TableColumn::left("Description"),
        TableColumn::right("Amount"),
        TableColumn::left("Receipt"),
    ]);
    for expense in expenses {
        table.push_row(vec![
            expense.date.to_string(),
            expense.category.to_string(),
            expense.description.clone(),
            context.state.format_amount(expense.amount),
            expense.receipt.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
