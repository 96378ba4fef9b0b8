use crate::cli::commands::{parse_variant, CommandDefinition};
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::ui::table::{Table, TableColumn};
use crate::domain::{Customer, CustomerType};
use crate::services::CustomerService;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "customer",
        "Manage customers",
        "customer <add|list> — add: customer add <name> <phone> <email> <social> <type>",
        cmd_customer,
    )]
}

fn cmd_customer(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_admin()?;
    match args.split_first() {
        Some((subcommand, rest)) => match subcommand.to_ascii_lowercase().as_str() {
            "add" => handle_add(context, rest),
            "list" => handle_list(context),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown customer subcommand `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: customer <add|list>".into(),
        )),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let customer = if args.is_empty() {
        if context.mode() != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: customer add <name> <phone> <email> <social> <type>".into(),
            ));
        }
        forms::customer_form(&context.theme)?
    } else {
        let [name, phone, email, social, customer_type] = args else {
            return Err(CommandError::InvalidArguments(
                "usage: customer add <name> <phone> <email> <social> <type>".into(),
            ));
        };
        let customer_type = parse_variant(customer_type, &CustomerType::ALL, "customer type")?;
        Customer::new(*name, *phone, *email, *social, customer_type)
    };

    let name = customer.name.clone();
    CustomerService::add(&mut context.state.store, customer)?;
    io::print_success(format!("Customer `{name}` added."));
    Ok(())
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let customers = CustomerService::list(&context.state.store);
    if customers.is_empty() {
        io::print_info("No customers recorded.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Name"),
        TableColumn::left("Phone"),
        TableColumn::left("Email"),
        TableColumn::left("Social"),
        TableColumn::left("Type"),
    ]);
    for customer in customers {
        table.push_row(vec![
            customer.name.clone(),
            customer.phone.clone(),
            customer.email.clone(),
            customer.social_handle.clone(),
            customer.customer_type.to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
