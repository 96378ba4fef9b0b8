use uuid::Uuid;

use crate::cli::commands::{find_product_by_code, CommandDefinition};
use crate::cli::core::{parse_quantity, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::output;
use crate::cli::ui::table::{Table, TableColumn};
use crate::storefront::{self, FeaturedItem};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "shop",
        "Browse the storefront and manage your cart",
        "shop <list|cart|add <code>|qty <code> <n>|remove <code>|checkout [name email]>",
        cmd_shop,
    )]
}

fn cmd_shop(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.split_first() {
        Some((subcommand, rest)) => match subcommand.to_ascii_lowercase().as_str() {
            "list" => handle_list(context),
            "cart" => handle_cart(context),
            "add" => handle_add(context, rest),
            "qty" => handle_qty(context, rest),
            "remove" => handle_remove(context, rest),
            "checkout" => handle_checkout(context, rest),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown shop subcommand `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: shop <list|cart|add|qty|remove|checkout>".into(),
        )),
    }
}

fn handle_list(context: &ShellContext) -> CommandResult {
    let items = storefront::featured(&context.state.store);
    if items.is_empty() {
        io::print_info("Nothing in stock right now — check back soon.");
        return Ok(());
    }

    let store = &context.state.store;
    let mut table = Table::new(vec![
        TableColumn::left("Code"),
        TableColumn::left("Name"),
        TableColumn::left("Series"),
        TableColumn::right("Price"),
    ]);
    for item in &items {
        let code = store
            .product(item.product_id)
            .map(|product| product.code.clone())
            .unwrap_or_default();
        table.push_row(vec![
            code,
            item.name.clone(),
            item.series.to_string(),
            context.state.format_amount(item.price),
        ]);
    }
    output::section("Featured Products");
    println!("{}", table.render());
    Ok(())
}

fn handle_cart(context: &ShellContext) -> CommandResult {
    let cart = &context.state.cart;
    if cart.is_empty() {
        io::print_info("Your cart is empty.");
        return Ok(());
    }
    let mut table = Table::new(vec![
        TableColumn::left("Name"),
        TableColumn::right("Qty"),
        TableColumn::right("Unit Price"),
        TableColumn::right("Line Total"),
    ]);
    for line in cart.items() {
        table.push_row(vec![
            line.name.clone(),
            line.quantity.to_string(),
            context.state.format_amount(line.unit_price),
            context
                .state
                .format_amount(f64::from(line.quantity) * line.unit_price),
        ]);
    }
    output::section("Shopping Cart");
    println!("{}", table.render());
    io::print_info(format!(
        "{} item(s) · Total {}",
        cart.item_count(),
        context.state.format_amount(cart.total())
    ));
    Ok(())
}

fn resolve_item(context: &ShellContext, code: &str) -> Result<FeaturedItem, CommandError> {
    let product = find_product_by_code(&context.state.store, code)?;
    Ok(FeaturedItem {
        product_id: product.id,
        name: product.name.clone(),
        series: product.series,
        price: product.selling_price,
    })
}

fn resolve_product_id(context: &ShellContext, code: &str) -> Result<Uuid, CommandError> {
    Ok(find_product_by_code(&context.state.store, code)?.id)
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(code) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: shop add <code>".into()));
    };
    let item = resolve_item(context, code)?;
    let name = item.name.clone();
    context.state.cart.add(&item);
    io::print_success(format!("Added `{name}` to your cart."));
    Ok(())
}

fn handle_qty(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [code, quantity] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: shop qty <code> <n>".into(),
        ));
    };
    let product_id = resolve_product_id(context, code)?;
    // Zero removes the line outright, matching the cart contract.
    let quantity = if *quantity == "0" {
        0
    } else {
        parse_quantity(quantity)?
    };
    context.state.cart.set_quantity(product_id, quantity);
    io::print_info("Cart updated.");
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(code) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: shop remove <code>".into(),
        ));
    };
    let product_id = resolve_product_id(context, code)?;
    context.state.cart.remove(product_id);
    io::print_info("Item removed from cart.");
    Ok(())
}

fn handle_checkout(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, email) = match args {
        [name, email] => (name.to_string(), email.to_string()),
        [] if context.mode() == CliMode::Interactive => forms::checkout_form(&context.theme)?,
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: shop checkout <name> <email>".into(),
            ))
        }
    };
    let message = context.state.cart.checkout(&name, &email)?;
    io::print_success(message);
    Ok(())
}
