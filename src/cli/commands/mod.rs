use std::collections::HashMap;
use std::fmt;

pub mod cashflow;
pub mod customer;
pub mod expense;
pub mod product;
pub mod purchase;
pub mod report;
pub mod sale;
pub mod shop;
pub mod system;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::domain::{Customer, Product, Store};

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(shop::definitions());
    commands.extend(product::definitions());
    commands.extend(customer::definitions());
    commands.extend(sale::definitions());
    commands.extend(purchase::definitions());
    commands.extend(expense::definitions());
    commands.extend(cashflow::definitions());
    commands.extend(report::definitions());
    commands
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

/// Matches `input` against variant display names, case-insensitively.
pub(crate) fn parse_variant<T: Copy + fmt::Display>(
    input: &str,
    variants: &[T],
    what: &str,
) -> Result<T, CommandError> {
    let needle = input.trim().to_lowercase();
    variants
        .iter()
        .find(|variant| variant.to_string().to_lowercase() == needle)
        .copied()
        .ok_or_else(|| {
            let options: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
            CommandError::InvalidArguments(format!(
                "unknown {what} `{input}` (one of: {})",
                options.join(", ")
            ))
        })
}

pub(crate) fn find_product_by_code<'a>(
    store: &'a Store,
    code: &str,
) -> Result<&'a Product, CommandError> {
    store
        .products
        .iter()
        .find(|product| product.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| CommandError::InvalidArguments(format!("no product with code `{code}`")))
}

pub(crate) fn find_customer_by_name<'a>(
    store: &'a Store,
    name: &str,
) -> Result<&'a Customer, CommandError> {
    let needle = name.to_lowercase();
    store
        .customers
        .iter()
        .find(|customer| customer.name.to_lowercase().starts_with(&needle))
        .ok_or_else(|| CommandError::InvalidArguments(format!("no customer matching `{name}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductSeries;

    #[test]
    fn parse_variant_is_case_insensitive() {
        let series = parse_variant("hirono", &ProductSeries::ALL, "series").unwrap();
        assert_eq!(series, ProductSeries::Hirono);
        assert!(parse_variant("dimoo", &ProductSeries::ALL, "series").is_err());
    }
}
