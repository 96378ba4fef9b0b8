//! Dialoguer-backed entry forms for the admin shell.
//!
//! Each form validates required fields before the submission reaches the
//! service layer, mirroring the client-side checks of the original forms;
//! the services re-check, so nothing depends on the UI being honest.

use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::cli::core::CommandError;
use crate::domain::common::Displayable;
use crate::domain::{
    Customer, CustomerType, Expense, ExpenseCategory, PaymentMethod, Product, ProductCondition,
    ProductSeries, Purchase, Sale, SaleStatus, Store,
};

fn required_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Value cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn optional_text(theme: &ColorfulTheme, prompt: &str) -> Result<Option<String>, CommandError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let trimmed = value.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}

fn date_input(theme: &ColorfulTheme, prompt: &str) -> Result<NaiveDate, CommandError> {
    let today = Local::now().date_naive();
    let raw: String = Input::with_theme(theme)
        .with_prompt(format!("{prompt} (YYYY-MM-DD)"))
        .default(today.to_string())
        .validate_with(|input: &String| {
            NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "Use YYYY-MM-DD format")
        })
        .interact_text()?;
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").unwrap_or(today))
}

fn amount_input(theme: &ColorfulTheme, prompt: &str, default: Option<f64>) -> Result<f64, CommandError> {
    let mut input = Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| {
            if *value > 0.0 {
                Ok(())
            } else {
                Err("Value must be greater than zero")
            }
        });
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}

fn quantity_input(theme: &ColorfulTheme, prompt: &str) -> Result<u32, CommandError> {
    let value: u32 = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(1)
        .validate_with(|value: &u32| {
            if *value >= 1 {
                Ok(())
            } else {
                Err("Quantity must be at least 1")
            }
        })
        .interact_text()?;
    Ok(value)
}

fn select_variant<T: Copy + std::fmt::Display>(
    theme: &ColorfulTheme,
    prompt: &str,
    variants: &[T],
    default: usize,
) -> Result<T, CommandError> {
    let labels: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(variants[index])
}

/// Collects a new product from the operator.
pub fn product_form(theme: &ColorfulTheme) -> Result<Product, CommandError> {
    let code = required_text(theme, "Product code")?;
    let name = required_text(theme, "Product name")?;
    let series = select_variant(theme, "Series", &ProductSeries::ALL, 0)?;
    let condition = select_variant(theme, "Condition", &ProductCondition::ALL, 0)?;
    let purchase_price = amount_input(theme, "Purchase price", None)?;
    let selling_price = amount_input(theme, "Selling price", None)?;
    let stock: i64 = Input::with_theme(theme)
        .with_prompt("Opening stock")
        .default(0)
        .interact_text()?;
    Ok(
        Product::new(code, name, series, condition, purchase_price, selling_price)
            .with_stock(stock),
    )
}

/// Collects a new customer from the operator.
pub fn customer_form(theme: &ColorfulTheme) -> Result<Customer, CommandError> {
    let name = required_text(theme, "Customer name")?;
    let phone = required_text(theme, "Phone")?;
    let email = required_text(theme, "Email")?;
    let social = required_text(theme, "Social handle")?;
    let customer_type = select_variant(theme, "Customer type", &CustomerType::ALL, 0)?;
    Ok(Customer::new(name, phone, email, social, customer_type))
}

/// Collects a new sale, picking customer and product from the store.
pub fn sale_form(theme: &ColorfulTheme, store: &Store) -> Result<Sale, CommandError> {
    if store.customers.is_empty() {
        return Err(CommandError::Message(
            "No customers yet. Add one with `customer add` first.".into(),
        ));
    }
    if store.products.is_empty() {
        return Err(CommandError::Message(
            "No products yet. Add one with `product add` first.".into(),
        ));
    }

    let date = date_input(theme, "Sale date")?;

    let customer_labels: Vec<String> = store
        .customers
        .iter()
        .map(|customer| customer.display_label())
        .collect();
    let customer_idx = Select::with_theme(theme)
        .with_prompt("Customer")
        .items(&customer_labels)
        .default(0)
        .interact()?;
    let customer = &store.customers[customer_idx];

    let product_labels: Vec<String> = store
        .products
        .iter()
        .map(|product| product.display_label())
        .collect();
    let product_idx = Select::with_theme(theme)
        .with_prompt("Product")
        .items(&product_labels)
        .default(0)
        .interact()?;
    let product = &store.products[product_idx];

    let quantity = quantity_input(theme, "Quantity")?;
    let unit_price = amount_input(theme, "Unit price", Some(product.selling_price))?;
    let payment_method = select_variant(theme, "Payment method", &PaymentMethod::ALL, 0)?;
    // Pending is the default, as on the original entry form.
    let status = select_variant(theme, "Status", &SaleStatus::ALL, 1)?;

    Ok(Sale::new(
        date,
        customer.id,
        product.id,
        quantity,
        unit_price,
        payment_method,
    )
    .with_status(status))
}

/// Collects a new purchase, picking the product from the store.
pub fn purchase_form(theme: &ColorfulTheme, store: &Store) -> Result<Purchase, CommandError> {
    if store.products.is_empty() {
        return Err(CommandError::Message(
            "No products yet. Add one with `product add` first.".into(),
        ));
    }

    let date = date_input(theme, "Purchase date")?;
    let supplier = required_text(theme, "Supplier name")?;

    let product_labels: Vec<String> = store
        .products
        .iter()
        .map(|product| product.display_label())
        .collect();
    let product_idx = Select::with_theme(theme)
        .with_prompt("Product")
        .items(&product_labels)
        .default(0)
        .interact()?;
    let product = &store.products[product_idx];

    let quantity = quantity_input(theme, "Quantity")?;
    let unit_cost = amount_input(theme, "Unit cost", Some(product.purchase_price))?;
    let notes = optional_text(theme, "Notes (optional)")?;

    let mut purchase = Purchase::new(date, supplier, product.id, quantity, unit_cost);
    if let Some(notes) = notes {
        purchase = purchase.with_notes(notes);
    }
    Ok(purchase)
}

/// Collects a new expense from the operator.
pub fn expense_form(theme: &ColorfulTheme) -> Result<Expense, CommandError> {
    let date = date_input(theme, "Expense date")?;
    let category = select_variant(theme, "Category", &ExpenseCategory::ALL, 0)?;
    let description = required_text(theme, "Description")?;
    let amount = amount_input(theme, "Amount", None)?;
    let receipt = optional_text(theme, "Receipt reference (optional)")?;

    let mut expense = Expense::new(date, category, description, amount);
    if let Some(receipt) = receipt {
        expense = expense.with_receipt(receipt);
    }
    Ok(expense)
}

/// Prompts for the admin password without echoing it.
pub fn login_prompt(theme: &ColorfulTheme) -> Result<String, CommandError> {
    Ok(Password::with_theme(theme)
        .with_prompt("Admin password")
        .interact()?)
}

/// Collects the buyer details needed for the simulated checkout.
pub fn checkout_form(theme: &ColorfulTheme) -> Result<(String, String), CommandError> {
    let name = required_text(theme, "Your name")?;
    let email = required_text(theme, "Email for confirmation")?;
    Ok((name, email))
}
