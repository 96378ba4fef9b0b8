use chrono::NaiveDate;
use uuid::Uuid;

use shop_core::domain::{
    Customer, CustomerType, Expense, ExpenseCategory, PaymentMethod, Product, ProductCondition,
    ProductSeries, Sale, SaleStatus, Store,
};
use shop_core::reports::{self, ReportPeriod};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 8, 7)
}

fn product(series: ProductSeries, buy: f64, sell: f64, stock: i64) -> Product {
    Product::new("X", "Fixture", series, ProductCondition::New, buy, sell).with_stock(stock)
}

fn paid_sale(day_date: NaiveDate, customer: Uuid, product: Uuid, qty: u32, price: f64) -> Sale {
    Sale::new(day_date, customer, product, qty, price, PaymentMethod::Transfer)
        .with_status(SaleStatus::Paid)
}

#[test]
fn profit_and_loss_matches_the_worked_example() {
    let mut store = Store::new("P&L");
    let item = product(ProductSeries::Hirono, 60_000.0, 100_000.0, 10);
    let product_id = store.add_product(item);
    store.add_sale(paid_sale(
        date(2026, 8, 5),
        Uuid::new_v4(),
        product_id,
        2,
        100_000.0,
    ));
    store.add_expense(Expense::new(
        date(2026, 8, 6),
        ExpenseCategory::Packaging,
        "Boxes",
        10_000.0,
    ));

    let statement = reports::profit_and_loss(&store, ReportPeriod::CurrentMonth, today());
    assert_eq!(statement.revenue, 200_000.0);
    assert_eq!(statement.cogs, 120_000.0);
    assert_eq!(statement.gross_profit, 80_000.0);
    assert_eq!(statement.operating_expenses, 10_000.0);
    assert_eq!(statement.net_profit, 70_000.0);
}

#[test]
fn current_month_excludes_other_months_and_unpaid_sales() {
    let mut store = Store::new("P&L Filtering");
    let product_id = store.add_product(product(ProductSeries::Kubo, 50.0, 100.0, 10));

    store.add_sale(paid_sale(date(2026, 8, 1), Uuid::new_v4(), product_id, 1, 100.0));
    store.add_sale(paid_sale(date(2026, 7, 31), Uuid::new_v4(), product_id, 1, 100.0));
    store.add_sale(Sale::new(
        date(2026, 8, 2),
        Uuid::new_v4(),
        product_id,
        1,
        100.0,
        PaymentMethod::Cash,
    ));
    store.add_expense(Expense::new(
        date(2026, 7, 15),
        ExpenseCategory::Marketing,
        "Old campaign",
        40.0,
    ));

    let monthly = reports::profit_and_loss(&store, ReportPeriod::CurrentMonth, today());
    assert_eq!(monthly.revenue, 100.0);
    assert_eq!(monthly.operating_expenses, 0.0);

    let all_time = reports::profit_and_loss(&store, ReportPeriod::AllTime, today());
    assert_eq!(all_time.revenue, 200.0);
    assert_eq!(all_time.operating_expenses, 40.0);
}

#[test]
fn dangling_product_counts_revenue_but_no_cogs() {
    let mut store = Store::new("Dangling");
    store.add_sale(paid_sale(
        date(2026, 8, 3),
        Uuid::new_v4(),
        Uuid::new_v4(),
        3,
        50_000.0,
    ));

    let statement = reports::profit_and_loss(&store, ReportPeriod::AllTime, today());
    assert_eq!(statement.revenue, 150_000.0);
    assert_eq!(statement.cogs, 0.0);
    assert_eq!(statement.gross_profit, 150_000.0);

    assert!(reports::profit_by_series(&store).is_empty());
}

#[test]
fn profit_by_series_groups_margin_per_series() {
    let mut store = Store::new("Series");
    let hirono = store.add_product(product(ProductSeries::Hirono, 150.0, 250.0, 10));
    let kubo = store.add_product(product(ProductSeries::Kubo, 160.0, 260.0, 10));

    store.add_sale(paid_sale(date(2026, 8, 1), Uuid::new_v4(), hirono, 2, 250.0));
    store.add_sale(paid_sale(date(2026, 8, 2), Uuid::new_v4(), hirono, 1, 300.0));
    store.add_sale(paid_sale(date(2026, 8, 3), Uuid::new_v4(), kubo, 1, 260.0));
    // Pending sales contribute nothing.
    store.add_sale(Sale::new(
        date(2026, 8, 4),
        Uuid::new_v4(),
        kubo,
        5,
        260.0,
        PaymentMethod::Qris,
    ));

    let rows = reports::profit_by_series(&store);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].series, ProductSeries::Hirono);
    assert_eq!(rows[0].profit, 2.0 * 100.0 + 150.0);
    assert_eq!(rows[1].series, ProductSeries::Kubo);
    assert_eq!(rows[1].profit, 100.0);
}

#[test]
fn revenue_by_customer_type_skips_dangling_customers() {
    let mut store = Store::new("Customer Types");
    let product_id = store.add_product(product(ProductSeries::Labubu, 100.0, 200.0, 10));
    let collector = store.add_customer(Customer::new(
        "Andi",
        "0812",
        "andi@mail.com",
        "@andi",
        CustomerType::Collector,
    ));

    store.add_sale(paid_sale(date(2026, 8, 1), collector, product_id, 2, 200.0));
    store.add_sale(paid_sale(
        date(2026, 8, 2),
        Uuid::new_v4(),
        product_id,
        9,
        200.0,
    ));

    let rows = reports::revenue_by_customer_type(&store);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].customer_type, CustomerType::Collector);
    assert_eq!(rows[0].revenue, 400.0);
}

#[test]
fn stock_valuation_propagates_negative_stock() {
    let mut store = Store::new("Valuation");
    store.add_product(product(ProductSeries::Hirono, 150.0, 250.0, 4));
    store.add_product(product(ProductSeries::Kubo, 100.0, 200.0, -2));

    let valuation = reports::stock_valuation(&store);
    assert_eq!(valuation.rows.len(), 2);
    // Sorted by value descending, negative value last and unclamped.
    assert_eq!(valuation.rows[0].value, 600.0);
    assert_eq!(valuation.rows[1].value, -200.0);
    assert_eq!(valuation.total, 400.0);
}

#[test]
fn best_selling_series_counts_all_statuses_and_breaks_ties_lexicographically() {
    let mut store = Store::new("Best Seller");
    let hirono = store.add_product(product(ProductSeries::Hirono, 150.0, 250.0, 10));
    let kubo = store.add_product(product(ProductSeries::Kubo, 160.0, 260.0, 10));

    store.add_sale(paid_sale(date(2026, 8, 1), Uuid::new_v4(), hirono, 5, 250.0));
    store.add_sale(
        Sale::new(
            date(2026, 8, 2),
            Uuid::new_v4(),
            kubo,
            3,
            260.0,
            PaymentMethod::Cash,
        )
        .with_status(SaleStatus::Cancelled),
    );
    assert_eq!(
        reports::best_selling_series(&store),
        Some(ProductSeries::Hirono)
    );

    // Level the totals: Hirono and Kubo both at 5 units.
    store.add_sale(paid_sale(date(2026, 8, 3), Uuid::new_v4(), kubo, 2, 260.0));
    assert_eq!(
        reports::best_selling_series(&store),
        Some(ProductSeries::Hirono)
    );
}

#[test]
fn best_selling_series_is_none_without_sales() {
    let store = Store::new("Empty");
    assert_eq!(reports::best_selling_series(&store), None);
}

#[test]
fn dashboard_surfaces_low_stock_and_pending_counts() {
    let mut store = Store::new("Dashboard");
    let hirono = store.add_product(product(ProductSeries::Hirono, 150.0, 250.0, 12));
    let kubo = store.add_product(product(ProductSeries::Kubo, 160.0, 260.0, 2));
    let buyer = store.add_customer(Customer::new(
        "Budi",
        "0813",
        "budi@mail.com",
        "@budi",
        CustomerType::Reseller,
    ));

    store.add_sale(paid_sale(date(2026, 8, 1), buyer, hirono, 2, 250.0));
    store.add_sale(Sale::new(
        date(2026, 8, 2),
        buyer,
        kubo,
        1,
        260.0,
        PaymentMethod::Cash,
    ));
    store.add_expense(Expense::new(
        date(2026, 8, 3),
        ExpenseCategory::Shipping,
        "Courier",
        25.0,
    ));

    let snapshot = reports::dashboard(&store, today());
    assert_eq!(snapshot.monthly_revenue, 500.0);
    assert_eq!(snapshot.monthly_profit, 200.0);
    assert_eq!(snapshot.pending_orders, 1);
    assert_eq!(snapshot.total_customers, 1);
    assert_eq!(snapshot.total_products, 2);
    // Kubo started at 2 and lost one to the pending sale.
    assert_eq!(snapshot.low_stock.len(), 1);
    assert_eq!(snapshot.low_stock[0].stock_quantity, 1);
    assert_eq!(snapshot.recent_sales.len(), 2);
    assert_eq!(snapshot.recent_sales[0].customer_name, "Budi");
    assert_eq!(snapshot.daily_sales.len(), 1);
    assert_eq!(snapshot.daily_sales[0].total, 500.0);
}
