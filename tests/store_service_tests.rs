use chrono::NaiveDate;
use uuid::Uuid;

use shop_core::domain::{
    Customer, CustomerType, Expense, ExpenseCategory, PaymentMethod, Product, ProductCondition,
    ProductSeries, Purchase, Sale, SaleStatus, Store,
};
use shop_core::services::{
    CustomerService, ExpenseService, ProductService, PurchaseService, SaleService, ServiceError,
};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
}

fn prepared_store() -> (Store, Uuid, Uuid) {
    let mut store = Store::new("Service Fixture");
    let product = Product::new(
        "HRN01",
        "Hirono The Other One",
        ProductSeries::Hirono,
        ProductCondition::New,
        150_000.0,
        250_000.0,
    )
    .with_stock(10);
    let product_id = ProductService::add(&mut store, product).unwrap();
    let customer = Customer::new(
        "Andi Collector",
        "081234567890",
        "andi@mail.com",
        "@andicollects",
        CustomerType::Collector,
    );
    let customer_id = CustomerService::add(&mut store, customer).unwrap();
    (store, product_id, customer_id)
}

#[test]
fn sale_and_purchase_apply_stock_deltas_in_order() {
    let (mut store, product_id, customer_id) = prepared_store();

    SaleService::add(
        &mut store,
        Sale::new(
            date(1),
            customer_id,
            product_id,
            3,
            250_000.0,
            PaymentMethod::Transfer,
        )
        .with_status(SaleStatus::Paid),
    )
    .unwrap();
    assert_eq!(store.product(product_id).unwrap().stock_quantity, 7);

    PurchaseService::add(
        &mut store,
        Purchase::new(date(2), "Distributor A", product_id, 5, 150_000.0),
    )
    .unwrap();
    assert_eq!(store.product(product_id).unwrap().stock_quantity, 12);
}

#[test]
fn mutations_refresh_the_cash_flow_feed() {
    let (mut store, product_id, customer_id) = prepared_store();
    assert!(store.cash_flow().is_empty());

    SaleService::add(
        &mut store,
        Sale::new(
            date(1),
            customer_id,
            product_id,
            1,
            250_000.0,
            PaymentMethod::Qris,
        )
        .with_status(SaleStatus::Paid),
    )
    .unwrap();
    assert_eq!(store.cash_flow().len(), 1);

    ExpenseService::add(
        &mut store,
        Expense::new(date(2), ExpenseCategory::Shipping, "Courier", 25_000.0),
    )
    .unwrap();
    assert_eq!(store.cash_flow().len(), 2);
}

#[test]
fn rejected_submissions_leave_no_partial_write() {
    let (mut store, product_id, _) = prepared_store();
    let sales_before = store.sales.len();
    let stock_before = store.product(product_id).unwrap().stock_quantity;
    let feed_before = store.cash_flow().len();

    let err = SaleService::add(
        &mut store,
        Sale::new(
            date(1),
            Uuid::nil(),
            product_id,
            2,
            250_000.0,
            PaymentMethod::Cash,
        ),
    )
    .expect_err("nil customer must be rejected");
    assert!(matches!(err, ServiceError::Invalid(_)));

    assert_eq!(store.sales.len(), sales_before);
    assert_eq!(store.product(product_id).unwrap().stock_quantity, stock_before);
    assert_eq!(store.cash_flow().len(), feed_before);
}

#[test]
fn expense_validation_requires_description_and_positive_amount() {
    let mut store = Store::new("Expenses");
    assert!(ExpenseService::add(
        &mut store,
        Expense::new(date(1), ExpenseCategory::Other, "", 10.0)
    )
    .is_err());
    assert!(ExpenseService::add(
        &mut store,
        Expense::new(date(1), ExpenseCategory::Other, "Misc", -5.0)
    )
    .is_err());
    assert!(store.expenses.is_empty());

    ExpenseService::add(
        &mut store,
        Expense::new(date(1), ExpenseCategory::Other, "Misc", 5.0),
    )
    .unwrap();
    assert_eq!(store.expenses.len(), 1);
}

#[test]
fn collections_preserve_insertion_order() {
    let mut store = Store::new("Ordering");
    for code in ["A1", "B2", "C3"] {
        ProductService::add(
            &mut store,
            Product::new(
                code,
                format!("Product {code}"),
                ProductSeries::Labubu,
                ProductCondition::New,
                10.0,
                20.0,
            ),
        )
        .unwrap();
    }
    let codes: Vec<&str> = ProductService::list(&store)
        .iter()
        .map(|product| product.code.as_str())
        .collect();
    assert_eq!(codes, vec!["A1", "B2", "C3"]);
}
