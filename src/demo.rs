//! Seeded demo store used by the shell and the `demo` subcommand.
//!
//! Records are written as literal historical state (the stock figures
//! already reflect past activity), so they go straight into the collections
//! rather than through the mutation path; the derived feed is rebuilt once
//! at the end.

use chrono::{Months, NaiveDate};

use crate::domain::{
    Customer, CustomerType, Expense, ExpenseCategory, PaymentMethod, Product, ProductCondition,
    ProductSeries, Purchase, Sale, SaleStatus, Store,
};

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date - chrono::Duration::days(days as i64)
}

/// Builds the demo fixture with activity placed relative to `today`.
pub fn sample_store(today: NaiveDate) -> Store {
    let last_month = today
        .checked_sub_months(Months::new(1))
        .unwrap_or_else(|| days_before(today, 30));

    let mut store = Store::new("Toybox Resale");

    let hirono_other_one = Product::new(
        "HRN01",
        "Hirono The Other One",
        ProductSeries::Hirono,
        ProductCondition::New,
        150_000.0,
        250_000.0,
    )
    .with_stock(12);
    let kubo_walks = Product::new(
        "KBO01",
        "Kubo Walks of Life",
        ProductSeries::Kubo,
        ProductCondition::New,
        160_000.0,
        260_000.0,
    )
    .with_stock(8);
    let crybaby_parade = Product::new(
        "CRY01",
        "Crybaby Crying Parade",
        ProductSeries::Crybaby,
        ProductCondition::PreOrder,
        175_000.0,
        280_000.0,
    )
    .with_stock(5);
    let tinytiny_farmer = Product::new(
        "TNY01",
        "TinyTiny City Farmer",
        ProductSeries::TinyTiny,
        ProductCondition::Second,
        100_000.0,
        180_000.0,
    )
    .with_stock(3);
    let hirono_mischief = Product::new(
        "HRN02",
        "Hirono Little Mischief",
        ProductSeries::Hirono,
        ProductCondition::New,
        155_000.0,
        255_000.0,
    )
    .with_stock(20);
    let crybaby_sad_club = Product::new(
        "CRY02",
        "Crybaby Sad Club",
        ProductSeries::Crybaby,
        ProductCondition::New,
        180_000.0,
        290_000.0,
    )
    .with_stock(2);

    let andi = Customer::new(
        "Andi Collector",
        "081234567890",
        "andi@mail.com",
        "@andicollects",
        CustomerType::Collector,
    );
    let budi = Customer::new(
        "Budi Reseller",
        "081234567891",
        "budi@mail.com",
        "@buditoys",
        CustomerType::Reseller,
    );
    let citra = Customer::new(
        "Citra Regular",
        "081234567892",
        "citra@mail.com",
        "@citra",
        CustomerType::Regular,
    );

    store.sales = vec![
        Sale::new(
            today,
            andi.id,
            hirono_other_one.id,
            1,
            250_000.0,
            PaymentMethod::Transfer,
        )
        .with_status(SaleStatus::Paid),
        Sale::new(
            today,
            budi.id,
            hirono_mischief.id,
            5,
            255_000.0,
            PaymentMethod::Qris,
        )
        .with_status(SaleStatus::Paid),
        Sale::new(
            days_before(today, 2),
            citra.id,
            kubo_walks.id,
            1,
            260_000.0,
            PaymentMethod::Cash,
        ),
        Sale::new(
            last_month,
            andi.id,
            crybaby_parade.id,
            1,
            280_000.0,
            PaymentMethod::Transfer,
        )
        .with_status(SaleStatus::Paid),
        Sale::new(
            days_before(today, 5),
            budi.id,
            crybaby_sad_club.id,
            2,
            290_000.0,
            PaymentMethod::Qris,
        )
        .with_status(SaleStatus::Cancelled),
        Sale::new(
            last_month,
            andi.id,
            hirono_other_one.id,
            2,
            250_000.0,
            PaymentMethod::Transfer,
        )
        .with_status(SaleStatus::Paid),
    ];

    store.purchases = vec![
        Purchase::new(
            last_month,
            "Distributor A",
            hirono_other_one.id,
            15,
            150_000.0,
        )
        .with_notes("Initial stock"),
        Purchase::new(last_month, "Distributor B", hirono_mischief.id, 25, 155_000.0)
            .with_notes("Restock Hirono"),
    ];

    store.expenses = vec![
        Expense::new(
            days_before(today, 1),
            ExpenseCategory::Shipping,
            "Courier to Andi",
            25_000.0,
        ),
        Expense::new(
            days_before(today, 3),
            ExpenseCategory::Packaging,
            "Bubble wrap & boxes",
            150_000.0,
        ),
        Expense::new(
            last_month,
            ExpenseCategory::Marketing,
            "Instagram ads",
            300_000.0,
        ),
    ];

    store.products = vec![
        hirono_other_one,
        kubo_walks,
        crybaby_parade,
        tinytiny_farmer,
        hirono_mischief,
        crybaby_sad_club,
    ];
    store.customers = vec![andi, budi, citra];

    store.refresh_cash_flow();
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn fixture_is_fully_populated() {
        let store = sample_store(reference_date());
        assert_eq!(store.products.len(), 6);
        assert_eq!(store.customers.len(), 3);
        assert_eq!(store.sales.len(), 6);
        assert_eq!(store.purchases.len(), 2);
        assert_eq!(store.expenses.len(), 3);
        // 4 paid sales + 2 purchases + 3 expenses.
        assert_eq!(store.cash_flow().len(), 9);
    }

    #[test]
    fn fixture_references_resolve() {
        let store = sample_store(reference_date());
        for sale in &store.sales {
            assert!(store.product(sale.product_id).is_some());
            assert!(store.customer(sale.customer_id).is_some());
        }
        for purchase in &store.purchases {
            assert!(store.product(purchase.product_id).is_some());
        }
    }
}
