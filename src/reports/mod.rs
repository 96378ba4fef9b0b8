//! Financial summaries computed on read from store snapshots.
//!
//! Nothing here is cached: every function is a pure pass over the current
//! collections. Period-scoped reports take an explicit reference date so
//! callers (and tests) control what "the current month" means; the CLI
//! passes the local calendar date.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{CustomerType, ProductSeries, Sale, Store};

/// Products below this stock level show up as dashboard alerts.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Reporting window for the profit-and-loss statement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportPeriod {
    CurrentMonth,
    AllTime,
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportPeriod::CurrentMonth => "This Month",
            ReportPeriod::AllTime => "All Time",
        };
        f.write_str(label)
    }
}

/// Profit-and-loss statement for one reporting window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitAndLoss {
    pub period: ReportPeriod,
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub operating_expenses: f64,
    pub net_profit: f64,
}

fn same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

fn in_period(date: NaiveDate, period: ReportPeriod, today: NaiveDate) -> bool {
    match period {
        ReportPeriod::CurrentMonth => same_month(date, today),
        ReportPeriod::AllTime => true,
    }
}

/// Computes revenue, COGS, and profit over paid sales in the window.
///
/// A sale whose product reference dangles still counts its full revenue but
/// contributes zero cost.
pub fn profit_and_loss(store: &Store, period: ReportPeriod, today: NaiveDate) -> ProfitAndLoss {
    let paid_in_period = store
        .sales
        .iter()
        .filter(|sale| sale.is_paid() && in_period(sale.date, period, today));

    let mut revenue = 0.0;
    let mut cogs = 0.0;
    for sale in paid_in_period {
        revenue += sale.total();
        if let Some(product) = store.product(sale.product_id) {
            cogs += product.purchase_price * f64::from(sale.quantity);
        }
    }
    let gross_profit = revenue - cogs;

    let operating_expenses: f64 = store
        .expenses
        .iter()
        .filter(|expense| in_period(expense.date, period, today))
        .map(|expense| expense.amount)
        .sum();

    ProfitAndLoss {
        period,
        revenue,
        cogs,
        gross_profit,
        operating_expenses,
        net_profit: gross_profit - operating_expenses,
    }
}

/// Profit contribution of one product series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesProfit {
    pub series: ProductSeries,
    pub profit: f64,
}

/// Groups paid sales by the sold product's series, summing margin × quantity.
///
/// Sales whose product reference dangles are skipped entirely.
pub fn profit_by_series(store: &Store) -> Vec<SeriesProfit> {
    let mut per_series: BTreeMap<ProductSeries, f64> = BTreeMap::new();
    for sale in store.sales.iter().filter(|sale| sale.is_paid()) {
        if let Some(product) = store.product(sale.product_id) {
            let margin = (sale.unit_price - product.purchase_price) * f64::from(sale.quantity);
            *per_series.entry(product.series).or_insert(0.0) += margin;
        }
    }
    per_series
        .into_iter()
        .map(|(series, profit)| SeriesProfit { series, profit })
        .collect()
}

/// Revenue contribution of one customer segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerTypeRevenue {
    pub customer_type: CustomerType,
    pub revenue: f64,
}

/// Groups paid sales by the buyer's segment, summing gross amounts.
///
/// Sales whose customer reference dangles are skipped.
pub fn revenue_by_customer_type(store: &Store) -> Vec<CustomerTypeRevenue> {
    let mut per_type: BTreeMap<CustomerType, f64> = BTreeMap::new();
    for sale in store.sales.iter().filter(|sale| sale.is_paid()) {
        if let Some(customer) = store.customer(sale.customer_id) {
            *per_type.entry(customer.customer_type).or_insert(0.0) += sale.total();
        }
    }
    per_type
        .into_iter()
        .map(|(customer_type, revenue)| CustomerTypeRevenue {
            customer_type,
            revenue,
        })
        .collect()
}

/// Cost-basis value of one product's stock on hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockValueRow {
    pub product_name: String,
    pub value: f64,
}

/// Stock valuation across the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockValuation {
    pub rows: Vec<StockValueRow>,
    pub total: f64,
}

/// Values every product at purchase price × stock, highest first.
///
/// Negative stock yields a negative row value, unclamped.
pub fn stock_valuation(store: &Store) -> StockValuation {
    let mut rows: Vec<StockValueRow> = store
        .products
        .iter()
        .map(|product| StockValueRow {
            product_name: product.name.clone(),
            value: product.purchase_price * product.stock_quantity as f64,
        })
        .collect();
    let total = rows.iter().map(|row| row.value).sum();
    rows.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    StockValuation { rows, total }
}

/// The series with the highest unit count across all sales, paid or not.
///
/// Sales whose product reference dangles are skipped. Equal totals resolve
/// to the series whose display name sorts first; an empty result means no
/// sale matched any product and renders as "N/A".
pub fn best_selling_series(store: &Store) -> Option<ProductSeries> {
    let mut per_series: BTreeMap<ProductSeries, u64> = BTreeMap::new();
    for sale in &store.sales {
        if let Some(product) = store.product(sale.product_id) {
            *per_series.entry(product.series).or_insert(0) += u64::from(sale.quantity);
        }
    }
    let mut best: Option<(ProductSeries, u64)> = None;
    for (series, units) in per_series {
        match best {
            Some((_, top)) if units <= top => {}
            _ => best = Some((series, units)),
        }
    }
    best.map(|(series, _)| series)
}

/// Paid-sales total for one calendar day, for charting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySales {
    pub date: NaiveDate,
    pub total: f64,
}

/// A product running low, surfaced on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowStockAlert {
    pub product_name: String,
    pub stock_quantity: i64,
}

/// One line of recent sales activity, with weak references resolved for
/// display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentSale {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: u32,
}

/// One line of recent expense activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentExpense {
    pub description: String,
    pub amount: f64,
}

/// Everything the dashboard view renders, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub monthly_revenue: f64,
    pub monthly_profit: f64,
    pub total_stock: i64,
    pub best_series: Option<ProductSeries>,
    pub daily_sales: Vec<DailySales>,
    pub low_stock: Vec<LowStockAlert>,
    pub recent_sales: Vec<RecentSale>,
    pub recent_expenses: Vec<RecentExpense>,
    pub total_customers: usize,
    pub total_products: usize,
    pub pending_orders: usize,
}

fn recent_first<'a, T, F>(items: &'a [T], date_of: F, take: usize) -> Vec<&'a T>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| date_of(b).cmp(&date_of(a)));
    sorted.truncate(take);
    sorted
}

/// Builds the dashboard snapshot for the month containing `today`.
///
/// Monthly profit only counts sales whose product resolves; a dangling
/// product drops the whole line from the profit figure, unlike the P&L
/// statement where such revenue still counts.
pub fn dashboard(store: &Store, today: NaiveDate) -> DashboardSnapshot {
    let monthly_paid = |sale: &&Sale| sale.is_paid() && same_month(sale.date, today);

    let monthly_revenue: f64 = store
        .sales
        .iter()
        .filter(monthly_paid)
        .map(|sale| sale.total())
        .sum();

    let monthly_profit: f64 = store
        .sales
        .iter()
        .filter(monthly_paid)
        .filter_map(|sale| {
            store.product(sale.product_id).map(|product| {
                sale.total() - product.purchase_price * f64::from(sale.quantity)
            })
        })
        .sum();

    let total_stock: i64 = store.products.iter().map(|p| p.stock_quantity).sum();

    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for sale in store.sales.iter().filter(|sale| sale.is_paid()) {
        *per_day.entry(sale.date).or_insert(0.0) += sale.total();
    }
    let daily_sales = per_day
        .into_iter()
        .map(|(date, total)| DailySales { date, total })
        .collect();

    let low_stock = store
        .products
        .iter()
        .filter(|product| product.stock_quantity < LOW_STOCK_THRESHOLD)
        .map(|product| LowStockAlert {
            product_name: product.name.clone(),
            stock_quantity: product.stock_quantity,
        })
        .collect();

    let recent_sales = recent_first(&store.sales, |sale| sale.date, 5)
        .into_iter()
        .map(|sale| RecentSale {
            customer_name: store
                .customer(sale.customer_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "N/A".into()),
            product_name: store
                .product(sale.product_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "N/A".into()),
            quantity: sale.quantity,
        })
        .collect();

    let recent_expenses = recent_first(&store.expenses, |expense| expense.date, 5)
        .into_iter()
        .map(|expense| RecentExpense {
            description: expense.description.clone(),
            amount: expense.amount,
        })
        .collect();

    DashboardSnapshot {
        monthly_revenue,
        monthly_profit,
        total_stock,
        best_series: best_selling_series(store),
        daily_sales,
        low_stock,
        recent_sales,
        recent_expenses,
        total_customers: store.customers.len(),
        total_products: store.products.len(),
        pending_orders: store
            .sales
            .iter()
            .filter(|sale| sale.status == crate::domain::SaleStatus::Pending)
            .count(),
    }
}
