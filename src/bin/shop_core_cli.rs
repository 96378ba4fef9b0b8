use std::{
    env,
    io::{self, Read},
    process,
};

use chrono::{Local, NaiveDate};

use shop_core::{cashflow, cli, demo, domain::Store, init, reports};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "shell".to_string());

    match command.as_str() {
        "shell" => cli::run_cli()?,
        "demo" => {
            let today = match args.next() {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
                None => Local::now().date_naive(),
            };
            let store = demo::sample_store(today);
            println!("{}", store.to_json()?);
        }
        "cashflow" => {
            let store = read_store()?;
            let balanced = cashflow::with_running_balance(store.cash_flow());
            println!("{}", serde_json::to_string_pretty(&balanced)?);
        }
        "report" => {
            let kind = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let store = read_store()?;
            let today = Local::now().date_naive();
            let json = match kind.as_str() {
                "pnl" => {
                    let period = match args.next().as_deref() {
                        Some("all") => reports::ReportPeriod::AllTime,
                        _ => reports::ReportPeriod::CurrentMonth,
                    };
                    serde_json::to_string_pretty(&reports::profit_and_loss(&store, period, today))?
                }
                "series" => serde_json::to_string_pretty(&reports::profit_by_series(&store))?,
                "customers" => {
                    serde_json::to_string_pretty(&reports::revenue_by_customer_type(&store))?
                }
                "stock" => serde_json::to_string_pretty(&reports::stock_valuation(&store))?,
                "dashboard" => serde_json::to_string_pretty(&reports::dashboard(&store, today))?,
                _ => {
                    print_usage();
                    process::exit(1);
                }
            };
            println!("{json}");
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn read_store() -> Result<Store, Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(Store::from_json(&buffer)?)
}

fn print_usage() {
    eprintln!(
        "Usage: shop_core_cli <command>\n\
         Commands:\n  \
         shell\n  \
         demo [YYYY-MM-DD]\n  \
         cashflow < store.json\n  \
         report <pnl [month|all]|series|customers|stock|dashboard> < store.json"
    );
}
