use assert_cmd::Command;
use predicates::prelude::*;

fn shop_cli() -> Command {
    Command::cargo_bin("shop_core_cli").expect("binary builds")
}

#[test]
fn demo_emits_a_loadable_store() {
    let output = shop_cli()
        .args(["demo", "2026-03-15"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = String::from_utf8(output).unwrap();
    let store = shop_core::domain::Store::from_json(&json).expect("demo JSON loads back");
    assert_eq!(store.products.len(), 6);
    assert!(!store.cash_flow().is_empty());
}

#[test]
fn report_pnl_reads_a_piped_store() {
    let demo = shop_cli()
        .args(["demo", "2026-03-15"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    shop_cli()
        .args(["report", "pnl", "all"])
        .write_stdin(demo)
        .assert()
        .success()
        .stdout(predicate::str::contains("net_profit"));
}

#[test]
fn script_mode_shell_serves_the_storefront() {
    shop_cli()
        .arg("shell")
        .env("SHOP_CORE_CLI_SCRIPT", "1")
        .write_stdin("version\nshop list\nshop add HRN01\nshop cart\nshop checkout Citra citra@mail.com\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hirono The Other One"))
        .stdout(predicate::str::contains("Thank you, Citra!"));
}

#[test]
fn script_mode_shell_keeps_admin_views_gated() {
    shop_cli()
        .arg("shell")
        .env("SHOP_CORE_CLI_SCRIPT", "1")
        .write_stdin("cashflow\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Admin access required"));
}
