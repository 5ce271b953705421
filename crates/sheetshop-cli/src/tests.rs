use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["sheetshop-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_csv_url_command() {
    let cli = Cli::try_parse_from([
        "sheetshop-cli",
        "csv-url",
        "https://docs.google.com/spreadsheets/d/X/edit",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::CsvUrl { ref url }) if url == "https://docs.google.com/spreadsheets/d/X/edit"
    ));
}

#[test]
fn parses_items_command_with_show_skipped() {
    let cli = Cli::try_parse_from([
        "sheetshop-cli",
        "items",
        "https://sheets.example.com/items",
        "--show-skipped",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Items {
            show_skipped: true,
            ..
        })
    ));
}

#[test]
fn items_command_requires_url() {
    assert!(Cli::try_parse_from(["sheetshop-cli", "items"]).is_err());
}

#[test]
fn customers_command_defaults_to_configured_sheet() {
    let cli = Cli::try_parse_from(["sheetshop-cli", "customers"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Customers {
            url: None,
            show_skipped: false
        })
    ));
}

#[test]
fn customers_command_accepts_url_override() {
    let cli = Cli::try_parse_from([
        "sheetshop-cli",
        "customers",
        "--url",
        "https://sheets.example.com/customers",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Customers { url: Some(ref u), .. }) if u == "https://sheets.example.com/customers"
    ));
}
