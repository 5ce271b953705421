use super::*;

fn row(cells: &[(&str, &str)]) -> SheetRow {
    cells.iter().copied().collect()
}

fn item_row(name: &str, rate: &str) -> SheetRow {
    row(&[
        ("id", "1"),
        ("Name", name),
        ("Rate", rate),
        ("Discount", ""),
        ("combo_quantity", "2"),
        ("combo_discount", "5"),
        ("Category", "Snacks"),
        ("Stock", "yes"),
        ("tags", "spicy, veg"),
        ("image1", " https://img.example.com/1.png "),
        ("image2", ""),
        ("video", ""),
    ])
}

fn customer_row(business: &str, username: &str, sheet: &str) -> SheetRow {
    row(&[
        ("BusinessName", business),
        ("BusinessType", "Bakery"),
        ("Address", "4 Lake View"),
        ("MobileNo", "9000000000"),
        ("Pincode", "560001"),
        ("MapLocation", "12.97,77.59"),
        ("ShopUsername", username),
        ("ConvenienceFee", "15"),
        ("Description", ""),
        ("SheetLink", sheet),
        ("SubscriptionDate", "2024-06-01"),
    ])
}

// -----------------------------------------------------------------------
// map_catalog_row
// -----------------------------------------------------------------------

#[test]
fn map_catalog_row_coerces_every_column() {
    let entry = map_catalog_row(&item_row("Samosa", "12.5")).unwrap();
    assert_eq!(entry.id, 1);
    assert_eq!(entry.name, "Samosa");
    assert!((entry.rate - 12.5).abs() < f64::EPSILON);
    assert!(entry.discount.abs() < f64::EPSILON);
    assert_eq!(entry.combo_quantity, 2);
    assert!((entry.combo_discount - 5.0).abs() < f64::EPSILON);
    assert_eq!(entry.category, "Snacks");
    assert!(entry.in_stock);
    assert_eq!(entry.tags, vec!["spicy", "veg"]);
    assert_eq!(entry.image1, "https://img.example.com/1.png");
    assert_eq!(entry.image2, "");
    assert_eq!(entry.video, "");
}

#[test]
fn map_catalog_row_defaults_absent_optional_columns() {
    let entry = map_catalog_row(&row(&[
        ("Name", "Tea"),
        ("Rate", "10"),
        ("Category", "Drinks"),
    ]))
    .unwrap();
    assert_eq!(entry.id, 0);
    assert_eq!(entry.combo_quantity, 0);
    assert!(!entry.in_stock);
    assert!(entry.tags.is_empty());
    assert_eq!(entry.video, "");
}

#[test]
fn map_catalog_row_skips_missing_rate() {
    let err = map_catalog_row(&item_row("Samosa", "  ")).unwrap_err();
    assert_eq!(err, RowSkip::Missing("Rate"));
}

#[test]
fn map_catalog_row_skips_non_numeric_rate() {
    let err = map_catalog_row(&item_row("Samosa", "ten")).unwrap_err();
    assert_eq!(
        err,
        RowSkip::Invalid {
            column: "Rate",
            value: "ten".to_owned()
        }
    );
}

#[test]
fn map_catalog_row_skips_bad_optional_number() {
    let cells: SheetRow = item_row("Samosa", "12")
        .iter()
        .map(|(h, v)| if h == "combo_quantity" { (h, "lots") } else { (h, v) })
        .collect();
    let err = map_catalog_row(&cells).unwrap_err();
    assert!(
        matches!(err, RowSkip::Invalid { column: "combo_quantity", .. }),
        "expected Invalid(combo_quantity), got: {err:?}"
    );
}

#[test]
fn map_catalog_row_requires_name_and_category() {
    assert_eq!(
        map_catalog_row(&item_row("", "10")).unwrap_err(),
        RowSkip::Missing("Name")
    );
    let no_category = row(&[("Name", "Tea"), ("Rate", "10")]);
    assert_eq!(
        map_catalog_row(&no_category).unwrap_err(),
        RowSkip::Missing("Category")
    );
}

// -----------------------------------------------------------------------
// map_profile_row
// -----------------------------------------------------------------------

#[test]
fn map_profile_row_reads_all_fields() {
    let profile = map_profile_row(&customer_row(
        " Crumbs ",
        "crumbs",
        "https://docs.google.com/spreadsheets/d/c/edit",
    ))
    .unwrap();
    assert_eq!(profile.business_name, "Crumbs");
    assert_eq!(profile.shop_username, "crumbs");
    assert!((profile.convenience_fee - 15.0).abs() < f64::EPSILON);
    assert_eq!(profile.description, "");
    assert_eq!(profile.subscription_date, "2024-06-01");
}

#[test]
fn map_profile_row_requires_sheet_link() {
    let err = map_profile_row(&customer_row("Crumbs", "crumbs", "")).unwrap_err();
    assert_eq!(err, RowSkip::Missing("SheetLink"));
}

#[test]
fn map_profile_row_requires_username() {
    let err = map_profile_row(&customer_row("Crumbs", " ", "https://x")).unwrap_err();
    assert_eq!(err, RowSkip::Missing("ShopUsername"));
}

#[test]
fn map_profile_row_defaults_fee_and_rejects_garbage() {
    let no_fee = row(&[
        ("BusinessName", "Crumbs"),
        ("ShopUsername", "crumbs"),
        ("SheetLink", "https://x"),
    ]);
    let profile = map_profile_row(&no_fee).unwrap();
    assert!(profile.convenience_fee.abs() < f64::EPSILON);
    assert_eq!(profile.business_type, "");

    let bad_fee: SheetRow = no_fee
        .iter()
        .chain([("ConvenienceFee", "free")])
        .collect();
    assert!(matches!(
        map_profile_row(&bad_fee),
        Err(RowSkip::Invalid {
            column: "ConvenienceFee",
            ..
        })
    ));
}

// -----------------------------------------------------------------------
// map_rows
// -----------------------------------------------------------------------

#[test]
fn map_rows_drops_bad_rows_and_keeps_order() {
    let rows = vec![
        item_row("First", "1"),
        row(&[("Name", "No rate"), ("Category", "Snacks")]),
        item_row("Second", "2"),
        item_row("Bad rate", "abc"),
        item_row("Third", "3"),
    ];
    let mapped = map_rows(&rows, "items", map_catalog_row);

    let names: Vec<&str> = mapped.records.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);

    assert_eq!(mapped.skipped.len(), 2);
    assert_eq!(mapped.skipped[0].sheet_row, 3);
    assert_eq!(mapped.skipped[0].reason, RowSkip::Missing("Rate"));
    assert_eq!(mapped.skipped[1].sheet_row, 5);
}

#[test]
fn map_rows_on_empty_input_is_empty() {
    let mapped = map_rows(&[], "customers", map_profile_row);
    assert!(mapped.records.is_empty());
    assert!(mapped.skipped.is_empty());
}
