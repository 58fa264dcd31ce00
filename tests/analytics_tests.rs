// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use econdash::analytics::{CATEGORY_COLORS, SeriesPoint, balance_series, category_breakdown, dashboard};
use econdash::models::{Transaction, TransactionType};

fn tx(amount: f64, category: &str, date: &str) -> Transaction {
    Transaction {
        id: 0,
        title: "t".to_string(),
        amount,
        category: if category.is_empty() {
            None
        } else {
            Some(category.to_string())
        },
        r#type: TransactionType::Variable,
        date: date.to_string(),
    }
}

#[test]
fn single_day_nets_incomes_against_expenses() {
    let expenses = vec![tx(100.0, "Food", "2024-01-01")];
    let incomes = vec![tx(300.0, "Salary", "2024-01-01")];
    assert_eq!(
        balance_series(&expenses, &incomes),
        vec![SeriesPoint {
            label: "01-01".to_string(),
            value: 200.0
        }]
    );
}

#[test]
fn series_accumulates_in_date_order_regardless_of_input_order() {
    // Store order is newest first; the series must resort.
    let expenses = vec![tx(100.0, "Food", "2024-01-02")];
    let incomes = vec![tx(300.0, "Salary", "2024-01-01")];
    let series = balance_series(&expenses, &incomes);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "01-01");
    assert_eq!(series[0].value, 300.0);
    assert_eq!(series[1].label, "01-02");
    assert_eq!(series[1].value, 200.0);
}

#[test]
fn empty_input_yields_single_zero_point() {
    assert_eq!(
        balance_series(&[], &[]),
        vec![SeriesPoint {
            label: String::new(),
            value: 0.0
        }]
    );
}

#[test]
fn dateless_records_are_excluded_but_rest_still_aggregates() {
    let expenses = vec![tx(50.0, "Food", "")];
    let incomes = vec![tx(10.0, "Salary", "2024-01-01")];
    let series = balance_series(&expenses, &incomes);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].label, "01-01");
    assert_eq!(series[0].value, 10.0);
}

#[test]
fn non_finite_amount_contributes_zero_but_keeps_its_date() {
    let expenses = vec![tx(f64::NAN, "Food", "2024-02-02")];
    let incomes = vec![tx(10.0, "Salary", "2024-01-01")];
    let series = balance_series(&expenses, &incomes);
    assert_eq!(series.len(), 2);
    assert_eq!(series[1].label, "02-02");
    assert_eq!(series[1].value, 10.0);
}

#[test]
fn short_date_key_labels_with_full_key() {
    let incomes = vec![tx(5.0, "Salary", "2024")];
    let series = balance_series(&[], &incomes);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].label, "2024");
    assert_eq!(series[0].value, 5.0);
}

#[test]
fn datetime_dates_collapse_into_their_day_bucket() {
    let incomes = vec![
        tx(10.0, "Salary", "2024-01-01T08:00:00.000Z"),
        tx(15.0, "Salary", "2024-01-01T17:30:00.000Z"),
    ];
    let series = balance_series(&[], &incomes);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].label, "01-01");
    assert_eq!(series[0].value, 25.0);
}

#[test]
fn final_point_equals_valid_net_of_dated_records() {
    let expenses = vec![
        tx(100.0, "Food", "2024-01-01"),
        tx(40.0, "Transport", "2024-01-03"),
        tx(9999.0, "Food", ""),        // no date: excluded
        tx(f64::NAN, "Food", "2024-01-02"), // non-finite: zero contribution
    ];
    let incomes = vec![
        tx(300.0, "Salary", "2024-01-01"),
        tx(50.0, "Freelance", "2024-01-04"),
    ];
    let series = balance_series(&expenses, &incomes);
    let last = series.last().unwrap();
    assert_eq!(last.value, 300.0 + 50.0 - 100.0 - 40.0);
}

#[test]
fn breakdown_groups_same_category_across_dates() {
    let expenses = vec![
        tx(50.0, "Food", "2024-01-01"),
        tx(70.0, "Food", "2024-01-15"),
    ];
    let breakdown = category_breakdown(&expenses, &CATEGORY_COLORS);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].label, "Food");
    assert_eq!(breakdown[0].amount, 120.0);
}

#[test]
fn breakdown_sorts_descending_and_colors_stick_to_first_encounter() {
    let expenses = vec![
        tx(50.0, "Food", "2024-01-01"),
        tx(200.0, "Transport", "2024-01-02"),
        tx(70.0, "Food", "2024-01-03"),
    ];
    let breakdown = category_breakdown(&expenses, &CATEGORY_COLORS);
    assert_eq!(breakdown.len(), 2);
    // Transport sorts first on amount but keeps the color it was assigned
    // when it was encountered second.
    assert_eq!(breakdown[0].label, "Transport");
    assert_eq!(breakdown[0].amount, 200.0);
    assert_eq!(breakdown[0].color, CATEGORY_COLORS[1]);
    assert_eq!(breakdown[1].label, "Food");
    assert_eq!(breakdown[1].amount, 120.0);
    assert_eq!(breakdown[1].color, CATEGORY_COLORS[0]);
}

#[test]
fn breakdown_excludes_malformed_records_without_corrupting_rest() {
    let expenses = vec![
        tx(f64::NAN, "Food", "2024-01-01"),
        tx(-5.0, "Food", "2024-01-01"),
        tx(0.0, "Food", "2024-01-01"),
        tx(30.0, "", "2024-01-01"),
        tx(30.0, "   ", "2024-01-01"),
        tx(25.0, "Food", "2024-01-02"),
    ];
    let breakdown = category_breakdown(&expenses, &CATEGORY_COLORS);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].label, "Food");
    assert_eq!(breakdown[0].amount, 25.0);
}

#[test]
fn breakdown_entries_are_positive_and_non_increasing() {
    let expenses = vec![
        tx(10.0, "A", "2024-01-01"),
        tx(10.0, "B", "2024-01-01"),
        tx(99.0, "C", "2024-01-01"),
    ];
    let breakdown = category_breakdown(&expenses, &CATEGORY_COLORS);
    assert!(breakdown.iter().all(|s| s.amount > 0.0));
    assert!(breakdown.iter().all(|s| !s.label.trim().is_empty()));
    assert!(breakdown.windows(2).all(|w| w[0].amount >= w[1].amount));
    // Equal amounts keep first-encounter order.
    assert_eq!(breakdown[1].label, "A");
    assert_eq!(breakdown[2].label, "B");
}

#[test]
fn breakdown_cycles_palette_when_categories_outnumber_colors() {
    let expenses: Vec<Transaction> = (0..9)
        .map(|i| tx(10.0 + i as f64, &format!("cat{}", i), "2024-01-01"))
        .collect();
    let breakdown = category_breakdown(&expenses, &CATEGORY_COLORS);
    assert_eq!(breakdown.len(), 9);
    let cat7 = breakdown.iter().find(|s| s.label == "cat7").unwrap();
    assert_eq!(cat7.color, CATEGORY_COLORS[0]);
}

#[test]
fn dashboard_is_idempotent_for_the_same_snapshot() {
    let expenses = vec![
        tx(100.0, "Food", "2024-01-01"),
        tx(40.0, "Transport", "2024-01-03"),
    ];
    let incomes = vec![tx(300.0, "Salary", "2024-01-01")];
    let first = dashboard(&expenses, &incomes);
    let second = dashboard(&expenses, &incomes);
    assert_eq!(first, second);
}

#[test]
fn dashboard_keeps_kinds_separate() {
    let expenses = vec![tx(100.0, "Food", "2024-01-01")];
    let incomes = vec![tx(300.0, "Salary", "2024-01-01")];
    let view = dashboard(&expenses, &incomes);
    assert_eq!(view.expenses_by_category.len(), 1);
    assert_eq!(view.expenses_by_category[0].label, "Food");
    assert_eq!(view.incomes_by_category.len(), 1);
    assert_eq!(view.incomes_by_category[0].label, "Salary");
}
