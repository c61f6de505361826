//! Properties the analytics engine holds for any household

use chrono::NaiveDate;
use hearth_ledger::analytics::{
    category_breakdown, category_trends, cumulative_spending, month_change, payer_balance,
    payer_balance_with, settlement, summarize, Direction, ExpensesByMonth, SplitPolicy,
};
use hearth_ledger::models::{Category, Expense, Money, MonthKey, Payer};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const LABELS: [&str; 5] = ["Rent", "Groceries", "Utilities", "Fun", "Takeaway"];

fn household(size: usize) -> (Vec<Payer>, Vec<Category>) {
    let payers = (0..size).map(|i| Payer::new(format!("Member {i}"))).collect();
    let categories = LABELS[..4].iter().map(|name| Category::new(*name)).collect();
    (payers, categories)
}

fn month_strategy() -> impl Strategy<Value = MonthKey> {
    (1990i32..2040, 1u32..=12).prop_map(|(y, m)| MonthKey::new(y, m).unwrap())
}

/// Raw expenses as (payer slot, day, cents, label slot)
fn raw_expenses() -> impl Strategy<Value = Vec<(usize, u32, i64, usize)>> {
    prop::collection::vec((0usize..8, 1u32..=31, 0i64..1_000_000, 0usize..LABELS.len()), 0..60)
}

/// Build expenses inside `month`; a payer slot past the end of `payers` is
/// someone outside the household
fn build(
    raw: &[(usize, u32, i64, usize)],
    payers: &[Payer],
    stranger: &Payer,
    month: MonthKey,
) -> Vec<Expense> {
    raw.iter()
        .map(|&(slot, day, cents, label)| {
            let payer = payers.get(slot).unwrap_or(stranger);
            let day = day.min(month.days_in_month());
            Expense::new(
                payer.id,
                date(month.year(), month.month(), day),
                Money::from_cents(cents),
                LABELS[label],
            )
        })
        .collect()
}

fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

proptest! {
    #[test]
    fn totals_are_conserved(raw in raw_expenses(), month in month_strategy()) {
        let (payers, _) = household(3);
        let stranger = Payer::new("Former housemate");
        let expenses = build(&raw, &payers, &stranger, month);

        let summary = summarize(&expenses, &payers);
        let by_person: Money = summary.totals_by_person.iter().map(|t| t.total).sum();
        let by_category: Money = summary.totals_by_category.iter().map(|t| t.total).sum();

        prop_assert_eq!(summary.grand_total, total(&expenses));
        prop_assert_eq!(by_person, summary.grand_total);
        prop_assert_eq!(by_category, summary.grand_total);
        prop_assert!(summary.totals_by_person.len() >= payers.len());
    }

    #[test]
    fn cumulative_series_is_monotone_and_ends_at_total(
        raw in raw_expenses(),
        month in month_strategy(),
    ) {
        let (payers, _) = household(3);
        let stranger = Payer::new("Guest");
        let mut expenses = build(&raw, &payers, &stranger, month);
        let in_month = total(&expenses);
        if let Some(next) = month.next() {
            expenses.push(Expense::new(
                stranger.id,
                next.first_day(),
                Money::from_cents(12345),
                "Rent",
            ));
        }

        let series = cumulative_spending(&expenses, month);

        prop_assert_eq!(series.len(), month.days_in_month() as usize);
        prop_assert!(series.windows(2).all(|pair| pair[0].cumulative <= pair[1].cumulative));
        prop_assert_eq!(series.last().map(|p| p.cumulative), Some(in_month));
    }

    #[test]
    fn breakdown_percentages_close_to_one_hundred(raw in raw_expenses()) {
        let (payers, categories) = household(3);
        let stranger = Payer::new("Guest");
        let month = MonthKey::new(2025, 3).unwrap();
        let expenses = build(&raw, &payers, &stranger, month);

        let items = category_breakdown(&expenses, &categories);

        if total(&expenses).is_positive() {
            let n = items.len() as i64;
            let sum: i64 = items.iter().map(|i| i64::from(i.percentage)).sum();
            prop_assert!(n >= 1);
            prop_assert!((sum - 100).abs() <= n - 1, "sum {} over {} items", sum, n);
        } else {
            prop_assert!(items.is_empty());
        }
        prop_assert!(items.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
        prop_assert!(items.iter().all(|i| i.amount.is_positive()));
    }

    #[test]
    fn rounded_equal_drift_is_bounded(raw in raw_expenses(), size in 1usize..8) {
        let (payers, _) = household(size);
        let month = MonthKey::new(2025, 3).unwrap();
        let household_only: Vec<_> = raw.into_iter().filter(|r| r.0 < size).collect();
        let expenses = build(&household_only, &payers, &payers[0], month);

        let balances = payer_balance_with(&expenses, &payers, SplitPolicy::RoundedEqual);
        let drift: Money = balances.iter().map(|b| b.balance).sum();

        prop_assert!(drift.abs().cents() <= size as i64 - 1);
    }

    #[test]
    fn largest_remainder_shares_add_up(raw in raw_expenses(), size in 1usize..8) {
        let (payers, _) = household(size);
        let month = MonthKey::new(2025, 3).unwrap();
        let household_only: Vec<_> = raw.into_iter().filter(|r| r.0 < size).collect();
        let expenses = build(&household_only, &payers, &payers[0], month);

        let balances = payer_balance_with(&expenses, &payers, SplitPolicy::LargestRemainder);
        let shares: Money = balances.iter().map(|b| b.share).sum();
        let net: Money = balances.iter().map(|b| b.balance).sum();

        prop_assert_eq!(shares, total(&expenses));
        prop_assert!(net.is_zero());
        prop_assert!(balances
            .iter()
            .all(|b| (b.share - balances[0].share).abs() <= Money::from_cents(1)));
    }
}

#[test]
fn change_rules() {
    let cents = Money::from_cents;

    let flat = month_change(cents(0), cents(0));
    assert_eq!((flat.percent_change, flat.direction), (0, Direction::Flat));

    let fresh = month_change(cents(500), cents(0));
    assert_eq!((fresh.percent_change, fresh.direction), (100, Direction::Up));

    let up = month_change(cents(11200), cents(10000));
    assert_eq!((up.percent_change, up.direction), (12, Direction::Up));

    let down = month_change(cents(7500), cents(10000));
    assert_eq!((down.percent_change, down.direction), (25, Direction::Down));

    let tiny = month_change(cents(10040), cents(10000));
    assert_eq!(tiny.direction, Direction::Flat);

    let half = month_change(cents(10050), cents(10000));
    assert_eq!((half.percent_change, half.direction), (1, Direction::Up));
}

#[test]
fn settlement_only_for_two_payers() {
    let (payers, _) = household(3);
    let expenses: Vec<Expense> = [9000, 1500, 700]
        .iter()
        .zip(&payers)
        .map(|(cents, payer)| {
            Expense::new(payer.id, date(2025, 3, 5), Money::from_cents(*cents), "Rent")
        })
        .collect();

    assert_eq!(settlement(&payer_balance(&expenses, &payers)), None);
    assert_eq!(settlement(&payer_balance(&expenses, &payers[..1])), None);
    assert!(settlement(&payer_balance(&expenses, &payers[..2])).is_some());
}

#[test]
fn settling_up_leaves_nothing_owed() {
    let alice = Payer::new("Alice");
    let bob = Payer::new("Bob");
    let payers = vec![alice.clone(), bob.clone()];
    let mut expenses = vec![
        Expense::new(alice.id, date(2025, 3, 1), Money::from_cents(12345), "Rent"),
        Expense::new(bob.id, date(2025, 3, 9), Money::from_cents(2001), "Fun"),
    ];

    let owed = settlement(&payer_balance(&expenses, &payers)).unwrap();
    assert_eq!(owed.from, bob.id);

    // The debtor covering a shared expense of twice the debt evens both sides
    expenses.push(Expense::new(
        owed.from,
        date(2025, 3, 31),
        owed.amount + owed.amount,
        "Settlement",
    ));
    assert_eq!(settlement(&payer_balance(&expenses, &payers)), None);
}

#[test]
fn trends_are_dense_breakdown_is_sparse() {
    let (payers, categories) = household(3);
    let expenses = vec![Expense::new(
        payers[0].id,
        date(2025, 3, 4),
        Money::from_cents(5000),
        "Rent",
    )];

    let breakdown = category_breakdown(&expenses, &categories);
    assert_eq!(breakdown.len(), 1);

    let mut by_month = ExpensesByMonth::new();
    by_month.insert(MonthKey::new(2025, 2).unwrap(), Vec::new());
    by_month.insert(MonthKey::new(2025, 3).unwrap(), expenses);
    let trends = category_trends(&by_month, &categories);

    assert_eq!(trends.len(), 2);
    assert!(trends.iter().all(|point| point.categories.len() == 4));
    for (index, category) in categories.iter().enumerate() {
        assert_eq!(
            trends[0].categories[index].color,
            trends[1].categories[index].color,
            "colour for {} changed between months",
            category.name
        );
    }
}

#[test]
fn two_person_month_end_to_end() {
    let alice = Payer::new("Alice");
    let bob = Payer::new("Bob");
    let payers = vec![alice.clone(), bob.clone()];
    let categories = vec![Category::new("Rent"), Category::new("Groceries")];
    let expenses = vec![
        Expense::new(alice.id, date(2025, 1, 3), Money::from_cents(4000), "Groceries"),
        Expense::new(alice.id, date(2025, 1, 3), Money::from_cents(3000), "Rent"),
        Expense::new(bob.id, date(2025, 1, 20), Money::from_cents(2000), "Groceries"),
    ];

    let summary = summarize(&expenses, &payers);
    assert_eq!(summary.grand_total.cents(), 9000);
    let person: Vec<i64> = summary
        .totals_by_person
        .iter()
        .map(|t| t.total.cents())
        .collect();
    assert_eq!(person, vec![7000, 2000]);

    let breakdown = category_breakdown(&expenses, &categories);
    let rows: Vec<(&str, i64, u32)> = breakdown
        .iter()
        .map(|i| (i.name.as_str(), i.amount.cents(), i.percentage))
        .collect();
    assert_eq!(rows, vec![("Groceries", 6000, 67), ("Rent", 3000, 33)]);

    let series = cumulative_spending(&expenses, MonthKey::new(2025, 1).unwrap());
    assert_eq!(series[1].cumulative.cents(), 0);
    assert_eq!(series[2].cumulative.cents(), 7000);
    assert_eq!(series[19].cumulative.cents(), 9000);

    let owed = settlement(&payer_balance(&expenses, &payers)).unwrap();
    assert_eq!((owed.from, owed.to, owed.amount.cents()), (bob.id, alice.id, 2500));
}
