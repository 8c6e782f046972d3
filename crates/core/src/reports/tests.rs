//! Property-based tests for reports module.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::balance::balance;
use super::classification::classify;
use super::service::ReportService;
use super::types::{BalanceSheetSection, PreviousNetIncome, TrialBalanceAccount};

/// Strategy for account codes across all five classes plus an unknown one.
fn account_code() -> impl Strategy<Value = String> {
    (1u8..=6, 1u8..=3, 0u16..1000).prop_map(|(class, group, n)| format!("{class}-{group}{n:03}"))
}

/// Strategy for free-text account types, some of them non-current keywords.
fn account_type() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Cash",
        "Bank",
        "Receivable",
        "Fixed Assets",
        "land",
        "Member Savings",
        "TIME DEPOSIT",
        "Payable",
        "Capital",
        "Income",
        "Expense",
    ])
    .prop_map(str::to_string)
}

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn account() -> impl Strategy<Value = TrialBalanceAccount> {
    (account_code(), account_type(), amount(), amount()).prop_map(
        |(code, account_type, debit, credit)| {
            TrialBalanceAccount::new(code.clone(), format!("Account {code}"), account_type, debit, credit)
        },
    )
}

/// Snapshot with unique account codes.
fn snapshot(max_len: usize) -> impl Strategy<Value = Vec<TrialBalanceAccount>> {
    prop::collection::vec(account(), 0..=max_len).prop_map(|rows| {
        let mut seen = HashSet::new();
        rows.into_iter()
            .filter(|row| seen.insert(row.account_code.clone()))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Income and expense rows are never classified; balance sheet classes always are.
    #[test]
    fn prop_classification_totality(row in account()) {
        let section = classify(&row);
        match row.account_code.split_once('-').map(|(head, _)| head) {
            Some("1") => prop_assert!(matches!(
                section,
                Some(BalanceSheetSection::CurrentAssets | BalanceSheetSection::NonCurrentAssets)
            )),
            Some("2") => prop_assert!(matches!(
                section,
                Some(BalanceSheetSection::CurrentLiabilities | BalanceSheetSection::NonCurrentLiabilities)
            )),
            Some("3") => prop_assert_eq!(section, Some(BalanceSheetSection::Equity)),
            _ => prop_assert_eq!(section, None),
        }
    }

    /// A `1-2` / `2-2` code is always non-current, whatever the type says.
    #[test]
    fn prop_code_prefix_forces_non_current(row in account()) {
        if row.account_code.starts_with("1-2") {
            prop_assert_eq!(classify(&row), Some(BalanceSheetSection::NonCurrentAssets));
        }
        if row.account_code.starts_with("2-2") {
            prop_assert_eq!(classify(&row), Some(BalanceSheetSection::NonCurrentLiabilities));
        }
    }

    /// Every classified account from either period appears exactly once.
    #[test]
    fn prop_each_account_appears_once(
        current in snapshot(30),
        previous in snapshot(30),
    ) {
        let sheet = ReportService::build_balance_sheet(&current, &previous);

        let expected: HashSet<&str> = current
            .iter()
            .chain(previous.iter())
            .filter(|row| classify(row).is_some())
            .map(|row| row.account_code.as_str())
            .collect();

        let codes: Vec<&str> = sheet.items().map(|(_, item)| item.code.as_str()).collect();
        let unique: HashSet<&str> = codes.iter().copied().collect();

        prop_assert_eq!(codes.len(), unique.len());
        prop_assert_eq!(unique, expected);
    }

    /// Item balances come from the matching rows, zero where absent.
    #[test]
    fn prop_item_balances_match_rows(
        current in snapshot(30),
        previous in snapshot(30),
    ) {
        let sheet = ReportService::build_balance_sheet(&current, &previous);

        for (section, item) in sheet.items() {
            let cur = current.iter().find(|r| r.account_code == item.code);
            let prev = previous.iter().find(|r| r.account_code == item.code);

            prop_assert_eq!(item.current, cur.map_or(Decimal::ZERO, balance));
            prop_assert_eq!(item.previous, prev.map_or(Decimal::ZERO, balance));

            // Metadata and section follow the current row when there is one.
            let source = cur.or(prev).unwrap();
            prop_assert_eq!(&item.name, &source.account_name);
            prop_assert_eq!(classify(source), Some(section));
        }
    }

    /// Each section is sorted by code.
    #[test]
    fn prop_sections_sorted(
        current in snapshot(30),
        previous in snapshot(30),
    ) {
        let sheet = ReportService::build_balance_sheet(&current, &previous);

        for section in BalanceSheetSection::ALL {
            let items = sheet.section(section);
            for pair in items.windows(2) {
                prop_assert!(pair[0].code <= pair[1].code);
            }
        }
    }

    /// Building twice gives the same result and leaves the inputs untouched.
    #[test]
    fn prop_build_is_pure(
        current in snapshot(20),
        previous in snapshot(20),
    ) {
        let current_before = current.clone();
        let previous_before = previous.clone();

        let first = ReportService::build_balance_sheet(&current, &previous);
        let second = ReportService::build_balance_sheet(&current, &previous);

        prop_assert_eq!(first, second);
        prop_assert_eq!(current, current_before);
        prop_assert_eq!(previous, previous_before);
    }

    /// Net income only reacts to income and expense rows.
    #[test]
    fn prop_net_income_ignores_balance_sheet_accounts(rows in snapshot(30)) {
        let income_statement_rows: Vec<TrialBalanceAccount> = rows
            .iter()
            .filter(|r| r.account_code.starts_with("4-") || r.account_code.starts_with("5-"))
            .cloned()
            .collect();

        // income - expense == sum of (credit - debit) over both classes
        let expected: Decimal = income_statement_rows
            .iter()
            .map(|r| r.credit - r.debit)
            .sum();

        prop_assert_eq!(ReportService::net_income(&rows), expected);
        prop_assert_eq!(ReportService::net_income(&income_statement_rows), expected);
    }

    /// In computed mode the previous figure is the previous snapshot's net income.
    #[test]
    fn prop_computed_previous_net_income(
        current in snapshot(20),
        previous in snapshot(20),
    ) {
        let result = ReportService::net_income_for_periods(
            &current,
            &previous,
            PreviousNetIncome::Computed,
        );
        prop_assert_eq!(result.current, ReportService::net_income(&current));
        prop_assert_eq!(result.previous, ReportService::net_income(&previous));

        let zeroed = ReportService::net_income_for_periods(
            &current,
            &previous,
            PreviousNetIncome::Zeroed,
        );
        prop_assert_eq!(zeroed.current, result.current);
        prop_assert_eq!(zeroed.previous, Decimal::ZERO);
    }

    /// A statement built from a balanced trial balance is balanced.
    #[test]
    fn prop_balanced_trial_balance_gives_balanced_statement(
        cash in amount(),
        building in amount(),
        savings in amount(),
        income in amount(),
        expense in amount(),
    ) {
        // Capital absorbs the difference so that debits equal credits.
        let capital = cash + building + expense - savings - income;
        let (capital_debit, capital_credit) = if capital.is_sign_negative() {
            (-capital, Decimal::ZERO)
        } else {
            (Decimal::ZERO, capital)
        };

        let rows = vec![
            TrialBalanceAccount::new("1-1001", "Cash", "Cash", cash, Decimal::ZERO),
            TrialBalanceAccount::new("1-2001", "Office", "Building", building, Decimal::ZERO),
            TrialBalanceAccount::new("2-1001", "Savings", "Member Savings", Decimal::ZERO, savings),
            TrialBalanceAccount::new("3-1001", "Capital", "Capital", capital_debit, capital_credit),
            TrialBalanceAccount::new("4-1000", "Interest", "Income", Decimal::ZERO, income),
            TrialBalanceAccount::new("5-1000", "Salaries", "Expense", expense, Decimal::ZERO),
        ];

        let sheet = ReportService::build_balance_sheet(&rows, &[]);
        let net_income = ReportService::net_income_for_periods(&rows, &[], PreviousNetIncome::Zeroed);
        let statement = ReportService::assemble_statement(&sheet, net_income);

        prop_assert!(statement.is_balanced_current);
        prop_assert_eq!(statement.total_assets.current, cash + building);
    }
}

#[test]
fn test_non_current_rule_is_or() {
    let by_code = TrialBalanceAccount::new("1-2001", "Deposit", "Cash", dec!(0), dec!(0));
    let by_type = TrialBalanceAccount::new("1-1050", "Truck", "Fixed Assets", dec!(0), dec!(0));

    assert_eq!(classify(&by_code), Some(BalanceSheetSection::NonCurrentAssets));
    assert_eq!(classify(&by_type), Some(BalanceSheetSection::NonCurrentAssets));
}

#[test]
fn test_sort_regardless_of_input_order() {
    let current = vec![
        TrialBalanceAccount::new("1-3000", "C", "Cash", dec!(3), dec!(0)),
        TrialBalanceAccount::new("1-1000", "A", "Cash", dec!(1), dec!(0)),
        TrialBalanceAccount::new("1-1500", "B", "Cash", dec!(2), dec!(0)),
    ];

    let sheet = ReportService::build_balance_sheet(&current, &[]);
    let codes: Vec<&str> = sheet
        .assets
        .current_assets
        .iter()
        .map(|i| i.code.as_str())
        .collect();

    assert_eq!(codes, vec!["1-1000", "1-1500", "1-3000"]);
}

#[test]
fn test_serialized_shape() {
    let current = vec![
        TrialBalanceAccount::new("1-1001", "Cash", "Cash", dec!(10), dec!(0)),
        TrialBalanceAccount::new("2-2001", "Loan", "Debt", dec!(0), dec!(10)),
    ];

    let sheet = ReportService::build_balance_sheet(&current, &[]);
    let json = serde_json::to_value(&sheet).unwrap();

    assert_eq!(json["assets"]["currentAssets"][0]["code"], "1-1001");
    assert!(json["assets"]["nonCurrentAssets"].as_array().unwrap().is_empty());
    assert_eq!(json["liabilities"]["nonCurrentLiabilities"][0]["code"], "2-2001");
    assert!(json["equity"].as_array().unwrap().is_empty());
}
