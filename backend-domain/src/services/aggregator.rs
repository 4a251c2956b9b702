// Sum-based aggregation over ledger rows

use std::collections::HashMap;

use crate::entities::{ConsumptionRow, DailyTotal};
use crate::utils::format_date;

/// Sum over an empty slice is 0.0.
pub fn sum_amounts(rows: &[ConsumptionRow]) -> f64 {
    rows.iter().map(|row| row.amount).sum()
}

/// Groups rows by calendar date, summing amounts per group. Group order is
/// first-occurrence order; callers pass rows sorted by date ascending, which
/// makes the output date-ascending as well since dates are unique keys.
pub fn daily_totals(rows: &[ConsumptionRow]) -> Vec<DailyTotal> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut days: Vec<DailyTotal> = Vec::new();
    for row in rows {
        let date = format_date(row.date);
        match index.get(&date) {
            Some(&at) => days[at].total += row.amount,
            None => {
                index.insert(date.clone(), days.len());
                days.push(DailyTotal {
                    date,
                    total: row.amount,
                });
            }
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};
    use time::Date;

    use super::*;

    fn row(user_id: &str, amount: f64, date: Date) -> ConsumptionRow {
        ConsumptionRow {
            id: 0,
            user_id: user_id.to_string(),
            username: user_id.to_string(),
            amount,
            date,
            timestamp: datetime!(2026-08-04 12:00:00 UTC),
        }
    }

    #[test]
    fn sum_over_empty_slice_is_zero() {
        assert_eq!(sum_amounts(&[]), 0.0);
    }

    #[test]
    fn sum_includes_zero_and_negative_amounts() {
        let rows = vec![
            row("u1", 0.5, date!(2026 - 08 - 04)),
            row("u1", 0.0, date!(2026 - 08 - 04)),
            row("u1", -0.2, date!(2026 - 08 - 04)),
        ];
        let total = sum_amounts(&rows);
        assert!((total - 0.3).abs() < 1e-9);
    }

    #[test]
    fn daily_totals_groups_by_unique_date_in_first_occurrence_order() {
        let rows = vec![
            row("u1", 0.5, date!(2026 - 08 - 02)),
            row("u1", 0.33, date!(2026 - 08 - 02)),
            row("u1", 1.0, date!(2026 - 08 - 03)),
            row("u1", 0.5, date!(2026 - 08 - 04)),
        ];
        let days = daily_totals(&rows);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, "2026-08-02");
        assert!((days[0].total - 0.83).abs() < 1e-9);
        assert_eq!(days[1].date, "2026-08-03");
        assert_eq!(days[2].date, "2026-08-04");
    }

    #[test]
    fn daily_totals_preserve_the_raw_sum() {
        let rows = vec![
            row("u1", 0.5, date!(2026 - 08 - 02)),
            row("u1", 1.5, date!(2026 - 08 - 03)),
            row("u1", 2.0, date!(2026 - 08 - 03)),
        ];
        let days = daily_totals(&rows);
        let grouped: f64 = days.iter().map(|day| day.total).sum();
        assert!((grouped - sum_amounts(&rows)).abs() < 1e-9);
    }

    #[test]
    fn daily_totals_of_no_rows_is_empty() {
        assert!(daily_totals(&[]).is_empty());
    }
}
