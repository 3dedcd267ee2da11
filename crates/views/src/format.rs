//! Display formatting: US-locale currency, short dates, chart axis labels.

use chrono::NaiveDate;

use ledgerdash_core::RevenuePoint;

/// Render a US-locale dollar string with two decimals, e.g. `$1,234.56`.
fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_string();
    }
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i128;
    let (dollars, frac) = (cents / 100, cents % 100);

    // Insert thousands separators right to left.
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Format an amount whose unit is ambiguous between dollars and cents.
///
/// Legacy write paths disagreed about units, so this keeps the historical
/// heuristic: a value of at least 1000 that divides evenly by 100 is read
/// as minor units and divided by 100. New code paths should store cents and
/// call [`format_cents`]; this function remains only for values of unknown
/// provenance (revenue points, card totals over mixed data).
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let likely_cents = amount >= 1000.0 && amount % 100.0 == 0.0;
    let dollars = if likely_cents { amount / 100.0 } else { amount };
    format_usd(dollars)
}

/// Format an amount known to be in minor units (cents).
///
/// This is the single conversion boundary for invoice amounts.
pub fn format_cents(cents: i64) -> String {
    format_usd(cents as f64 / 100.0)
}

/// Render a date the way list tables display it, e.g. `Jan 5, 2024`.
pub fn format_date_local(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Y-axis labels for the revenue chart, in thousands.
///
/// Returns the labels from the top (revenue max rounded up to the next
/// 1000) down to `$0K`, plus the top value itself for scaling.
pub fn y_axis_labels(revenue: &[RevenuePoint]) -> (Vec<String>, i64) {
    let highest = revenue.iter().map(|p| p.revenue).max().unwrap_or(0);
    let top = (highest.max(0) + 999) / 1000 * 1000;

    let labels = (0..=top / 1000)
        .rev()
        .map(|k| format!("${k}K"))
        .collect();
    (labels, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_treats_large_round_values_as_cents() {
        assert_eq!(format_currency(1500.0), "$15.00");
        assert_eq!(format_currency(250000.0), "$2,500.00");
    }

    #[test]
    fn heuristic_leaves_small_or_uneven_values_as_dollars() {
        assert_eq!(format_currency(15.0), "$15.00");
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(1050.0), "$1,050.00");
        assert_eq!(format_currency(1234.56), "$1,234.56");
    }

    #[test]
    fn non_finite_input_formats_as_zero() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
    }

    #[test]
    fn cents_path_never_guesses() {
        assert_eq!(format_cents(1500), "$15.00");
        assert_eq!(format_cents(15), "$0.15");
        assert_eq!(format_cents(123456789), "$1,234,567.89");
        assert_eq!(format_cents(-1500), "-$15.00");
        assert_eq!(format_cents(0), "$0.00");
    }

    #[test]
    fn dates_render_short_month_without_zero_padding() {
        let date: NaiveDate = "2024-01-05".parse().unwrap();
        assert_eq!(format_date_local(date), "Jan 5, 2024");
        let date: NaiveDate = "2023-11-23".parse().unwrap();
        assert_eq!(format_date_local(date), "Nov 23, 2023");
    }

    #[test]
    fn y_axis_rounds_up_to_the_next_thousand() {
        let revenue = vec![
            RevenuePoint { month: "Jan".into(), revenue: 2300 },
            RevenuePoint { month: "Feb".into(), revenue: 1800 },
        ];
        let (labels, top) = y_axis_labels(&revenue);
        assert_eq!(top, 3000);
        assert_eq!(labels, ["$3K", "$2K", "$1K", "$0K"]);
    }

    #[test]
    fn y_axis_tops_out_at_the_boundary_values() {
        let point = |revenue| RevenuePoint { month: "Jan".into(), revenue };
        let (labels, top) = y_axis_labels(&[point(1)]);
        assert_eq!(top, 1000);
        assert_eq!(labels, ["$1K", "$0K"]);
        let (_, top) = y_axis_labels(&[point(1000)]);
        assert_eq!(top, 1000);
        let (_, top) = y_axis_labels(&[point(1001)]);
        assert_eq!(top, 2000);
        // Negative history never produces a negative axis.
        let (labels, top) = y_axis_labels(&[point(-500)]);
        assert_eq!(top, 0);
        assert_eq!(labels, ["$0K"]);
    }

    #[test]
    fn y_axis_handles_empty_input() {
        let (labels, top) = y_axis_labels(&[]);
        assert_eq!(top, 0);
        assert_eq!(labels, ["$0K"]);
    }
}
