//! Preset sample datasets

/// One selectable dataset: a time-range label, the balance text drawn onto
/// the chart, and the sample points (0-100 relative heights) in rendering
/// order.
pub struct Period {
    pub label: &'static str,
    pub balance: &'static str,
    pub points: &'static [f64],
}

pub fn get_periods() -> Vec<Period> {
    vec![
        Period {
            label: "24h",
            balance: "$ 11,950",
            points: &[40.0, 26.0, 22.0, 72.0, 82.0, 80.0, 88.0],
        },
        Period {
            label: "1W",
            balance: "$ 12,450",
            points: &[30.0, 45.0, 35.0, 60.0, 55.0, 70.0, 68.0, 75.0],
        },
        Period {
            label: "1M",
            balance: "$ 13,200",
            points: &[25.0, 35.0, 42.0, 38.0, 50.0, 48.0, 62.0, 58.0, 70.0, 75.0],
        },
        Period {
            label: "3M",
            balance: "$ 14,850",
            points: &[
                20.0, 25.0, 30.0, 28.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
            ],
        },
        Period {
            label: "1Y",
            balance: "$ 16,750",
            points: &[
                15.0, 18.0, 22.0, 25.0, 30.0, 28.0, 35.0, 40.0, 38.0, 45.0, 50.0, 55.0, 60.0,
                58.0, 65.0, 70.0,
            ],
        },
        Period {
            label: "ALL",
            balance: "$ 18,950",
            points: &[
                10.0, 12.0, 15.0, 18.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0,
                65.0, 70.0, 75.0, 78.0, 82.0,
            ],
        },
    ]
}

/// Look up a preset by label, case-insensitively
pub fn find_period(label: &str) -> Option<Period> {
    get_periods()
        .into_iter()
        .find(|p| p.label.eq_ignore_ascii_case(label))
}

/// All preset labels, for error messages
pub fn period_labels() -> String {
    get_periods()
        .iter()
        .map(|p| p.label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_period_case_insensitive() {
        assert!(find_period("24H").is_some());
        assert!(find_period("all").is_some());
        assert!(find_period("2Y").is_none());
    }

    #[test]
    fn test_periods_in_domain() {
        for period in get_periods() {
            assert!(!period.points.is_empty(), "{} has no points", period.label);
            for v in period.points {
                assert!(
                    (0.0..=100.0).contains(v),
                    "{} point {} out of domain",
                    period.label,
                    v
                );
            }
        }
    }
}
