use serde::{Deserialize, Serialize};

crate::define_label_enum! {
    /// Regular-season month. Declaration order is the season order.
    pub enum Month {
        Oct => "Oct",
        Nov => "Nov",
        Dec => "Dec",
        Jan => "Jan",
        Feb => "Feb",
        Mar => "Mar",
        Apr => "Apr",
    }
}

impl Month {
    /// Canonical season ordering, October through April.
    pub fn season_order() -> &'static [Month] {
        Month::ALL
    }
}

/// One team's results for one month of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub team: String,
    pub month: Month,
    /// Win percentage in [0, 1]
    pub win_pct: f64,
    pub ppg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_order() {
        let labels: Vec<&str> = Month::season_order().iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr"]);
        assert!(Month::Dec < Month::Jan);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!("oct".parse::<Month>(), Ok(Month::Oct));
        assert!("Jun".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
    }
}
