use chrono::NaiveDate;
use std::collections::HashMap;

use super::HistoryPoint;

/// Ordered mapping from date to [`HistoryPoint`].
///
/// Iteration follows the order in which each date was first recorded.
/// Recording a date that is already present replaces the stored point in
/// place (last write wins); dates are never re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceHistory {
    points: Vec<HistoryPoint>,
    index: HashMap<NaiveDate, usize>,
}

impl BalanceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from raw points, collapsing duplicate dates.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = HistoryPoint>,
    {
        let mut history = Self::new();
        for point in points {
            history.record(point);
        }
        history
    }

    /// Inserts `point`, replacing any existing point for the same date.
    pub fn record(&mut self, point: HistoryPoint) {
        match self.index.get(&point.date) {
            Some(&position) => self.points[position] = point,
            None => {
                self.index.insert(point.date, self.points.len());
                self.points.push(point);
            }
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&HistoryPoint> {
        self.index.get(&date).map(|&position| &self.points[position])
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<HistoryPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<HistoryPoint> for BalanceHistory {
    fn from_iter<I: IntoIterator<Item = HistoryPoint>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_record_replaces_same_date_in_place() {
        let mut history = BalanceHistory::new();
        history.record(HistoryPoint::new(date(1, 1), dec!(1000)));
        history.record(HistoryPoint::new(date(2, 1), dec!(900)));
        history.record(HistoryPoint::new(date(1, 1), dec!(950)));

        assert_eq!(
            history.points(),
            &[
                HistoryPoint::new(date(1, 1), dec!(950)),
                HistoryPoint::new(date(2, 1), dec!(900)),
            ]
        );
        assert_eq!(history.get(date(1, 1)).unwrap().remaining_debt, dec!(950));
    }

    #[test]
    fn test_from_points_keeps_first_seen_order_without_sorting() {
        let history = BalanceHistory::from_points(vec![
            HistoryPoint::new(date(3, 1), dec!(700)),
            HistoryPoint::new(date(1, 1), dec!(1000)),
            HistoryPoint::new(date(3, 1), dec!(650)),
            HistoryPoint::new(date(2, 1), dec!(800)),
            HistoryPoint::new(date(1, 1), dec!(990)),
        ]);

        let dates: Vec<NaiveDate> = history.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(3, 1), date(1, 1), date(2, 1)]);
        assert_eq!(history.get(date(3, 1)).unwrap().remaining_debt, dec!(650));
        assert_eq!(history.get(date(1, 1)).unwrap().remaining_debt, dec!(990));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_empty_history() {
        let history: BalanceHistory = std::iter::empty().collect();
        assert!(history.is_empty());
        assert!(history.into_points().is_empty());
    }
}
