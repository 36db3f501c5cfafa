//! Client-side filtering over fetched lists.

use crate::models::{ApprovalItem, LeaveRequest, ManualTimeRequest, RequestStatus};
use chrono::NaiveDate;

/// A record that can be narrowed by [`ListFilter`].
pub trait Filterable {
    fn status(&self) -> RequestStatus;

    /// Text fields matched by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// First and last day the record covers.
    fn date_span(&self) -> (NaiveDate, NaiveDate);
}

impl Filterable for LeaveRequest {
    fn status(&self) -> RequestStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.leave_type.as_str()];
        fields.extend(self.reason.as_deref());
        fields
    }

    fn date_span(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date, self.end_date)
    }
}

impl Filterable for ManualTimeRequest {
    fn status(&self) -> RequestStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        self.reason.as_deref().into_iter().collect()
    }

    fn date_span(&self) -> (NaiveDate, NaiveDate) {
        (self.date, self.date)
    }
}

impl Filterable for ApprovalItem {
    fn status(&self) -> RequestStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.requester.as_str()];
        fields.extend(self.reason.as_deref());
        fields
    }

    fn date_span(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date, self.end_date)
    }
}

/// Criteria for narrowing a list. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub status: Option<RequestStatus>,
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ListFilter {
    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// True when `item` satisfies every set criterion.
    ///
    /// Date bounds select records whose span overlaps `[from, to]`.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if let Some(status) = self.status {
            if item.status() != status {
                return false;
            }
        }

        if let Some(needle) = self.search.as_deref().map(str::trim) {
            if !needle.is_empty() {
                let needle = needle.to_lowercase();
                let hit = item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));
                if !hit {
                    return false;
                }
            }
        }

        let (start, end) = item.date_span();
        if matches!(self.from, Some(from) if end < from) {
            return false;
        }
        if matches!(self.to, Some(to) if start > to) {
            return false;
        }
        true
    }

    pub fn apply<T: Filterable>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn leave(id: &str, kind: &str, start: &str, end: &str, status: RequestStatus) -> LeaveRequest {
        LeaveRequest {
            id: id.into(),
            leave_type: kind.to_string(),
            start_date: date(start),
            end_date: date(end),
            reason: Some(format!("{} trip", kind)),
            status,
        }
    }

    fn sample() -> Vec<LeaveRequest> {
        vec![
            leave("1", "Annual", "2026-01-05", "2026-01-09", RequestStatus::Approved),
            leave("2", "Sick", "2026-02-10", "2026-02-10", RequestStatus::Pending),
            leave("3", "Annual", "2026-03-30", "2026-04-02", RequestStatus::Pending),
        ]
    }

    fn ids(items: &[LeaveRequest]) -> Vec<&str> {
        items.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        assert_eq!(ListFilter::default().apply(sample()).len(), 3);
    }

    #[test]
    fn filters_by_status() {
        let out = ListFilter::default()
            .status(RequestStatus::Pending)
            .apply(sample());
        assert_eq!(ids(&out), vec!["2", "3"]);
    }

    #[test]
    fn search_is_case_insensitive_and_ignores_blank() {
        let out = ListFilter::default().search("sICK").apply(sample());
        assert_eq!(ids(&out), vec!["2"]);

        let out = ListFilter::default().search("   ").apply(sample());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn date_range_selects_overlapping_spans() {
        let out = ListFilter::default()
            .between(Some(date("2026-04-01")), None)
            .apply(sample());
        assert_eq!(ids(&out), vec!["3"]);

        let out = ListFilter::default()
            .between(Some(date("2026-01-09")), Some(date("2026-02-10")))
            .apply(sample());
        assert_eq!(ids(&out), vec!["1", "2"]);
    }

    #[test]
    fn criteria_combine() {
        let out = ListFilter::default()
            .status(RequestStatus::Pending)
            .search("annual")
            .apply(sample());
        assert_eq!(ids(&out), vec!["3"]);
    }
}
