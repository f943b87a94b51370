use std::collections::HashSet;

use chrono::{DateTime, Months, Utc};

use crate::pkg::internal::adaptors::notifications::spec::NotificationEntry;

/// Unread figures for a user's notification feed, plus the ids that aged
/// past the cutoff and must be folded into the persisted read set.
#[derive(Debug, PartialEq)]
pub struct UnreadSummary {
    pub unread: usize,
    pub newly_stale: Vec<i32>,
}

fn stale_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(1)).unwrap_or(now)
}

/// A notification a month old or older no longer counts as unread,
/// whether or not the user ever opened it.
pub fn is_stale(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    created_at <= stale_cutoff(now)
}

pub fn is_read(
    items: &[NotificationEntry],
    read_ids: &HashSet<i32>,
    id: i32,
    now: DateTime<Utc>,
) -> bool {
    match items.iter().find(|n| n.id == id) {
        Some(item) => read_ids.contains(&id) || is_stale(item.created_at, now),
        None => false,
    }
}

pub fn summarize(
    items: &[NotificationEntry],
    read_ids: &HashSet<i32>,
    now: DateTime<Utc>,
) -> UnreadSummary {
    let mut unread = 0;
    let mut newly_stale = Vec::new();
    for item in items {
        if is_stale(item.created_at, now) {
            if !read_ids.contains(&item.id) {
                newly_stale.push(item.id);
            }
        } else if !read_ids.contains(&item.id) {
            unread += 1;
        }
    }
    UnreadSummary { unread, newly_stale }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn entry(id: i32, created_at: DateTime<Utc>) -> NotificationEntry {
        NotificationEntry {
            id,
            content: format!("notification {}", id),
            kind: "job".into(),
            created_at,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_month_boundary() {
        let now = now();
        let one_month_ago = now.checked_sub_months(Months::new(1)).unwrap();
        let barely_fresh = entry(1, one_month_ago + Duration::seconds(1));
        let barely_stale = entry(2, one_month_ago - Duration::seconds(1));
        let empty = HashSet::new();

        let summary = summarize(&[barely_fresh.clone(), barely_stale.clone()], &empty, now);
        assert_eq!(summary.unread, 1);
        assert_eq!(summary.newly_stale, vec![2]);

        // the stale one reads as seen even though it was never marked
        assert!(!is_read(&[barely_fresh.clone()], &empty, 1, now));
        assert!(is_read(&[barely_stale.clone()], &empty, 2, now));

        // exactly one month old counts as stale
        let on_the_dot = entry(3, one_month_ago);
        assert!(is_read(&[on_the_dot], &empty, 3, now));
    }

    #[test]
    fn test_read_set_membership() {
        let now = now();
        let items = vec![entry(1, now - Duration::days(2)), entry(2, now - Duration::days(3))];
        let read_ids: HashSet<i32> = [1].into_iter().collect();

        assert!(is_read(&items, &read_ids, 1, now));
        assert!(!is_read(&items, &read_ids, 2, now));
        assert_eq!(summarize(&items, &read_ids, now).unread, 1);
    }

    #[test]
    fn test_unknown_id_is_not_read() {
        let now = now();
        let items = vec![entry(1, now - Duration::days(1))];
        let read_ids: HashSet<i32> = [99].into_iter().collect();
        assert!(!is_read(&items, &read_ids, 99, now));
    }

    #[test]
    fn test_empty_feed() {
        let summary = summarize(&[], &HashSet::new(), now());
        assert_eq!(summary.unread, 0);
        assert!(summary.newly_stale.is_empty());
    }

    #[test]
    fn test_stale_ids_already_marked_are_not_repeated() {
        let now = now();
        let old = entry(5, now - Duration::days(90));
        let read_ids: HashSet<i32> = [5].into_iter().collect();
        let summary = summarize(&[old], &read_ids, now);
        assert_eq!(summary.unread, 0);
        assert!(summary.newly_stale.is_empty());
    }
}
