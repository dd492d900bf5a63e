//! Past/upcoming partitioning of shows against a single "now" snapshot.
//!
//! A show is **past** iff its start time is strictly before the evaluation
//! instant; a show starting exactly at the evaluation instant is still
//! **upcoming**. The caller snapshots `now` once per request and threads it
//! through, so a detail view can never classify two shows against two
//! different clocks mid-computation.

use chrono::{DateTime, Utc};

/// Split `items` into `(past, upcoming)` against one fixed `now`.
///
/// Relative order within each partition is preserved, so callers that
/// fetch shows ordered by start time get ordered partitions for free.
pub fn partition_by_start<T, F>(
    items: Vec<T>,
    now: DateTime<Utc>,
    start_time: F,
) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> DateTime<Utc>,
{
    items.into_iter().partition(|item| start_time(item) < now)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, hour, 0, 0)
            .single()
            .unwrap_or_default()
    }

    #[test]
    fn earlier_show_is_past() {
        let (past, upcoming) = partition_by_start(vec![at(9)], at(12), |t| *t);
        assert_eq!(past, vec![at(9)]);
        assert!(upcoming.is_empty());
    }

    #[test]
    fn later_show_is_upcoming() {
        let (past, upcoming) = partition_by_start(vec![at(15)], at(12), |t| *t);
        assert!(past.is_empty());
        assert_eq!(upcoming, vec![at(15)]);
    }

    #[test]
    fn boundary_instant_is_upcoming() {
        let (past, upcoming) = partition_by_start(vec![at(12)], at(12), |t| *t);
        assert!(past.is_empty());
        assert_eq!(upcoming, vec![at(12)]);
    }

    #[test]
    fn partitions_preserve_input_order() {
        let shows = vec![at(8), at(10), at(13), at(18)];
        let (past, upcoming) = partition_by_start(shows, at(12), |t| *t);
        assert_eq!(past, vec![at(8), at(10)]);
        assert_eq!(upcoming, vec![at(13), at(18)]);
    }
}
