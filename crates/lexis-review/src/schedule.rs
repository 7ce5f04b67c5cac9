//! Expanding-interval schedule

use chrono::{DateTime, Duration, Utc};
use lexis_types::HistoryEntry;
use lexis_types::history::MAX_REVISION_SCORE;

pub const MAX_SCORE: u8 = MAX_REVISION_SCORE;

/// Days until the next review, indexed by the score just reached
pub const INTERVAL_DAYS: [i64; MAX_SCORE as usize + 1] = [1, 2, 4, 7, 14, 30];

pub fn interval_for(score: u8) -> Duration {
    Duration::days(INTERVAL_DAYS[score.min(MAX_SCORE) as usize])
}

/// Update score, due date and counters after one graded answer.
///
/// A miss makes the card due again immediately.
pub fn apply_answer(entry: &mut HistoryEntry, correct: bool, now: DateTime<Utc>) {
    let score = entry.revision_score.min(MAX_SCORE);
    if correct {
        entry.times_correct += 1;
        entry.revision_score = score.saturating_add(1).min(MAX_SCORE);
        entry.next_revision = now + interval_for(entry.revision_score);
    } else {
        entry.times_incorrect += 1;
        entry.revision_score = score.saturating_sub(1);
        entry.next_revision = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::card;

    fn entry(score: u8, due: DateTime<Utc>) -> HistoryEntry {
        card("Haus", &["maison"], score, due)
    }

    #[test]
    fn test_intervals_are_monotonic() {
        for pair in INTERVAL_DAYS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(interval_for(9), Duration::days(30));
    }

    #[test]
    fn test_incorrect_answer_makes_card_due_now() {
        let now = Utc::now();
        let mut e = entry(2, now - Duration::days(3));

        apply_answer(&mut e, false, now);

        assert_eq!(e.revision_score, 1);
        assert_eq!(e.next_revision, now);
        assert_eq!(e.times_incorrect, 1);
        assert_eq!(e.times_correct, 0);
    }

    #[test]
    fn test_correct_answer_schedules_by_new_score() {
        let now = Utc::now();
        let mut e = entry(2, now);

        apply_answer(&mut e, true, now);

        assert_eq!(e.revision_score, 3);
        assert_eq!(e.next_revision, now + Duration::days(7));
        assert_eq!(e.times_correct, 1);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let now = Utc::now();

        let mut top = entry(MAX_SCORE, now);
        apply_answer(&mut top, true, now);
        assert_eq!(top.revision_score, MAX_SCORE);
        assert_eq!(top.next_revision, now + Duration::days(30));

        let mut bottom = entry(0, now);
        apply_answer(&mut bottom, false, now);
        assert_eq!(bottom.revision_score, 0);
    }

    #[test]
    fn test_out_of_range_score_is_clamped_before_update() {
        let now = Utc::now();

        let mut high = entry(9, now);
        apply_answer(&mut high, false, now);
        assert_eq!(high.revision_score, MAX_SCORE - 1);

        let mut overflow = entry(u8::MAX, now);
        apply_answer(&mut overflow, true, now);
        assert_eq!(overflow.revision_score, MAX_SCORE);
        assert_eq!(overflow.next_revision, now + Duration::days(30));
    }
}
