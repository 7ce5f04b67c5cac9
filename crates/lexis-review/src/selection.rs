use chrono::{DateTime, Utc};
use lexis_config::review::ReviewConfig;
use lexis_types::HistoryEntry;
use rand::Rng;
use rand::seq::SliceRandom;

/// Pick the cards of one session as indices into `entries`.
///
/// Due cards come first; when nothing is due the weakest entries are
/// reviewed instead. The batch is shuffled, then capped.
pub fn select_cards<R>(
    entries: &[HistoryEntry],
    now: DateTime<Utc>,
    config: &ReviewConfig,
    rng: &mut R,
) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let mut cards: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_due(now))
        .map(|(i, _)| i)
        .collect();

    if cards.is_empty() {
        cards = (0..entries.len()).collect();
        cards.sort_by_key(|&i| entries[i].revision_score);
        cards.truncate(config.fallback_size);
        tracing::debug!("Nothing due, reviewing {} weakest words", cards.len());
    }

    cards.shuffle(rng);
    cards.truncate(config.batch_size);
    cards
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::testing::card;

    #[test]
    fn test_only_due_cards_are_selected() {
        let now = Utc::now();
        let entries = vec![
            card("Haus", &["maison"], 1, now - Duration::hours(1)),
            card("Baum", &["arbre"], 0, now + Duration::days(2)),
            card("Hund", &["chien"], 3, now),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let mut cards = select_cards(&entries, now, &ReviewConfig::default(), &mut rng);
        cards.sort();
        assert_eq!(cards, vec![0, 2]);
    }

    #[test]
    fn test_falls_back_to_weakest_when_nothing_is_due() {
        let now = Utc::now();
        let later = now + Duration::days(1);
        let entries: Vec<_> = (0..14u8)
            .map(|i| card(&format!("w{i}"), &["x"], i % 6, later))
            .collect();
        let mut rng = StdRng::seed_from_u64(1);

        let cards = select_cards(&entries, now, &ReviewConfig::default(), &mut rng);

        assert_eq!(cards.len(), 10);
        let max_picked = cards.iter().map(|&i| entries[i].revision_score).max();
        assert_eq!(max_picked, Some(3));
        // every 0-, 1- and 2-score word is in
        for (i, e) in entries.iter().enumerate() {
            if e.revision_score <= 2 {
                assert!(cards.contains(&i));
            }
        }
    }

    #[test]
    fn test_batch_is_capped() {
        let now = Utc::now();
        let entries: Vec<_> = (0..40)
            .map(|i| card(&format!("w{i}"), &["x"], 0, now))
            .collect();
        let mut rng = StdRng::seed_from_u64(3);

        let cards = select_cards(&entries, now, &ReviewConfig::default(), &mut rng);

        assert_eq!(cards.len(), 15);
        let mut unique = cards.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 15);
    }
}
