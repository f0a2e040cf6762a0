use itertools::Itertools;

use crate::poker::cards::{Card, CardView, Category, Hand, Rank};

/// Classifies a 5-card hand into the highest-ranking category it satisfies.
///
/// The category rules are checked from Royal Flush down to High Card and the
/// first match wins; the rules are not mutually exclusive, so the check order
/// is what encodes their priority.
#[derive(Debug)]
pub struct HandScorer {
    cards: Hand,
    sorted: Hand,
}

impl HandScorer {
    fn new(hand: &Hand) -> Self {
        let cards = hand.clone();

        let mut sorted = hand.clone();
        sorted.cards.sort_by(|a, b| b.cmp(a));

        Self { cards, sorted }
    }

    pub fn score_hand(hand: &Hand) -> Category {
        let scorer = Self::new(hand);
        scorer.score()
    }

    fn score(&self) -> Category {
        // 1. ROYAL FLUSH
        if self.is_royal_flush() {
            return Category::RoyalFlush;
        }

        // 2. STRAIGHT FLUSH
        if self.is_flush() && self.is_straight() {
            return Category::StraightFlush;
        }

        // 3. FOUR OF A KIND
        if self.has_rank_groups(&[4]) {
            return Category::FourOfAKind;
        }

        // 4. FULL HOUSE
        if self.has_rank_groups(&[3, 2]) {
            return Category::FullHouse;
        }

        // 5. FLUSH
        if self.is_flush() {
            return Category::Flush;
        }

        // 6. STRAIGHT
        if self.is_straight() {
            return Category::Straight;
        }

        // 7. THREE OF A KIND
        if self.has_rank_groups(&[3]) {
            return Category::ThreeOfAKind;
        }

        // 8. TWO PAIR
        if self.has_rank_groups(&[2, 2]) {
            return Category::TwoPair;
        }

        // 9. PAIR
        if self.has_rank_groups(&[2]) {
            return Category::Pair;
        }

        // 10. HIGH CARD
        Category::HighCard
    }

    fn is_flush(&self) -> bool {
        let suit = self.cards.view()[0].suit;
        self.cards.view().iter().all(|card| card.suit == suit)
    }

    fn is_royal_flush(&self) -> bool {
        const ROYAL_RANKS: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

        self.is_flush() && self.sorted.view().iter().map(|card| card.rank).eq(ROYAL_RANKS)
    }

    fn is_straight(&self) -> bool {
        // Aces normally sit above the king, but count as 1 when the hand also
        // holds a deuce (the A-2-3-4-5 wheel).
        let ace_low = self.cards.view().iter().any(|card| card.rank == Rank::Deuce);

        let values: Vec<u8> = self
            .cards
            .view()
            .iter()
            .map(|card| match card.rank {
                Rank::Ace if ace_low => 1,
                rank => rank as u8 + 2,
            })
            .sorted()
            .collect();

        // Consecutive iff the sorted values cover the whole range from their
        // minimum to their maximum; a duplicate rank leaves the run short.
        values.iter().copied().eq(values[0]..=values[4])
    }

    /// Consume one same-rank group per entry in `sizes`, each from whatever
    /// cards the previous groups left behind. Fails as soon as any group has
    /// no match; earlier group choices are never revisited.
    fn has_rank_groups(&self, sizes: &[usize]) -> bool {
        let mut working: Vec<Card> = self.cards.view().to_vec();

        for &size in sizes {
            let Some(group) = Self::find_rank_group(&working, size) else {
                return false;
            };
            for index in group.into_iter().rev() {
                working.remove(index);
            }
        }

        true
    }

    /// First `size`-card subset of `cards`, in lexicographic index order,
    /// whose cards all share a rank.
    fn find_rank_group(cards: &[Card], size: usize) -> Option<Vec<usize>> {
        (0..cards.len()).combinations(size).find(|indices| {
            let rank = cards[indices[0]].rank;
            indices.iter().all(|&index| cards[index].rank == rank)
        })
    }
}
