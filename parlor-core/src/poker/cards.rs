use heapless;
use lazy_static::lazy_static;
use rand::prelude::{Rng, SliceRandom};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::poker::error::{Error, Result};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Clubs = 1,
    Hearts = 2,
    Diamonds = 3,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
#[repr(u8)]
pub enum Rank {
    Deuce = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Convert a shorthand identifier into a card. Panics if the identifier
    /// is incorrect. This exists only for test-writing.
    ///
    /// ```
    /// # use parlor_core::prelude::{Card, Suit, Rank};
    /// let a = Card::from_ident("KH");
    /// let b = Card {
    ///     rank: Rank::King,
    ///     suit: Suit::Hearts,
    /// };
    /// assert_eq!(a, b);
    /// ```
    pub fn from_ident(ident: &str) -> Self {
        ident.parse().unwrap()
    }
}

impl std::str::FromStr for Card {
    type Err = Error;

    fn from_str(ident: &str) -> Result<Self> {
        let mut chars = ident.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::BadCardIdent(ident.to_owned()));
        };

        let rank = match rank.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(Error::UnknownRank(rank)),
        };

        let suit = match suit.to_ascii_uppercase() {
            'S' => Suit::Spades,
            'C' => Suit::Clubs,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            _ => return Err(Error::UnknownSuit(suit)),
        };

        Ok(Self { rank, suit })
    }
}

#[macro_export]
macro_rules! card {
    ($ident:literal) => {
        $crate::poker::cards::Card::from_ident($ident)
    };
}

pub trait CardView {
    fn view(&self) -> &[Card];
}

#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

lazy_static! {
    static ref BASE_DECK_CARDS: Vec<Card> = {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card { rank, suit });
            }
        }
        cards
    };
}

impl Deck {
    pub fn base_deck() -> Self {
        Self {
            cards: BASE_DECK_CARDS.clone(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut deck = Self::base_deck();
        deck.shuffle(rng);
        deck
    }

    pub fn peek_top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.count() == 0 {
            None
        } else {
            Some(self.cards.remove(self.count() - 1))
        }
    }

    pub fn draw_hand(&mut self) -> Option<Hand> {
        if self.count() < HAND_SIZE {
            None
        } else {
            let cards: Vec<Card> = (0..HAND_SIZE).map(|_| self.draw().unwrap()).collect();
            Some(Hand::from_slice(&cards).unwrap())
        }
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl CardView for Deck {
    fn view(&self) -> &[Card] {
        &self.cards
    }
}

pub const HAND_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    pub(crate) cards: heapless::Vec<Card, HAND_SIZE>,
}

impl Hand {
    pub fn from_slice(cards: &[Card]) -> Result<Self> {
        if cards.len() != HAND_SIZE {
            return Err(Error::WrongHandSize(cards.len()));
        }
        Ok(Self {
            cards: heapless::Vec::from_slice(cards).map_err(|()| Error::WrongHandSize(cards.len()))?,
        })
    }

    /// Convert a series of shorthand identifiers into a `Hand`.
    /// Panics if the input is incorrect. This exists only for test-writing.
    pub fn from_idents(idents: &str) -> Self {
        idents.parse().unwrap()
    }
}

impl std::str::FromStr for Hand {
    type Err = Error;

    fn from_str(idents: &str) -> Result<Self> {
        let cards = idents
            .split_ascii_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>>>()?;
        Self::from_slice(&cards)
    }
}

#[macro_export]
macro_rules! hand {
    ($ident:literal) => {
        $crate::poker::cards::Hand::from_idents($ident)
    };
}

impl CardView for Hand {
    fn view(&self) -> &[Card] {
        &self.cards
    }
}

#[derive(Copy, Clone, Debug, Hash, PartialOrd, Ord, PartialEq, Eq, Display, EnumIter)]
#[repr(u8)]
pub enum Category {
    #[strum(serialize = "High card")]
    HighCard = 0,
    #[strum(serialize = "Pair")]
    Pair = 1,
    #[strum(serialize = "Two pair")]
    TwoPair = 2,
    #[strum(serialize = "Three of a kind")]
    ThreeOfAKind = 3,
    #[strum(serialize = "Straight")]
    Straight = 4,
    #[strum(serialize = "Flush")]
    Flush = 5,
    #[strum(serialize = "Full house")]
    FullHouse = 6,
    #[strum(serialize = "Four of a kind")]
    FourOfAKind = 7,
    #[strum(serialize = "Straight Flush")]
    StraightFlush = 8,
    #[strum(serialize = "Royal Flush")]
    RoyalFlush = 9,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::prelude::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::{card, hand};

    #[test]
    fn base_deck_test() {
        let mut seen = HashSet::new();
        let deck = Deck::base_deck();
        for card in deck.cards {
            seen.insert(card);
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn base_shuffle_test() {
        let mut seen = HashSet::new();
        let mut rng = SmallRng::from_entropy();
        let deck = Deck::shuffled(&mut rng);
        for card in deck.cards {
            seen.insert(card);
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn deck_draw_test() {
        let mut seen = HashSet::new();
        let mut rng = SmallRng::from_entropy();
        let mut deck = Deck::shuffled(&mut rng);
        for _ in 0..52 {
            seen.insert(deck.draw());
        }
        assert_eq!(seen.len(), 52);
        assert_eq!(deck.count(), 0);
        assert_eq!(deck.peek_top_card(), None);
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn deck_draw_hand_test() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::shuffled(&mut rng);
        let hand = deck.draw_hand().unwrap();
        assert_eq!(hand.view().len(), HAND_SIZE);
        assert_eq!(deck.count(), 47);
    }

    #[test]
    fn hand_size_test() {
        let cards = [card!("KH"), card!("2S"), card!("9D"), card!("AC")];
        assert!(matches!(
            Hand::from_slice(&cards),
            Err(Error::WrongHandSize(4))
        ));
    }

    #[test]
    fn card_parse_test() {
        assert_eq!("kh".parse::<Card>().unwrap(), card!("KH"));
        assert!(matches!("K".parse::<Card>(), Err(Error::BadCardIdent(_))));
        assert!(matches!("1H".parse::<Card>(), Err(Error::UnknownRank('1'))));
        assert!(matches!("KX".parse::<Card>(), Err(Error::UnknownSuit('X'))));
    }

    #[test]
    fn hand_parse_test() {
        let hand: Hand = "TS JS QS KS AS".parse().unwrap();
        assert_eq!(hand, hand!("TS JS QS KS AS"));
        assert!(matches!(
            "TS JS QS".parse::<Hand>(),
            Err(Error::WrongHandSize(3))
        ));
    }
}
