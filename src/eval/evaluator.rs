use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

use super::hand_rank::HandCategory;
use super::EvalError;

/// Вычислить лучшую 5-карточную руку из набора 5–7 карт
/// (2 карманные + 3..5 общих).
pub fn evaluate_best_hand(cards: &[Card]) -> Result<HandRank, EvalError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(EvalError::CardCount(n));
    }

    let mut best = HandRank(0);
    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        best = best.max(evaluate_five(&five));
                    }
                }
            }
        }
    }
    Ok(best)
}

/// Оценка строго 5-карточной комбинации.
fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    // (ранг, количество), сначала по количеству, потом по рангу – по убыванию.
    let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for card in cards {
        match groups.iter_mut().find(|(r, _)| *r == card.rank) {
            Some((_, count)) => *count += 1,
            None => groups.push((card.rank, 1)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let pattern: Vec<u8> = groups.iter().map(|(_, count)| *count).collect();
    let ranks: Vec<Rank> = groups.iter().map(|(rank, _)| *rank).collect();
    let straight = straight_ranks(&ranks);

    let category = match (pattern.as_slice(), is_flush, &straight) {
        (_, true, Some(_)) => HandCategory::StraightFlush,
        ([4, 1], _, _) => HandCategory::FourOfAKind,
        ([3, 2], _, _) => HandCategory::FullHouse,
        (_, true, None) => HandCategory::Flush,
        (_, false, Some(_)) => HandCategory::Straight,
        ([3, 1, 1], _, _) => HandCategory::ThreeOfAKind,
        ([2, 2, 1], _, _) => HandCategory::TwoPair,
        ([2, 1, 1, 1], _, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match straight {
        Some(order) if matches!(category, HandCategory::Straight | HandCategory::StraightFlush) => {
            HandRank::pack(category, &order)
        }
        _ => HandRank::pack(category, &ranks),
    }
}

/// Если 5 разных рангов (по убыванию) образуют стрит – порядок для сравнения.
/// Wheel (A2345) считается стритом до пятёрки.
fn straight_ranks(ranks: &[Rank]) -> Option<Vec<Rank>> {
    if ranks.len() != 5 {
        return None;
    }
    if ranks[0] as u8 - ranks[4] as u8 == 4 {
        return Some(ranks.to_vec());
    }
    let wheel = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
    if ranks == wheel {
        return Some(vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
    }
    None
}
