use holdem_table::domain::card::Card;
use holdem_table::eval::{
    evaluate_best_hand, EvalError, HandCategory, HandEvaluator, StandardEvaluator,
};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| c.parse().expect("валидная карта"))
        .collect()
}

fn category(s: &str) -> HandCategory {
    evaluate_best_hand(&cards(s)).expect("5-7 карт").category()
}

fn value(s: &str) -> u32 {
    evaluate_best_hand(&cards(s)).expect("5-7 карт").0
}

#[test]
fn categories_of_five_card_hands() {
    assert_eq!(category("As Ks Qs Js Ts"), HandCategory::StraightFlush);
    assert_eq!(category("Ah Ad Ac As 2d"), HandCategory::FourOfAKind);
    assert_eq!(category("Kh Kd Kc 2s 2d"), HandCategory::FullHouse);
    assert_eq!(category("2h 7h 9h Jh Kh"), HandCategory::Flush);
    assert_eq!(category("9c Td Jh Qs Kd"), HandCategory::Straight);
    assert_eq!(category("7c 7d 7h Qs 2d"), HandCategory::ThreeOfAKind);
    assert_eq!(category("7c 7d Qh Qs 2d"), HandCategory::TwoPair);
    assert_eq!(category("7c 7d Qh 3s 2d"), HandCategory::OnePair);
    assert_eq!(category("7c 9d Qh 3s 2d"), HandCategory::HighCard);
}

#[test]
fn categories_are_ordered() {
    let ladder = [
        "7c 9d Qh 3s 2d",
        "7c 7d Qh 3s 2d",
        "7c 7d Qh Qs 2d",
        "7c 7d 7h Qs 2d",
        "9c Td Jh Qs Kd",
        "2h 7h 9h Jh Kh",
        "Kh Kd Kc 2s 2d",
        "Ah Ad Ac As 2d",
        "9s Ts Js Qs Ks",
    ];
    for pair in ladder.windows(2) {
        assert!(value(pair[0]) < value(pair[1]), "{} должна быть слабее {}", pair[0], pair[1]);
    }
}

#[test]
fn wheel_is_the_lowest_straight() {
    assert_eq!(category("Ah 2d 3c 4s 5h"), HandCategory::Straight);
    assert!(value("Ah 2d 3c 4s 5h") < value("2h 3d 4c 5s 6h"));
    assert_eq!(category("Ah 2h 3h 4h 5h"), HandCategory::StraightFlush);
}

#[test]
fn kickers_break_ties_within_category() {
    assert!(value("Ah Ad Kc 7s 2d") > value("Ah Ad Qc Js Td"));
    assert!(value("Kh Kd 5c 5s 9d") > value("Kh Kd 4c 4s Ad"));
    assert_eq!(value("Ah Kd 9c 7s 2d"), value("As Kc 9h 7d 2c"), "масти не влияют");
}

#[test]
fn best_five_of_seven() {
    assert_eq!(category("Ah Kh 2c 3d Qh Jh Th"), HandCategory::StraightFlush);
    assert_eq!(category("2c 2d 2h 9s 9d 4c 5c"), HandCategory::FullHouse);
    // Лучшая пара из трёх: старшие две пары + старший кикер.
    assert_eq!(value("Ac Ad Kh Ks Qc Qd 2h"), value("Ac Ad Kh Ks Qc"));
}

#[test]
fn card_count_is_checked() {
    assert_eq!(evaluate_best_hand(&cards("Ah Kh Qh Jh")), Err(EvalError::CardCount(4)));
    assert_eq!(
        evaluate_best_hand(&cards("Ah Kh Qh Jh Th 9h 8h 7h")),
        Err(EvalError::CardCount(8))
    );
}

#[test]
fn standard_evaluator_reports_name() {
    let strength = StandardEvaluator
        .evaluate(&cards("As Ks Qs Js Ts 2d 3c"))
        .expect("7 карт");
    assert_eq!(strength.category, HandCategory::StraightFlush);
    assert_eq!(strength.name(), "Straight flush");
}
