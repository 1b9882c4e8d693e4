use crate::domain::Player;

/// Следующий по кругу не сфолдивший игрок после `current`.
/// Если сфолдили все остальные, возвращаемся к `current`.
pub fn next_player_index(players: &[Player], current: usize) -> usize {
    let n = players.len();
    if n == 0 {
        return current;
    }
    let mut idx = (current + 1) % n;
    while players[idx].is_folded && idx != current {
        idx = (idx + 1) % n;
    }
    idx
}

/// Следующий игрок, который реально может действовать (не сфолдил,
/// есть фишки). Если таких нет – первый не сфолдивший по кругу.
pub fn next_eligible_index(players: &[Player], current: usize) -> usize {
    let first = next_player_index(players, current);
    let mut idx = first;
    for _ in 0..players.len() {
        if players[idx].can_act() {
            return idx;
        }
        idx = next_player_index(players, idx);
    }
    first
}

/// Индексы малого и большого блайнда для дилера `dealer`.
/// Хедз-ап: дилер сам ставит малый блайнд.
pub fn blind_indices(player_count: usize, dealer: usize) -> (usize, usize) {
    if player_count == 2 {
        let sb = dealer % 2;
        (sb, (sb + 1) % 2)
    } else {
        let sb = (dealer + 1) % player_count;
        (sb, (sb + 1) % player_count)
    }
}
