use crate::domain::{Player, SeatIndex};

/// Следующее место по кругу.
pub fn next_seat(seat: SeatIndex, seat_count: usize) -> SeatIndex {
    (seat + 1) % seat_count
}

/// Место через `offset` позиций от `seat` по кругу.
pub fn seat_after(seat: SeatIndex, offset: usize, seat_count: usize) -> SeatIndex {
    (seat + offset) % seat_count
}

/// Все места по кругу, начиная со `start` (включительно).
pub fn seats_from(start: SeatIndex, seat_count: usize) -> impl Iterator<Item = SeatIndex> {
    (0..seat_count).map(move |i| (start + i) % seat_count)
}

/// Первое место, начиная со `start` (включительно), где игрок может действовать.
pub fn first_actor_from(players: &[Player], start: SeatIndex) -> Option<SeatIndex> {
    seats_from(start, players.len()).find(|&seat| players[seat].can_act())
}

/// Проходит ли путь от `start` до ближайшего игрока, способного действовать,
/// через место `target` (оба конца включительно).
pub fn walk_passes(players: &[Player], start: SeatIndex, target: SeatIndex) -> bool {
    for seat in seats_from(start, players.len()) {
        if seat == target {
            return true;
        }
        if players[seat].can_act() {
            return false;
        }
    }
    false
}
