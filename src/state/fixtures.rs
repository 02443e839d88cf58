//! Boards drawn as rows of two-character cells, for tests.

use crate::infra::Position;
use crate::state::{Hero, Snapshot};

/// Build a square board from `rows`. Every `@n` cell places hero `n` at full
/// life with its spawn on that cell; `customize` adjusts each hero before the
/// snapshot is built. Hero 1 is the controlled one.
pub fn snapshot<F>(rows: &[&str], customize: F) -> Snapshot
where
    F: Fn(Hero) -> Hero,
{
    let size = rows.len();
    for row in rows {
        assert_eq!(row.chars().count(), size * 2, "row {:?} is not {} cells wide", row, size);
    }
    let tiles = rows.concat();

    let mut heroes = Vec::new();
    for (x, row) in rows.iter().enumerate() {
        let chars: Vec<char> = row.chars().collect();
        for (y, cell) in chars.chunks(2).enumerate() {
            if cell[0] == '@' {
                let id = cell[1].to_digit(10).expect("hero cell needs a digit");
                let hero = Hero::new(id, Position::new(x as i32, y as i32));
                heroes.push(customize(hero));
            }
        }
    }

    Snapshot::new(1, heroes, size, &tiles).expect("fixture board is valid")
}
