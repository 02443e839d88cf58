use std::collections::{BTreeMap, HashMap};

use crate::infra::Position;
use crate::state::board::{BoardGraph, TileId};
use crate::state::error::SnapshotError;
use crate::state::hero::{Hero, Mine, Pub};

/// Cells that heroes bump into rather than walk across.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landmark {
    Mine,
    Pub,
}

/// Read-only view of mine and pub locations, borrowed next to a mutable board.
#[derive(Clone, Copy)]
pub struct Landmarks<'a> {
    mines: &'a HashMap<Position, Mine>,
    pubs: &'a HashMap<Position, Pub>,
}

impl Landmarks<'_> {
    pub fn at(&self, pos: &Position) -> Option<Landmark> {
        if self.mines.contains_key(pos) {
            Some(Landmark::Mine)
        } else if self.pubs.contains_key(pos) {
            Some(Landmark::Pub)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Wall,
    Empty,
    Hero,
    Pub,
    Mine(Option<u32>),
}

/// Everything the bot knows about one turn.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub game_id: String,
    pub turn: u32,
    pub finished: bool,
    me_id: u32,
    me_tile: TileId,
    heroes: BTreeMap<u32, Hero>,
    heroes_by_position: HashMap<Position, u32>,
    mines: HashMap<Position, Mine>,
    pubs: HashMap<Position, Pub>,
    board: BoardGraph,
}

impl Snapshot {
    /// Build a snapshot from the heroes and the server's tile string.
    pub fn new(
        me_id: u32,
        heroes: Vec<Hero>,
        size: usize,
        tiles: &str,
    ) -> Result<Self, SnapshotError> {
        let cells = parse_tiles(size, tiles)?;

        let heroes: BTreeMap<u32, Hero> = heroes.into_iter().map(|h| (h.id, h)).collect();
        let mut mines = HashMap::new();
        let mut pubs = HashMap::new();
        let mut walkable = Vec::with_capacity(cells.len());

        for (position, cell) in cells {
            match cell {
                Cell::Wall => continue,
                Cell::Empty | Cell::Hero => {}
                Cell::Pub => {
                    pubs.insert(position, Pub { position });
                }
                Cell::Mine(owner) => {
                    if let Some(owner) = owner
                        && !heroes.contains_key(&owner)
                    {
                        return Err(SnapshotError::UnknownMineOwner { owner, position });
                    }
                    mines.insert(position, Mine { position, owner });
                }
            }
            walkable.push(position);
        }

        let board = BoardGraph::new(size as i32, walkable);

        let mut heroes_by_position = HashMap::new();
        for hero in heroes.values() {
            if board.tile_id(&hero.position).is_none() {
                return Err(SnapshotError::HeroNotOnBoard {
                    id: hero.id,
                    position: hero.position,
                });
            }
            if let Some(first) = heroes_by_position.insert(hero.position, hero.id) {
                return Err(SnapshotError::SharedPosition {
                    first,
                    second: hero.id,
                    position: hero.position,
                });
            }
        }

        let me = heroes
            .get(&me_id)
            .ok_or(SnapshotError::MissingControlledHero(me_id))?;
        let me_tile = board
            .tile_id(&me.position)
            .ok_or(SnapshotError::MissingControlledHero(me_id))?;

        Ok(Self {
            game_id: String::new(),
            turn: 0,
            finished: false,
            me_id,
            me_tile,
            heroes,
            heroes_by_position,
            mines,
            pubs,
            board,
        })
    }

    pub fn me(&self) -> &Hero {
        &self.heroes[&self.me_id]
    }

    /// Tile the controlled hero stands on.
    pub fn current_tile(&self) -> TileId {
        self.me_tile
    }

    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.values()
    }

    pub fn hero(&self, id: u32) -> Option<&Hero> {
        self.heroes.get(&id)
    }

    /// Every hero except the controlled one, in id order.
    pub fn enemies(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.values().filter(move |h| h.id != self.me_id)
    }

    pub fn hero_at(&self, pos: &Position) -> Option<&Hero> {
        self.heroes_by_position
            .get(pos)
            .and_then(|id| self.heroes.get(id))
    }

    pub fn enemy_at(&self, pos: &Position) -> Option<&Hero> {
        self.hero_at(pos).filter(|h| h.id != self.me_id)
    }

    pub fn mine_at(&self, pos: &Position) -> Option<&Mine> {
        self.mines.get(pos)
    }

    pub fn mines(&self) -> impl Iterator<Item = &Mine> {
        self.mines.values()
    }

    pub fn pubs(&self) -> impl Iterator<Item = &Pub> {
        self.pubs.values()
    }

    pub fn is_pub(&self, pos: &Position) -> bool {
        self.pubs.contains_key(pos)
    }

    pub fn landmark_at(&self, pos: &Position) -> Option<Landmark> {
        self.landmarks_view().at(pos)
    }

    pub fn board(&self) -> &BoardGraph {
        &self.board
    }

    /// The board for mutation, next to the landmark lookup the searches need.
    pub fn board_and_landmarks(&mut self) -> (&mut BoardGraph, Landmarks<'_>) {
        let Snapshot {
            board, mines, pubs, ..
        } = self;
        (board, Landmarks { mines, pubs })
    }

    fn landmarks_view(&self) -> Landmarks<'_> {
        Landmarks {
            mines: &self.mines,
            pubs: &self.pubs,
        }
    }
}

fn parse_tiles(size: usize, tiles: &str) -> Result<Vec<(Position, Cell)>, SnapshotError> {
    let cell_count = size
        .checked_mul(size)
        .filter(|&n| n <= i32::MAX as usize)
        .ok_or(SnapshotError::BoardTooLarge(size))?;
    let expected = cell_count
        .checked_mul(2)
        .ok_or(SnapshotError::BoardTooLarge(size))?;

    let chars: Vec<char> = tiles.chars().collect();
    if chars.len() != expected {
        return Err(SnapshotError::TileCount {
            size,
            expected,
            actual: chars.len(),
        });
    }

    let mut cells = Vec::with_capacity(cell_count);
    for (i, token) in chars.chunks(2).enumerate() {
        let position = Position::new((i / size) as i32, (i % size) as i32);
        let cell = match (token[0], token[1]) {
            ('#', '#') => Cell::Wall,
            (' ', ' ') => Cell::Empty,
            ('[', ']') => Cell::Pub,
            ('$', '-') => Cell::Mine(None),
            ('$', c) if c.is_ascii_digit() => Cell::Mine(c.to_digit(10)),
            ('@', c) if c.is_ascii_digit() => Cell::Hero,
            _ => {
                return Err(SnapshotError::UnknownTile {
                    token: token.iter().collect(),
                    position,
                });
            }
        };
        cells.push((position, cell));
    }
    Ok(cells)
}
