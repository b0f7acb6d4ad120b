pub mod chapters;
pub mod map;
pub mod play;

use std::path::Path;

use wd_content::ContentStore;
use wd_engine::{EngineConfig, Game, Position, Snapshot, Tile};

/// Load a deck from disk, or the built-in sample deck when no path is given.
fn load_content(path: Option<&Path>) -> Result<ContentStore, String> {
    match path {
        Some(path) => wd_content::loader::load_file(path).map_err(|e| e.to_string()),
        None => Ok(ContentStore::sample()),
    }
}

/// Load content and start a run.
fn start_game(content: Option<&Path>, seed: u64, grid_size: i32) -> Result<Game, String> {
    let content = load_content(content)?;
    let config = EngineConfig::default()
        .with_seed(seed)
        .with_grid_size(grid_size);
    Game::new(config, content).map_err(|e| format!("failed to start game: {e}"))
}

fn glyph(tile: Tile<'_>) -> char {
    match tile {
        Tile::Fog => ' ',
        Tile::Player => '@',
        Tile::Stairs => '>',
        Tile::Monster(_) => 'M',
        Tile::Wall => '#',
        Tile::Floor => '.',
    }
}

/// Draw the floor as ASCII, one line per row. With `fog` set, unseen
/// cells are blank.
fn render_map(snapshot: &Snapshot<'_>, fog: bool) -> String {
    let size = snapshot.grid.size();
    let mut out = String::with_capacity(((size + 1) * size) as usize);
    for y in 0..size {
        let row: String = (0..size)
            .map(|x| {
                let pos = Position::new(x, y);
                let tile = if fog {
                    snapshot.tile(pos)
                } else {
                    snapshot.tile_unfogged(pos)
                };
                glyph(tile)
            })
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// One-line summary of the player's state.
fn status_line(snapshot: &Snapshot<'_>) -> String {
    let p = snapshot.player;
    format!(
        "Floor {} ({}) | HP {}/{} | Lv {} | XP {}/{} | Gold {} | Streak {}",
        snapshot.floor,
        snapshot.chapter,
        p.hp,
        p.max_hp,
        p.level,
        p.xp,
        snapshot.xp_for_next_level,
        p.gold,
        snapshot.streak,
    )
}
