use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{Error, Result};
use crate::settings::GameSettings;

struct Tile {
    letter: char,
    count: u32,
}

const fn tile(letter: char, count: u32) -> Tile {
    Tile { letter, count }
}

/// The English letter distribution of a 98 tile bag, blanks left out.
const TILES: [Tile; 26] = [
    tile('E', 12),
    tile('A', 9),
    tile('I', 9),
    tile('O', 8),
    tile('N', 6),
    tile('R', 6),
    tile('T', 6),
    tile('L', 4),
    tile('S', 4),
    tile('U', 4),
    tile('D', 4),
    tile('G', 3),
    tile('B', 2),
    tile('C', 2),
    tile('M', 2),
    tile('P', 2),
    tile('F', 2),
    tile('H', 2),
    tile('V', 2),
    tile('W', 2),
    tile('Y', 2),
    tile('K', 1),
    tile('J', 1),
    tile('X', 1),
    tile('Q', 1),
    tile('Z', 1),
];

/// Draws `number_of_tiles` letters, weighted by how often each letter appears
/// in the bag. Banned letters are never drawn.
pub fn draw_letters<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Result<Vec<char>> {
    settings.validate()?;

    let weights = TILES.iter().map(|tile| {
        if settings.is_banned(tile.letter) {
            0
        } else {
            tile.count
        }
    });
    let distribution = WeightedIndex::new(weights).map_err(|error| {
        Error::log_and_create_internal(&format!(
            "Unable to build the tile distribution. Error: '{error}'."
        ))
    })?;

    let letters: Vec<char> = distribution
        .sample_iter(rng)
        .take(settings.number_of_tiles as usize)
        .map(|index| TILES[index].letter)
        .collect();
    log::debug!(
        "Drew letters for a new round. Letters: '{}'.",
        letters.iter().collect::<String>()
    );
    Ok(letters)
}
