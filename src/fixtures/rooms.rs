//! Room fixture loading

use snafu::ResultExt;

use crate::assets::Assets;
use crate::domain::room::Room;
use crate::error::{JsonSnafu, MissingAssetSnafu, Result};

const ROOMS_PATH: &str = "fixtures/rooms.json";

/// Load the room fixtures from the embedded JSON
pub fn load_rooms() -> Result<Vec<Room>> {
    let raw = Assets::get(ROOMS_PATH).ok_or_else(|| {
        MissingAssetSnafu {
            path: ROOMS_PATH.to_string(),
        }
        .build()
    })?;

    serde_json::from_slice(&raw.data).context(JsonSnafu {
        path: ROOMS_PATH.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_parse_with_unit_square_bounds() {
        let rooms = load_rooms().expect("rooms fixture parses");
        assert!(!rooms.is_empty());
        for room in &rooms {
            let b = &room.bounds;
            assert!(b.x >= 0.0 && b.x + b.width <= 1.0, "{} x", room.id);
            assert!(b.y >= 0.0 && b.y + b.height <= 1.0, "{} y", room.id);
        }
    }
}
