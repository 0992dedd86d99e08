//! Deck garden.

use super::{ShipRecord, ShipTable};

pub const GARDEN: ShipTable = ShipTable::new("garden item", &[
    ShipRecord {
        key: "tangerines",
        aliases: &["tangerine", "mikan", "orange-grove"],
        title: "Tangerine Grove",
        description: "Three tangerine trees transplanted from Cocoyasi Village. Counted every morning.",
        launch_message: "You reach for a tangerine. Somewhere a navigator's eyes narrow. Hands off!",
    },
    ShipRecord {
        key: "pop-greens",
        aliases: &["pop-green", "seeds"],
        title: "Pop Greens",
        description: "Battle seeds from Boin Archipelago, grown in a box beside the grove.",
        launch_message: "A Pop Green sprouts into a trampoline-sized leaf. Best not to water those indoors.",
    },
    ShipRecord {
        key: "lawn",
        aliases: &["grass", "deck"],
        title: "Lawn Deck",
        description: "Real grass over the main deck, with a swing hanging from the mast.",
        launch_message: "The lawn is freshly trimmed. Perfect for a nap in the sun.",
    },
    ShipRecord {
        key: "herbs",
        aliases: &["herb", "medicinal-herbs"],
        title: "Herb Planters",
        description: "Medicinal herbs kept by the ship's doctor for poultices and teas.",
        launch_message: "The herbs smell bitter. That means they work!",
    },
]);
