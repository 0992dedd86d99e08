//! Restricted areas. `launch_message` is the warning shown to intruders.

use super::{ShipRecord, ShipTable};

pub const AREAS: ShipTable = ShipTable::new("area", &[
    ShipRecord {
        key: "weapons-lab",
        aliases: &["workshop", "weapons-development-room"],
        title: "Weapons Development Room",
        description: "The shipwright's workshop under the deck. Half-finished inventions everywhere.",
        launch_message: "RESTRICTED: unfinished inventions inside. Anything you touch may explode.",
    },
    ShipRecord {
        key: "fridge",
        aliases: &["kitchen", "refrigerator"],
        title: "Galley Refrigerator",
        description: "A combination-locked fridge. The cook is the only one who knows the code.",
        launch_message: "RESTRICTED: the fridge is locked. The cook is watching you.",
    },
    ShipRecord {
        key: "energy-room",
        aliases: &["engine-room", "cola-tank"],
        title: "Energy Room",
        description: "The cola engine and fuel tanks that power the cannons and the dock vehicles.",
        launch_message: "RESTRICTED: cola reserves are for the engine, not for you.",
    },
    ShipRecord {
        key: "womens-quarters",
        aliases: &["women's-quarters", "girls-room"],
        title: "Women's Quarters",
        description: "Cabins for the navigator and the archaeologist.",
        launch_message: "RESTRICTED: knock first. Then walk away.",
    },
    ShipRecord {
        key: "crows-nest",
        aliases: &["lookout", "gym"],
        title: "Crow's Nest",
        description: "Lookout, observation room, and the swordsman's gym, all in one.",
        launch_message: "RESTRICTED: the swordsman is training. Lifting weights the size of boulders.",
    },
]);
