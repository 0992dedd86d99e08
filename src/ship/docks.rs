//! Soldier Dock System. Channel numbers double as table indices.

use super::{ShipRecord, ShipTable};

pub const DOCKS: ShipTable = ShipTable::new("dock", &[
    ShipRecord {
        key: "control",
        aliases: &["channel-0", "dock-control"],
        title: "Channel 0: Dock Control",
        description: "The paddle wheel housing and the switchboard that opens every dock hatch on the starboard side.",
        launch_message: "All channels standing by. Pick a number, captain!",
    },
    ShipRecord {
        key: "shiro-mokuba",
        aliases: &["shiro-mokuba-i", "white-horse", "channel-1"],
        title: "Channel 1: Shiro Mokuba I",
        description: "A white, horse-headed pedal cart. Rides on land and water, three seats, one very tired rider.",
        launch_message: "Shiro Mokuba I is rolling out! Start pedalling!",
    },
    ShipRecord {
        key: "mini-merry",
        aliases: &["mini-merry-ii", "merry", "channel-2"],
        title: "Channel 2: Mini Merry II",
        description: "A small paddle boat wearing the figurehead of the old Going Merry. Runs on cola.",
        launch_message: "Mini Merry II, launch! She's as cute as ever.",
    },
    ShipRecord {
        key: "shark-submerge",
        aliases: &["shark-submerge-iii", "submarine", "channel-3"],
        title: "Channel 3: Shark Submerge III",
        description: "A three-seat, shark-shaped submarine built for deep-sea scouting.",
        launch_message: "Shark Submerge III diving! Hold your breath... actually, don't.",
    },
    ShipRecord {
        key: "kurosai",
        aliases: &["kurosai-fr-u-iv", "motorcycle", "channel-4"],
        title: "Channel 4: Kurosai FR-U IV",
        description: "A black rhinoceros motorbike with an overhead trailer for a second rider.",
        launch_message: "Kurosai FR-U IV is roaring out of the hangar! SUPER!",
    },
    ShipRecord {
        key: "brachio-tank",
        aliases: &["brachio-tank-v", "tank", "channel-5"],
        title: "Channel 5: Brachio Tank V",
        description: "A brachiosaurus-shaped tank with an arm that grabs the other vehicles to form a combined robot.",
        launch_message: "Brachio Tank V deploying! Heavy armor coming through!",
    },
    ShipRecord {
        key: "pool",
        aliases: &["inflatable-pool", "channel-6"],
        title: "Channel 6: Inflatable Pool",
        description: "A pool that pops out of the side of the ship. Devil fruit users should sit on the edge.",
        launch_message: "Pool's open! Devil fruit users, mind the water.",
    },
]);
