//! Ship armaments. The first entry is what `fire` uses with no argument.

use super::{ShipRecord, ShipTable};

pub const CANNONS: ShipTable = ShipTable::new("cannon", &[
    ShipRecord {
        key: "gaon-cannon",
        aliases: &["gaon", "main-cannon"],
        title: "Gaon Cannon",
        description: "An air cannon fired from the lion's mouth. Burns three barrels of cola per shot and kicks the ship backwards.",
        launch_message: "Gaon Cannon... FIRE! The Sunny lurches back as the blast tears across the water!",
    },
    ShipRecord {
        key: "coup-de-burst",
        aliases: &["burst", "escape"],
        title: "Coup de Burst",
        description: "An emergency air blast from the stern that launches the whole ship into the sky.",
        launch_message: "Coup de Burst! Hold on to something, we're flying!",
    },
    ShipRecord {
        key: "side-cannons",
        aliases: &["broadside", "cannons"],
        title: "Side Cannons",
        description: "Conventional cannons behind the hull ports. A sharpshooter's favorite.",
        launch_message: "Broadside away! Direct hit, courtesy of the sniper king!",
    },
]);
