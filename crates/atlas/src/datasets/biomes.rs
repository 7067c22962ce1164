use crate::geo::LatLon;
use crate::records::{BiomeKind, BiomeRecord};

pub static BIOMES: [BiomeRecord; 6] = [
    BiomeRecord {
        name: "Atlantic Oakwoods",
        kind: BiomeKind::Forest,
        locations: &["Killarney", "Glenveagh", "Wicklow"],
        coordinate: LatLon::new(52.0, -9.5),
        color: "#2d5016",
        icon: "🌲",
        description: "Ancient woodland dominated by oak trees with moss-covered trunks. These rare woodlands are biodiversity hotspots.",
        flora: "Oak, birch, hazel, mosses, ferns",
        fauna: "Pine marten, red squirrel, jay, wood warbler",
    },
    BiomeRecord {
        name: "Blanket Bog",
        kind: BiomeKind::Wetland,
        locations: &["Connemara", "Mayo", "Donegal"],
        coordinate: LatLon::new(53.5, -9.7),
        color: "#8b4513",
        icon: "🌾",
        description: "Ireland's most extensive habitat type, covering much of the west. These peatlands store massive amounts of carbon and are home to unique species.",
        flora: "Heather, cotton grass, sphagnum moss, sundew",
        fauna: "Golden plover, dunlin, Irish hare, red grouse",
    },
    BiomeRecord {
        name: "Coastal Grassland",
        kind: BiomeKind::Grassland,
        locations: &["Burren", "Aran Islands", "West Cork"],
        coordinate: LatLon::new(53.0, -9.2),
        color: "#90ee90",
        icon: "🌱",
        description: "Windswept grasslands along the coast with salt-tolerant plants. The limestone pavement of the Burren creates a unique ecosystem.",
        flora: "Spring gentian, orchids, mountain avens, sea pink",
        fauna: "Chough, butterflies, rabbits, stoats",
    },
    BiomeRecord {
        name: "Sand Dunes",
        kind: BiomeKind::Coastal,
        locations: &["Donegal", "Wexford", "Kerry"],
        coordinate: LatLon::new(52.2, -10.0),
        color: "#f4a460",
        icon: "🏖️",
        description: "Dynamic coastal habitats shaped by wind and waves. Important breeding grounds for birds and home to rare plants.",
        flora: "Marram grass, sea holly, lady's bedstraw",
        fauna: "Little tern, ringed plover, natterjack toad",
    },
    BiomeRecord {
        name: "Freshwater Lakes",
        kind: BiomeKind::Aquatic,
        locations: &["Lough Neagh", "Lough Corrib", "Lough Derg"],
        coordinate: LatLon::new(53.5, -8.0),
        color: "#4682b4",
        icon: "💧",
        description: "Ireland has numerous lakes supporting diverse aquatic life. These provide vital habitats for birds, fish, and invertebrates.",
        flora: "Water lilies, reeds, pondweeds",
        fauna: "Pike, trout, otter, great crested grebe, swans",
    },
    BiomeRecord {
        name: "Native Pine Forest",
        kind: BiomeKind::Forest,
        locations: &["Killarney", "Glenveagh"],
        coordinate: LatLon::new(51.95, -9.6),
        color: "#1b4d0e",
        icon: "🌲",
        description: "Remnants of ancient Scots pine forests. These once covered much of Ireland but are now rare and protected.",
        flora: "Scots pine, juniper, heather, bilberry",
        fauna: "Red deer, crossbill, red squirrel, pine marten",
    },
];
