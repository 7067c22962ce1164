use crate::geo::LatLon;
use crate::records::ClimateZoneRecord;

pub static CLIMATE_ZONES: [ClimateZoneRecord; 5] = [
    ClimateZoneRecord {
        name: "West Coast - Oceanic",
        region: "West Coast",
        coordinate: LatLon::new(53.5, -9.5),
        avg_temp: "10°C",
        rainfall: "1400mm/year (High)",
        icon: "🌧️",
        color: "#4169e1",
        description: "The west coast experiences Ireland's wettest weather due to Atlantic weather systems. Mild winters and cool summers with high rainfall year-round.",
        seasons: "Wet winters (Nov-Feb), Mild springs, Cool summers, Rainy autumns",
    },
    ClimateZoneRecord {
        name: "East Coast - Drier",
        region: "East Coast",
        coordinate: LatLon::new(53.3, -6.2),
        avg_temp: "10°C",
        rainfall: "750mm/year (Moderate)",
        icon: "⛅",
        color: "#87ceeb",
        description: "The east is in the rain shadow of mountains and receives less rainfall. Slightly warmer in summer and experiences more sunshine.",
        seasons: "Drier overall, Cold winters, Warmer summers",
    },
    ClimateZoneRecord {
        name: "Southeast - Warmest",
        region: "Southeast",
        coordinate: LatLon::new(52.2, -6.9),
        avg_temp: "11°C",
        rainfall: "800mm/year (Moderate)",
        icon: "☀️",
        color: "#ffa500",
        description: "Ireland's sunniest and warmest region. Wexford and Waterford get the most sunshine hours and warmest summer temperatures.",
        seasons: "Warm sunny summers, Mild winters, Lowest rainfall",
    },
    ClimateZoneRecord {
        name: "Mountain Climate",
        region: "Wicklow & Kerry Mountains",
        coordinate: LatLon::new(52.1, -9.6),
        avg_temp: "7°C",
        rainfall: "2000mm/year (Very High)",
        icon: "🏔️",
        color: "#8a9a5b",
        description: "Mountain areas are significantly cooler and wetter. Snow is possible in winter at higher elevations.",
        seasons: "Heavy rain, Snow in winter peaks, Cool year-round",
    },
    ClimateZoneRecord {
        name: "Midlands - Continental",
        region: "Central Ireland",
        coordinate: LatLon::new(53.3, -7.8),
        avg_temp: "9°C",
        rainfall: "900mm/year (Moderate)",
        icon: "🌤️",
        color: "#98d8c8",
        description: "More sheltered from Atlantic weather. Experiences more temperature extremes - colder winters and warmer summers than coastal areas.",
        seasons: "Cold winters, Pleasant summers, Moderate rainfall",
    },
];
