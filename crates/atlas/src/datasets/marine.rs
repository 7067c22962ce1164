use crate::geo::LatLon;
use crate::records::MarineZoneRecord;

pub static MARINE_ZONES: [MarineZoneRecord; 6] = [
    MarineZoneRecord {
        name: "Continental Shelf",
        location: "South Coast",
        coordinate: LatLon::new(51.5, -8.0),
        depth: "0-200m",
        icon: "🌊",
        color: "#4682b4",
        description: "Shallow waters rich in nutrients. Important fishing grounds and home to diverse marine life.",
        species: &["Cod", "Haddock", "Plaice", "Crabs", "Lobsters"],
        image_url: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400&h=300&fit=crop",
    },
    MarineZoneRecord {
        name: "Kelp Forests",
        location: "West Coast",
        coordinate: LatLon::new(53.3, -10.0),
        depth: "5-30m",
        icon: "🌿",
        color: "#2e8b57",
        description: "Underwater forests of giant kelp provide shelter and food for hundreds of species. These are Ireland's most productive marine habitats.",
        species: &["Seals", "Sea urchins", "Crabs", "Fish", "Octopus"],
        image_url: "https://images.unsplash.com/photo-1583212292454-1fe6229603b7?w=400&h=300&fit=crop",
    },
    MarineZoneRecord {
        name: "Deep Atlantic Waters",
        location: "West of Ireland",
        coordinate: LatLon::new(53.0, -11.5),
        depth: "200-4000m",
        icon: "🐋",
        color: "#000080",
        description: "Deep oceanic waters where whales, dolphins, and large fish migrate through. Cold water coral reefs exist at depth.",
        species: &["Whales", "Dolphins", "Tuna", "Sharks", "Deep-sea corals"],
        image_url: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=400&h=300&fit=crop",
    },
    MarineZoneRecord {
        name: "Rocky Reefs",
        location: "North Coast",
        coordinate: LatLon::new(55.2, -7.0),
        depth: "0-50m",
        icon: "🪨",
        color: "#696969",
        description: "Rocky underwater habitats with crevices and caves. Home to colorful sponges, anemones, and many fish species.",
        species: &["Wrasse", "Conger eels", "Lobsters", "Sea anemones", "Starfish"],
        image_url: "https://images.unsplash.com/photo-1546026423-cc4642628d2b?w=400&h=300&fit=crop",
    },
    MarineZoneRecord {
        name: "Sandy Seabed",
        location: "Irish Sea",
        coordinate: LatLon::new(53.5, -5.5),
        depth: "10-100m",
        icon: "🏖️",
        color: "#daa520",
        description: "Sandy bottoms where flatfish camouflage and rays burrow. Important nursery grounds for young fish.",
        species: &["Plaice", "Sole", "Rays", "Sand eels", "Shrimp"],
        image_url: "https://images.unsplash.com/photo-1583212292454-1fe6229603b7?w=400&h=300&fit=crop",
    },
    MarineZoneRecord {
        name: "Estuaries",
        location: "Shannon Estuary",
        coordinate: LatLon::new(52.6, -9.6),
        depth: "0-20m",
        icon: "🦐",
        color: "#8b7d6b",
        description: "Where rivers meet the sea, creating brackish water habitats. Critical nursery areas for fish and feeding grounds for birds.",
        species: &["Salmon", "Sea trout", "Shrimp", "Flounder", "Wading birds"],
        image_url: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400&h=300&fit=crop",
    },
];
