use crate::geo::LatLon;
use crate::records::AnimalRecord;

pub static ANIMALS: [AnimalRecord; 12] = [
    AnimalRecord {
        name: "Red Deer",
        scientific_name: "Cervus elaphus",
        location: "County Kerry",
        coordinate: LatLon::new(52.0, -9.5),
        icon: "🦌",
        habitat: "Forests and moorlands",
        description: "Ireland's largest land mammal. Red deer are found mainly in Killarney National Park and the Wicklow Mountains. They prefer woodland areas with open moorland.",
        endangered: false,
        image_url: "https://images.unsplash.com/photo-1551069613-1904dbdcda11?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Atlantic Puffin",
        scientific_name: "Fratercula arctica",
        location: "Skellig Islands",
        coordinate: LatLon::new(51.77, -10.54),
        icon: "🐦",
        habitat: "Coastal cliffs",
        description: "These colorful seabirds nest on Ireland's coastal cliffs from April to August. The Skellig Islands host one of Ireland's largest puffin colonies.",
        endangered: true,
        image_url: "https://images.unsplash.com/photo-1612564148954-59545876eaa0?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Irish Hare",
        scientific_name: "Lepus timidus hibernicus",
        location: "County Donegal",
        coordinate: LatLon::new(54.8, -8.1),
        icon: "🐇",
        habitat: "Grasslands and coastal dunes",
        description: "A subspecies unique to Ireland, the Irish hare is larger than rabbits and has distinctive russet brown fur. Found throughout Ireland in open grasslands.",
        endangered: false,
        image_url: "https://images.unsplash.com/photo-1585110396000-c9ffd4e4b308?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Pine Marten",
        scientific_name: "Martes martes",
        location: "County Clare",
        coordinate: LatLon::new(52.8, -9.0),
        icon: "🦊",
        habitat: "Woodlands",
        description: "These shy, cat-sized carnivores are making a comeback in Ireland. They live in woodland areas and are excellent climbers.",
        endangered: false,
        image_url: "https://images.unsplash.com/photo-1551316679-9c6ae9dec224?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Grey Seal",
        scientific_name: "Halichoerus grypus",
        location: "West Cork Coast",
        coordinate: LatLon::new(51.5, -9.8),
        icon: "🦭",
        habitat: "Coastal waters and islands",
        description: "Ireland is home to approximately 6% of the world's grey seal population. They can be spotted along the rugged western coastline.",
        endangered: false,
        image_url: "https://images.unsplash.com/photo-1568430462989-44163eb1752f?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Common Dolphin",
        scientific_name: "Delphinus delphis",
        location: "Dingle Bay",
        coordinate: LatLon::new(52.1, -10.2),
        icon: "🐬",
        habitat: "Coastal waters",
        description: "These playful dolphins are frequently spotted off Ireland's west coast, particularly in Dingle Bay. They often travel in large pods.",
        endangered: false,
        image_url: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Red Fox",
        scientific_name: "Vulpes vulpes",
        location: "County Dublin",
        coordinate: LatLon::new(53.35, -6.26),
        icon: "🦊",
        habitat: "Forests, farmlands, urban areas",
        description: "Red foxes are widespread throughout Ireland and have adapted to urban environments. They're most active at dawn and dusk.",
        endangered: false,
        image_url: "https://images.unsplash.com/photo-1474511320723-9a56873867b5?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Basking Shark",
        scientific_name: "Cetorhinus maximus",
        location: "County Mayo Coast",
        coordinate: LatLon::new(54.0, -9.9),
        icon: "🦈",
        habitat: "Open ocean waters",
        description: "The second-largest fish in the world visits Irish waters in summer. Despite their size, they're gentle filter feeders eating only plankton.",
        endangered: true,
        image_url: "https://images.unsplash.com/photo-1560275619-4662e36fa65c?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Common Frog",
        scientific_name: "Rana temporaria",
        location: "County Galway",
        coordinate: LatLon::new(53.3, -9.0),
        icon: "🐸",
        habitat: "Ponds, bogs, wetlands",
        description: "Ireland's only native frog species. They thrive in ponds, bogs, and wetlands across the island and are important indicators of ecosystem health.",
        endangered: false,
        image_url: "https://images.unsplash.com/photo-1564349683136-77e08dba1ef7?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Peregrine Falcon",
        scientific_name: "Falco peregrinus",
        location: "Wicklow Mountains",
        coordinate: LatLon::new(53.0, -6.4),
        icon: "🦅",
        habitat: "Mountain cliffs and coastline",
        description: "The world's fastest animal (diving speeds over 300 km/h). These magnificent birds of prey nest on cliff faces in mountainous and coastal areas.",
        endangered: true,
        image_url: "https://images.unsplash.com/photo-1611689342806-0863700ce1e4?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Otter",
        scientific_name: "Lutra lutra",
        location: "River Shannon",
        coordinate: LatLon::new(52.7, -8.6),
        icon: "🦦",
        habitat: "Rivers, lakes, coastal areas",
        description: "Ireland has one of the healthiest otter populations in Europe. They live along rivers, lakes, and coastal areas throughout the country.",
        endangered: false,
        image_url: "https://images.unsplash.com/photo-1604802761732-494c0c678e05?w=400&h=300&fit=crop",
    },
    AnimalRecord {
        name: "Barn Owl",
        scientific_name: "Tyto alba",
        location: "County Limerick",
        coordinate: LatLon::new(52.5, -8.8),
        icon: "🦉",
        habitat: "Farmland, grasslands",
        description: "These ghostly white owls are nocturnal hunters that feed mainly on small mammals. They nest in old buildings and tree cavities.",
        endangered: true,
        image_url: "https://images.unsplash.com/photo-1579170053380-58064b2dee67?w=400&h=300&fit=crop",
    },
];
