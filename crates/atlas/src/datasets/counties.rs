use crate::geo::LatLon;
use crate::records::CountyRecord;

pub static COUNTIES: [CountyRecord; 10] = [
    CountyRecord {
        name: "Dublin",
        coordinate: LatLon::new(53.35, -6.26),
        info: "Ireland's capital with coastal habitats and urban wildlife.",
    },
    CountyRecord {
        name: "Cork",
        coordinate: LatLon::new(51.9, -8.5),
        info: "Ireland's largest county with diverse coastal and inland habitats.",
    },
    CountyRecord {
        name: "Kerry",
        coordinate: LatLon::new(52.1, -9.6),
        info: "Home to Killarney National Park and Ireland's highest mountains.",
    },
    CountyRecord {
        name: "Galway",
        coordinate: LatLon::new(53.3, -9.0),
        info: "Contains the unique Burren limestone landscape and extensive bogs.",
    },
    CountyRecord {
        name: "Mayo",
        coordinate: LatLon::new(54.0, -9.5),
        info: "Wild Atlantic coast with blanket bogs and important bird habitats.",
    },
    CountyRecord {
        name: "Donegal",
        coordinate: LatLon::new(54.8, -8.1),
        info: "Ireland's most northerly county with dramatic coastal cliffs.",
    },
    CountyRecord {
        name: "Clare",
        coordinate: LatLon::new(52.8, -9.0),
        info: "Famous for the Cliffs of Moher and the Burren ecosystem.",
    },
    CountyRecord {
        name: "Wicklow",
        coordinate: LatLon::new(53.0, -6.4),
        info: "The 'Garden of Ireland' with mountains, forests, and lakes.",
    },
    CountyRecord {
        name: "Limerick",
        coordinate: LatLon::new(52.5, -8.8),
        info: "Rich farmland and important wetland habitats along the Shannon.",
    },
    CountyRecord {
        name: "Waterford",
        coordinate: LatLon::new(52.2, -7.6),
        info: "Coastal county with diverse marine life and sunny climate.",
    },
];
