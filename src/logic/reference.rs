//! Built-in reference data for Maharashtra.

use crate::models::{BoundingBox, DistrictProfile};

/// Approximate state extent.
pub const REGION_BOUNDS: BoundingBox = BoundingBox {
    north: 22.0284,
    south: 15.6029,
    west: 72.6594,
    east: 80.8909,
};

/// About 5 km at these latitudes.
pub const CITY_PROXIMITY_DEG: f64 = 0.045;

/// About 100 km. Loose on purpose: district centroids are sparse.
pub const NEAREST_CENTER_CUTOFF_DEG: f64 = 1.0;

pub const RESTRICTED_KEYWORDS: &[&str] = &[
    // built environment
    "hospital",
    "clinic",
    "school",
    "college",
    "university",
    "mall",
    "market",
    "hotel",
    "restaurant",
    "airport",
    "station",
    "railway",
    "bus stand",
    "bus stop",
    "police",
    "bank",
    "atm",
    "stadium",
    "library",
    "industrial",
    "factory",
    "commercial",
    "apartment",
    "apts",
    "office",
    "shop",
    "store",
    "cinema",
    "theatre",
    // natural features
    "lake",
    "pond",
    "river",
    "sea",
    "ocean",
    "water",
    "beach",
    "coast",
    "shore",
    "mountain",
    "peak",
    "hill",
    "cliff",
    "valley",
    "forest",
    "jungle",
    "wood",
    "park",
    // transport
    "highway",
    "expressway",
    "road",
    "street",
    "avenue",
    "boulevard",
    "lane",
    "bridge",
    "tunnel",
    // largest cities
    "mumbai",
    "pune",
    "nagpur",
    "thane",
    "nashik",
    "aurangabad",
    "solapur",
];

/// `amenity` types that are built features.
pub const BUILT_TYPES: &[&str] = &[
    "hospital",
    "clinic",
    "school",
    "college",
    "university",
    "mall",
    "market",
    "hotel",
    "restaurant",
    "airport",
    "station",
    "bus_stop",
    "bus_station",
    "railway_station",
    "pier",
    "harbour",
    "dock",
    "runway",
    "terminal",
    "marina",
    "industrial",
    "commercial",
    "residential",
    "retail",
    "parking",
    "bridge",
    "tunnel",
    "aqueduct",
];

/// Feature types that are water, under any class.
pub const WATER_TYPES: &[&str] = &[
    "river",
    "stream",
    "lake",
    "pond",
    "reservoir",
    "water",
    "canal",
    "basin",
    "beach",
    "coast",
];

/// `highway` types that are vehicular or foot infrastructure.
pub const HIGHWAY_TYPES: &[&str] = &[
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "residential",
    "service",
    "road",
    "footway",
    "path",
    "track",
];

/// Classes that restrict regardless of type.
pub const RESTRICTED_CLASSES: &[&str] = &["shop", "railway", "aeroway", "water"];

pub const MAN_MADE_TYPES: &[&str] = &["pier", "harbour"];

pub const LEISURE_TYPES: &[&str] = &["stadium", "swimming_pool", "park"];

pub const LANDUSE_TYPES: &[&str] = &["industrial", "commercial", "residential", "railway"];

pub const CITY_CENTERS: &[(&str, f64, f64)] = &[
    ("mumbai", 19.076, 72.8777),
    ("pune", 18.5204, 73.8567),
    ("nagpur", 21.1458, 79.0882),
    ("thane", 19.2183, 72.9781),
    ("nashik", 20.0, 73.7833),
    ("aurangabad", 19.8762, 75.3433),
    ("solapur", 17.6833, 75.9167),
];

/// Name variants mapped to district keys. Checked in this order.
pub const DISTRICT_ALIASES: &[(&str, &str)] = &[
    ("mumbai", "mumbai_city"),
    ("bombay", "mumbai_city"),
    ("suburban", "mumbai_suburban"),
    ("thane", "thane"),
    ("palghar", "palghar"),
    ("nashik", "nashik"),
    ("nasik", "nashik"),
    ("dhule", "dhule"),
    ("nandurbar", "nandurbar"),
    ("jalgaon", "jalgaon"),
    ("ahmednagar", "ahmednagar"),
    ("ahilyanagar", "ahmednagar"),
    ("pune", "pune"),
    ("poona", "pune"),
    ("solapur", "solapur"),
    ("sholapur", "solapur"),
    ("satara", "satara"),
    ("sangli", "sangli"),
    ("kolhapur", "kolhapur"),
    ("nagpur", "nagpur"),
    ("wardha", "wardha"),
    ("bhandara", "bhandara"),
    ("gondia", "gondia"),
    ("gondiya", "gondia"),
    ("gadchiroli", "gadchiroli"),
    ("chandrapur", "chandrapur"),
    ("yavatmal", "yavatmal"),
    ("amravati", "amravati"),
    ("akola", "akola"),
    ("washim", "washim"),
    ("buldhana", "buldhana"),
    ("buldana", "buldhana"),
    ("aurangabad", "aurangabad"),
    ("sambhajinagar", "aurangabad"),
    ("jalna", "jalna"),
    ("parbhani", "parbhani"),
    ("hingoli", "hingoli"),
    ("beed", "beed"),
    ("latur", "latur"),
    ("nanded", "nanded"),
    ("osmanabad", "osmanabad"),
    ("dharashiv", "osmanabad"),
    ("ratnagiri", "ratnagiri"),
    ("sindhudurg", "sindhudurg"),
    ("raigad", "raigad"),
];

const URBAN_NOTE: &str = "Urban - no significant agriculture";

/// The district catalog in declaration order.
pub fn districts() -> Vec<DistrictProfile> {
    vec![
        DistrictProfile::new(
            "ahmednagar",
            "Ahmednagar",
            19.0946,
            74.7384,
            &["Pomegranate", "Guava", "Sweet Orange (Mosambi)"],
            &["Sugarcane", "Jowar", "Bajra", "Cotton", "Soybean", "Wheat", "Pulses"],
        ),
        DistrictProfile::new(
            "akola",
            "Akola",
            20.7059,
            77.0219,
            &["Orange", "Sweet Lime", "Sapota"],
            &["Cotton", "Soybean", "Jowar", "Pulses"],
        ),
        DistrictProfile::new(
            "amravati",
            "Amravati",
            20.9374,
            77.7796,
            &["Orange", "Sweet Lime (Mosambi)", "Banana", "Pomegranate", "Guava"],
            &["Cotton", "Soybean", "Sorghum (Jowar)", "Pigeon Pea (Tur)", "Wheat"],
        ),
        DistrictProfile::new(
            "aurangabad",
            "Aurangabad",
            19.8762,
            75.3433,
            &["Sweet Lime (Mosambi)", "Grapes", "Guava", "Mango"],
            &["Cotton", "Maize", "Jowar", "Bajra", "Pulses", "Sugarcane"],
        ),
        DistrictProfile::new(
            "beed",
            "Beed",
            18.9894,
            75.76,
            &["Custard Apple (Sitaphal)", "Sweet Lime", "Pomegranate", "Guava"],
            &["Cotton", "Soybean", "Jowar", "Bajra", "Pigeon Pea (Tur)", "Sugarcane"],
        ),
        DistrictProfile::new(
            "bhandara",
            "Bhandara",
            21.17,
            79.65,
            &["Mango", "Guava", "Sapota (Chikoo)"],
            &["Rice (Paddy)", "Pulses", "Wheat", "Linseed"],
        ),
        DistrictProfile::new(
            "buldhana",
            "Buldhana",
            20.5333,
            76.1833,
            &["Custard Apple", "Guava", "Orange"],
            &["Cotton", "Soybean", "Jowar", "Pulses", "Maize"],
        ),
        DistrictProfile::new(
            "chandrapur",
            "Chandrapur",
            19.95,
            79.3,
            &["Mango", "Guava", "Sapota"],
            &["Rice (Paddy)", "Soybean", "Cotton", "Pulses"],
        ),
        DistrictProfile::new(
            "dhule",
            "Dhule",
            20.902,
            74.7774,
            &["Pomegranate", "Papaya"],
            &[
                "Cotton",
                "Bajra",
                "Jowar",
                "Groundnut",
                "Maize",
                "Soybean",
                "Wheat",
                "Gram",
                "Chilli",
            ],
        ),
        DistrictProfile::new(
            "gadchiroli",
            "Gadchiroli",
            19.6667,
            80.0,
            &["Mango", "Guava"],
            &["Rice (Paddy)", "Soybean", "Cotton", "Pulses"],
        ),
        DistrictProfile::new(
            "gondia",
            "Gondia",
            21.45,
            80.2,
            &["Mango"],
            &["Rice (Paddy)", "Pulses", "Wheat"],
        ),
        DistrictProfile::new(
            "hingoli",
            "Hingoli",
            19.7167,
            77.15,
            &["Banana"],
            &["Turmeric", "Soybean", "Cotton", "Jowar", "Pulses"],
        ),
        DistrictProfile::new(
            "jalgaon",
            "Jalgaon",
            21.0486,
            75.7903,
            &["Banana", "Lime"],
            &["Cotton", "Jowar", "Bajra", "Groundnut"],
        ),
        DistrictProfile::new(
            "jalna",
            "Jalna",
            19.8417,
            75.8861,
            &["Sweet Lime (Mosambi)", "Orange"],
            &["Cotton", "Jowar", "Bajra", "Maize", "Soybean"],
        ),
        DistrictProfile::new(
            "kolhapur",
            "Kolhapur",
            16.7,
            74.2333,
            &["Banana", "Guava", "Mango", "Cashew"],
            &["Sugarcane", "Rice (Paddy)", "Jowar", "Soybean", "Groundnut", "Jaggery"],
        ),
        DistrictProfile::new(
            "latur",
            "Latur",
            18.4,
            76.5833,
            &["Grapes", "Pomegranate"],
            &["Soybean", "Pulses", "Jowar", "Sugarcane"],
        ),
        DistrictProfile::new("mumbai_city", "Mumbai City", 19.076, 72.8777, &[], &[])
            .with_note(URBAN_NOTE),
        DistrictProfile::new("mumbai_suburban", "Mumbai Suburban", 19.033, 72.85, &[], &[])
            .with_note(URBAN_NOTE),
        DistrictProfile::new(
            "nagpur",
            "Nagpur",
            21.1458,
            79.0882,
            &["Orange", "Sweet Lime", "Guava"],
            &[
                "Cotton",
                "Soybean",
                "Rice (Paddy)",
                "Jowar",
                "Pigeon Pea (Tur)",
                "Wheat",
                "Chilli",
            ],
        ),
        DistrictProfile::new(
            "nanded",
            "Nanded",
            19.15,
            77.3333,
            &["Banana", "Mango"],
            &["Sugarcane", "Cotton", "Jowar", "Soybean", "Pulses", "Turmeric"],
        ),
        DistrictProfile::new(
            "nandurbar",
            "Nandurbar",
            21.3667,
            74.25,
            &["Papaya", "Mango", "Pomegranate", "Banana", "Custard Apple"],
            &[
                "Chilli",
                "Cotton",
                "Jowar",
                "Bajra",
                "Maize",
                "Wheat",
                "Groundnut",
                "Soybean",
            ],
        ),
        DistrictProfile::new(
            "nashik",
            "Nashik",
            20.0,
            73.7833,
            &["Grapes", "Pomegranate", "Guava"],
            &["Onions", "Tomato", "Sugarcane", "Bajra", "Jowar", "Wheat", "Cotton"],
        ),
        DistrictProfile::new(
            "osmanabad",
            "Osmanabad",
            18.1667,
            76.05,
            &["Grapes", "Pomegranate"],
            &["Pulses", "Jowar", "Soybean", "Sugarcane"],
        ),
        DistrictProfile::new(
            "palghar",
            "Palghar",
            19.6969,
            72.7654,
            &["Sapota (Chikoo)", "Mango", "Cashew", "Coconut", "Banana"],
            &["Rice (Paddy)", "Pulses", "Finger Millet (Nachni)"],
        ),
        DistrictProfile::new(
            "parbhani",
            "Parbhani",
            19.2667,
            76.7833,
            &["Sweet Lime", "Mango", "Sapota"],
            &["Cotton", "Sorghum (Jowar)", "Soybean", "Pulses", "Sugarcane"],
        ),
        DistrictProfile::new(
            "pune",
            "Pune",
            18.5204,
            73.8567,
            &["Grapes", "Figs (Anjeer)", "Pomegranate"],
            &["Sugarcane", "Onions", "Jowar", "Bajra", "Wheat", "Vegetables"],
        ),
        DistrictProfile::new(
            "raigad",
            "Raigad",
            18.75,
            73.4167,
            &["Mango", "Cashew", "Coconut", "Sapota", "Arecanut"],
            &["Rice (Paddy)", "Pulses", "Finger Millet (Nachni)"],
        ),
        DistrictProfile::new(
            "ratnagiri",
            "Ratnagiri",
            16.9944,
            73.3,
            &["Alphonso Mango (Hapus)", "Cashew", "Coconut", "Jackfruit", "Kokum"],
            &["Rice (Paddy)", "Finger Millet (Nachni)", "Coconuts"],
        ),
        DistrictProfile::new(
            "sangli",
            "Sangli",
            16.8667,
            74.5667,
            &["Grapes", "Pomegranate", "Banana"],
            &["Sugarcane", "Turmeric", "Jowar", "Wheat"],
        ),
        DistrictProfile::new(
            "satara",
            "Satara",
            17.6833,
            74.0,
            &["Strawberry", "Grapes"],
            &["Sugarcane", "Jowar", "Turmeric", "Ginger", "Rice"],
        ),
        DistrictProfile::new(
            "sindhudurg",
            "Sindhudurg",
            16.17,
            73.7,
            &["Mango", "Cashew", "Coconut", "Jackfruit", "Kokum", "Arecanut", "Sapota"],
            &["Rice (Paddy)", "Finger Millet", "Groundnut", "Pulses"],
        ),
        DistrictProfile::new(
            "solapur",
            "Solapur",
            17.6833,
            75.9167,
            &["Pomegranate", "Grapes", "Ber (Indian Jujube)"],
            &["Jowar", "Sugarcane", "Pigeon Pea (Tur)", "Gram"],
        ),
        DistrictProfile::new(
            "thane",
            "Thane",
            19.2183,
            72.9781,
            &["Sapota (Chikoo)", "Mango", "Cashew", "Banana"],
            &["Rice (Paddy)", "Pulses", "Finger Millet"],
        ),
        DistrictProfile::new(
            "wardha",
            "Wardha",
            20.75,
            78.6167,
            &["Orange", "Sweet Lime"],
            &["Cotton", "Soybean", "Pulses", "Jowar", "Turmeric"],
        ),
        DistrictProfile::new(
            "washim",
            "Washim",
            20.1,
            77.15,
            &["Banana"],
            &["Soybean", "Cotton", "Jowar", "Pulses", "Turmeric"],
        ),
        DistrictProfile::new(
            "yavatmal",
            "Yavatmal",
            20.4,
            78.1333,
            &["Orange"],
            &["Cotton", "Soybean", "Jowar", "Pulses"],
        ),
    ]
}
