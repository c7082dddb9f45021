pub mod nominatim;
pub mod open_meteo;

pub use nominatim::NominatimClient;
pub use open_meteo::OpenMeteoClient;
