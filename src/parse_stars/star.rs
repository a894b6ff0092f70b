use crate::coordinates::SkyPoint;
use serde_derive::Serialize;

/// a single record of the catalog, never modified after it is read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialObject {
    /// the identifier of the object in the catalog, e.g. the gaia source_id
    pub id: String,
    /// right ascension in degrees, as written in the catalog
    pub ra: f64,
    /// declination in degrees, as written in the catalog
    pub dec: f64,
    /// the visual brightness of the object in magnitudes, None if the catalog field is empty
    pub magnitude: Option<f64>,
}

impl CelestialObject {
    pub fn new(id: impl Into<String>, ra: f64, dec: f64, magnitude: Option<f64>) -> CelestialObject {
        CelestialObject {
            id: id.into(),
            ra,
            dec,
            magnitude,
        }
    }

    /// position on the sky in radians
    pub fn position(&self) -> SkyPoint {
        SkyPoint::from_degrees(self.ra, self.dec)
    }

    /// the magnitude used for ranking, a missing one counts as 0
    pub fn ranking_magnitude(&self) -> f64 {
        self.magnitude.unwrap_or(0.0)
    }
}
