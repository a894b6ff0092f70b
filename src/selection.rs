pub mod ranking;
use crate::coordinates::angular_distance;
use crate::coordinates::fov::FovSpec;
use crate::parse_stars::star::CelestialObject;
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// which end of the magnitude scale is kept when there are more than N objects in the fov
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BrightnessOrder {
    /// largest magnitude values first, ties in reverse catalog order
    #[default]
    Faintest,
    /// smallest magnitude values first, i.e. the visually brightest, ties in catalog order
    Brightest,
}

/// an object of the catalog together with its angular distance to the center of the fov
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SelectedObject<'a> {
    #[serde(flatten)]
    pub object: &'a CelestialObject,
    /// in radians
    pub distance: f64,
}

/// picks the N objects of `catalog` inside `fov` ranked first by `order` and returns them sorted
/// by their distance to the center of the fov, closest first
///
/// objects at pi/2 or more from the center are dropped before the fov test, the fov test alone
/// accepts objects from the opposite hemisphere
pub fn select_objects<'a>(
    catalog: &'a [CelestialObject],
    fov: &FovSpec,
    n: usize,
    order: BrightnessOrder,
) -> Vec<SelectedObject<'a>> {
    let same_hemisphere: Vec<SelectedObject> = catalog
        .par_iter()
        .map(|object| SelectedObject {
            object,
            distance: angular_distance(&fov.center, &object.position()),
        })
        .filter(|selected| selected.distance < FRAC_PI_2)
        .collect();

    let in_fov: Vec<SelectedObject> = same_hemisphere
        .par_iter()
        .filter(|selected| fov.contains(&selected.object.position()))
        .copied()
        .collect();
    debug!(
        catalog = catalog.len(),
        same_hemisphere = same_hemisphere.len(),
        in_fov = in_fov.len(),
        "filtered catalog"
    );

    let magnitudes: Vec<(usize, f64)> = in_fov
        .iter()
        .enumerate()
        .map(|(i, selected)| (i, selected.object.ranking_magnitude()))
        .collect();
    let mut ranked = ranking::sorted_indices(&magnitudes);
    if order == BrightnessOrder::Faintest {
        ranked.reverse();
    }
    ranked.truncate(n);

    let distances: Vec<(usize, f64)> = ranked.iter().map(|&i| (i, in_fov[i].distance)).collect();
    ranking::sorted_indices(&distances)
        .into_iter()
        .map(|i| in_fov[i])
        .collect()
}
