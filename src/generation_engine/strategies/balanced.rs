use rand::Rng;

use crate::generation_engine::error::GenerationError;
use crate::generation_engine::helpers;
use crate::generation_engine::models::{
    Combination, GenerationOptions, BANDS, BAND_QUOTA, PICK_COUNT,
};

/// Draw six numbers spread across the five bands, at most two per band.
///
/// Fixed numbers count toward their band's quota from the start; flags other
/// than fixed/excluded are ignored. Five bands times a quota of two leaves
/// room for ten picks, so a band with space always exists unless exclusions
/// empty out too much of the range, which errors explicitly.
pub fn generate<R: Rng>(
    rng: &mut R,
    options: &GenerationOptions,
) -> Result<Combination, GenerationError> {
    options.validate()?;
    let mut selected = options.fixed_numbers.clone();

    while selected.len() < PICK_COUNT {
        let open_bands: Vec<usize> = (0..BANDS.len())
            .filter(|&idx| band_has_room(idx, &selected, &options.excluded_numbers))
            .collect();
        if open_bands.is_empty() {
            return Err(GenerationError::ConstraintUnsatisfiable { attempts: 1 });
        }

        let band = open_bands[rng.gen_range(0..open_bands.len())];
        let (lo, hi) = BANDS[band];
        let candidates: Vec<u8> = (lo..=hi)
            .filter(|n| !options.excluded_numbers.contains(n) && !selected.contains(n))
            .collect();
        selected.push(candidates[rng.gen_range(0..candidates.len())]);
    }

    helpers::finish(selected)
}

/// A band is open while it is under quota and still has a drawable number.
fn band_has_room(idx: usize, selected: &[u8], excluded: &[u8]) -> bool {
    let (lo, hi) = BANDS[idx];
    let picked = selected.iter().filter(|&&n| n >= lo && n <= hi).count();
    if picked >= BAND_QUOTA {
        return false;
    }
    (lo..=hi).any(|n| !excluded.contains(&n) && !selected.contains(&n))
}
