// src/partition.rs

//! Defines the three boundary-table construction strategies.
//!
//! A strategy turns a surface snapshot and a zone count into an ordered
//! table of `zones + 1` `BoundaryEntry` rows:
//!
//! - `UniformWidth`: evenly spaced boundaries over the fixed report-unit
//!   domain `[-100, 100]`, signed-symmetric letters (lowercase below
//!   zero, `'A'` anchored at zero, uppercase above).
//! - `EqualPopulationHeight`: boundaries chosen so each zone holds about
//!   the same number of samples, walked over the ascending raw heights.
//! - `EqualPopulationDeviation`: the same walk over the ascending
//!   absolute deviations `|height − rms|`.
//!
//! The strategy also fixes which value of a sample gets classified
//! (`measure`): raw height for the first two, deviation magnitude for the
//! third, so every sample is measured in the same domain its table was
//! built from.

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::linspace::linspace;
use crate::surface::{SamplePoint, Surface};
use crate::symbol::{ascending_uppercase, BoundaryEntry, ALPHABET_LEN};

/// Fixed domain of the uniform-width strategy, in report units.
const UNIFORM_DOMAIN: (f64, f64) = (-100.0, 100.0);

/// Boundary-table construction strategy, selected at encoder
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartitionStrategy {
    /// Evenly spaced zones over `[-100, 100]`.
    #[default]
    UniformWidth,
    /// Equal-population zones over the raw height range.
    EqualPopulationHeight,
    /// Equal-population zones over the deviation-from-rms range.
    EqualPopulationDeviation,
}

impl PartitionStrategy {
    /// Computes the boundary table for `surface` split into `zones`
    /// zones. Fails fast on a zero or odd zone count, on alphabet
    /// exhaustion, and (for the population strategies) on surfaces with
    /// fewer samples than zones.
    pub fn boundary_table(
        &self,
        surface: &Surface,
        zones: usize,
    ) -> Result<Vec<BoundaryEntry>, EncodeError> {
        if zones == 0 || zones % 2 != 0 {
            return Err(EncodeError::InvalidZoneCount(zones));
        }
        match self {
            PartitionStrategy::UniformWidth => uniform_table(zones),
            PartitionStrategy::EqualPopulationHeight => {
                equal_population_table(&surface.sorted_heights(), zones)
            }
            PartitionStrategy::EqualPopulationDeviation => {
                equal_population_table(&surface.sorted_deviations(), zones)
            }
        }
    }

    /// The value of `sample` that gets classified: the raw height, or the
    /// deviation magnitude for the deviation strategy (whose table lives
    /// in deviation space).
    pub fn measure(&self, surface: &Surface, sample: &SamplePoint) -> f64 {
        match self {
            PartitionStrategy::UniformWidth | PartitionStrategy::EqualPopulationHeight => {
                sample.height
            }
            PartitionStrategy::EqualPopulationDeviation => (sample.height - surface.rms()).abs(),
        }
    }
}

/// Evenly spaced boundaries with the signed-symmetric alphabet: walking
/// up from the domain minimum, the lower half takes descending lowercase
/// letters ending at `'a'`, the zero boundary takes `'A'`, and the upper
/// half takes ascending uppercase letters starting again at `'A'` (so a
/// negative entry owns the zone above its boundary and a positive entry
/// the zone below it).
fn uniform_table(zones: usize) -> Result<Vec<BoundaryEntry>, EncodeError> {
    let half = zones / 2;
    if half > ALPHABET_LEN {
        return Err(EncodeError::AlphabetExhausted {
            zones,
            needed: half,
            available: ALPHABET_LEN,
        });
    }

    let bounds = linspace(UNIFORM_DOMAIN.0, UNIFORM_DOMAIN.1, zones + 1);
    let mut table = Vec::with_capacity(zones + 1);

    let mut letter = b'a' + half as u8 - 1;
    for &b in bounds.iter().take(half) {
        table.push(BoundaryEntry::new(letter as char, b));
        letter -= 1;
    }
    // bounds[half] is exactly zero for an even split; anchor 'A' there.
    table.push(BoundaryEntry::new('A', 0.0));
    let mut letter = b'A';
    for &b in bounds.iter().skip(half + 1) {
        table.push(BoundaryEntry::new(letter as char, b));
        letter += 1;
    }
    Ok(table)
}

/// Splits the ascending `sorted` values into `zones` groups of roughly
/// equal population, alternating between the low and high end of the
/// range.
///
/// Each low-side step emits the running low marker as the next boundary,
/// then advances the marker to the midpoint between the sample at the
/// element cursor and its successor; each high-side step mirrors that
/// from the top, counting the same cursor in from the high end, and
/// advances the cursor by one zone's worth of samples. The walk stops
/// once the low side reaches the middle of the boundary array; the first
/// high-side step has already emitted the maximum as the top boundary.
///
/// The integer remainder of `total / zones` does not feed into the
/// boundary math; the middle zone absorbs whatever the per-zone counts
/// leave over.
fn equal_population_table(
    sorted: &[f64],
    zones: usize,
) -> Result<Vec<BoundaryEntry>, EncodeError> {
    let letters = ascending_uppercase(zones + 1)?;

    let total = sorted.len();
    let avg = total / zones;
    let _remain = total % zones; // see module docs: intentionally unused
    if avg == 0 || total < 2 {
        return Err(EncodeError::TooFewSamples { total, zones });
    }

    let half = zones / 2;
    let mut bounds = vec![0.0f64; zones + 1];
    let mut begin_low = sorted[0];
    let mut begin_high = sorted[total - 1];
    let mut count_elems = avg - 1;
    let mut index = 0;
    let mut low_turn = true;

    loop {
        if low_turn {
            bounds[index] = begin_low;
            begin_low = (sorted[count_elems] + sorted[count_elems + 1]) / 2.0;
            if index == half {
                break;
            }
        } else {
            bounds[zones - index] = begin_high;
            begin_high =
                (sorted[total - 1 - count_elems] + sorted[total - 2 - count_elems]) / 2.0;
            count_elems += avg - 1;
            index += 1;
        }
        low_turn = !low_turn;
    }

    Ok(letters
        .into_iter()
        .zip(bounds)
        .map(|(symbol, boundary)| BoundaryEntry::new(symbol, boundary))
        .collect())
}
