use crate::core::alignment::Alignment;
use crate::utils::validation::count_to_f64;

/// GC percentage over every unambiguous base (A, C, G, T; any case) in the alignment.
///
/// Gaps and ambiguity codes count toward neither numerator nor denominator.
/// Returns `NaN` when the alignment holds no unambiguous base at all.
#[must_use]
pub fn gc_percent(alignment: &Alignment) -> f64 {
    let mut gc = 0usize;
    let mut acgt = 0usize;

    for seq in alignment.iter() {
        for base in &seq.residues {
            match base.to_ascii_uppercase() {
                b'G' | b'C' => {
                    gc += 1;
                    acgt += 1;
                }
                b'A' | b'T' => acgt += 1,
                _ => {}
            }
        }
    }

    if acgt == 0 {
        return f64::NAN;
    }
    count_to_f64(gc) / count_to_f64(acgt) * 100.0
}
