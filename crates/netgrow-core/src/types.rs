use std::collections::BTreeMap;

use num_rational::Ratio;

/// Exact, always-reduced rational number used for every reported statistic.
pub type Fraction = Ratio<u64>;

/// Degree value mapped to the fraction of nodes carrying it, ascending by degree.
pub type DegreeDistribution = BTreeMap<usize, Fraction>;

/// Time step mapped to the average degree recorded at that step.
pub type AverageDegreeHistory = BTreeMap<u64, Fraction>;

/// Converts an exact fraction into a float for rendering purposes.
pub fn fraction_to_f64(value: &Fraction) -> f64 {
    *value.numer() as f64 / *value.denom() as f64
}
