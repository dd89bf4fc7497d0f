//! Lumped RC ladder of a cable and its step response.
//!
//! Each stage contributes one node, node 0 being the conductor. A stage's
//! thermal resistance links its node to the next one outward (the last stage
//! links to ambient), and its heat capacity is split between the two by the
//! [Van Wormer coefficient](van_wormer::coefficient). The conductor's own heat
//! capacity sits on node 0.
//!
//! With `Q` the diagonal of node capacities and `G` the ladder's conductance
//! matrix, the conductor's response to a unit step in losses is
//!
//! ```text
//! θ(t) = Σ T_i (1 − exp(−t / τ_i))
//! ```
//!
//! where `τ_i = 1/λ_i` and `T_i = u_i[0]² / (Q_0 λ_i)` come from the eigenpairs
//! `(λ_i, u_i)` of the symmetric matrix `Q^{-1/2} G Q^{-1/2}`. The `T_i` add up
//! to the total thermal resistance.

mod van_wormer;

use nalgebra::{DMatrix, SymmetricEigen};
use uom::si::{f64::Time, time::second};

use crate::support::units::{
    LinearHeatCapacity, LinearThermalResistance, joules_per_kelvin_meter, kelvin_meters_per_watt,
};

use super::{CableThermalSpec, SpecError};

/// Relative disagreement tolerated between `Σ T_i` and the total resistance.
const CLOSURE_TOL: f64 = 1e-6;

/// One exponential term of the conductor's step response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseTerm {
    /// Share of the steady rise this term contributes, per watt per metre.
    pub resistance: LinearThermalResistance,
    pub time_constant: Time,
}

/// Thermal network derived from a [`CableThermalSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalNetwork {
    van_wormer: Vec<f64>,
    node_capacitances: Vec<f64>,
    total_resistance: f64,

    /// Sorted from the slowest to the fastest.
    terms: Vec<ResponseTerm>,
}

impl ThermalNetwork {
    /// Builds the ladder of `spec` and diagonalises it.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::DegenerateNetwork`] if the response does not
    /// decay or its terms do not add up to the total thermal resistance.
    pub fn new(spec: &CableThermalSpec) -> Result<Self, SpecError> {
        let stages = spec.stages();
        let n = stages.len();

        let resistances: Vec<f64> = stages.iter().map(|s| s.resistance().value).collect();
        let capacitances: Vec<f64> = stages.iter().map(|s| s.capacitance().value).collect();
        let van_wormer: Vec<f64> = stages
            .iter()
            .map(|s| van_wormer::coefficient(s.inner_radius().value, s.outer_radius().value))
            .collect();

        let node_capacitances: Vec<f64> = (0..n)
            .map(|k| {
                let inner_share = van_wormer[k] * capacitances[k];
                if k == 0 {
                    spec.conductor().heat_capacity().value + inner_share
                } else {
                    (1.0 - van_wormer[k - 1]) * capacitances[k - 1] + inner_share
                }
            })
            .collect();

        let conductance = |i: usize, j: usize| -> f64 {
            if i == j {
                let outward = resistances[i].recip();
                if i == 0 {
                    outward
                } else {
                    outward + resistances[i - 1].recip()
                }
            } else if i.abs_diff(j) == 1 {
                -resistances[i.min(j)].recip()
            } else {
                0.0
            }
        };
        let scale: Vec<f64> = node_capacitances.iter().map(|q| q.sqrt().recip()).collect();
        let matrix = DMatrix::from_fn(n, n, |i, j| scale[i] * conductance(i, j) * scale[j]);

        let eigen = SymmetricEigen::new(matrix);

        let mut terms = Vec::with_capacity(n);
        for i in 0..n {
            let rate = eigen.eigenvalues[i];
            let weight = eigen.eigenvectors[(0, i)];
            if !(rate.is_finite() && rate > 0.0) {
                return Err(SpecError::DegenerateNetwork);
            }
            terms.push(ResponseTerm {
                resistance: kelvin_meters_per_watt(weight * weight / (node_capacitances[0] * rate)),
                time_constant: Time::new::<second>(rate.recip()),
            });
        }
        terms.sort_by(|a, b| b.time_constant.value.total_cmp(&a.time_constant.value));

        let total_resistance: f64 = resistances.iter().sum();
        let closure: f64 = terms.iter().map(|t| t.resistance.value).sum();
        if closure.is_nan()
            || (closure - total_resistance).abs() > CLOSURE_TOL * total_resistance
        {
            return Err(SpecError::DegenerateNetwork);
        }

        Ok(Self {
            van_wormer,
            node_capacitances,
            total_resistance,
            terms,
        })
    }

    /// Van Wormer coefficient of each stage, conductor outward.
    #[must_use]
    pub fn van_wormer_coefficients(&self) -> &[f64] {
        &self.van_wormer
    }

    /// Heat capacity lumped on each node, conductor outward.
    #[must_use]
    pub fn node_capacitances(&self) -> Vec<LinearHeatCapacity> {
        self.node_capacitances
            .iter()
            .map(|&q| joules_per_kelvin_meter(q))
            .collect()
    }

    #[must_use]
    pub fn total_resistance(&self) -> LinearThermalResistance {
        kelvin_meters_per_watt(self.total_resistance)
    }

    #[must_use]
    pub fn terms(&self) -> &[ResponseTerm] {
        &self.terms
    }

    /// Fraction of a step's temperature change still outstanding after `time`.
    ///
    /// Falls from 1 at the step towards 0 as the cable settles.
    #[must_use]
    pub fn attenuation(&self, time: Time) -> f64 {
        self.attenuation_at(time.get::<second>())
    }

    pub(super) fn attenuation_at(&self, seconds: f64) -> f64 {
        let sum: f64 = self
            .terms
            .iter()
            .map(|t| t.resistance.value * (-seconds / t.time_constant.value).exp())
            .sum();
        sum / self.total_resistance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::hour;

    use crate::models::thermal::cable::core::{
        Layer, ThermalStage,
        test_support::{buried_cable, celsius, compact_cable, copper},
    };
    use crate::support::units::ohms_per_kilometer;

    #[test]
    fn single_stage_is_one_exponential() {
        let conductor = copper(ohms_per_kilometer(0.05))
            .with_heat_capacity(joules_per_kelvin_meter(1000.0))
            .unwrap();
        let stage = ThermalStage::from_si(Layer::Insulation, 0.5, 2000.0, 0.01, 0.02).unwrap();
        let spec = CableThermalSpec::new(conductor, vec![stage], celsius(90.0)).unwrap();

        let network = ThermalNetwork::new(&spec).unwrap();
        let p = van_wormer::coefficient(0.01, 0.02);
        let q0 = 1000.0 + p * 2000.0;

        assert_eq!(network.terms().len(), 1);
        let term = network.terms()[0];
        assert_relative_eq!(term.resistance.value, 0.5, max_relative = 1e-12);
        assert_relative_eq!(
            term.time_constant.get::<second>(),
            0.5 * q0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn matches_iec_two_loop_form() {
        let spec = compact_cable();
        let network = ThermalNetwork::new(&spec).unwrap();

        let q = network.node_capacitances();
        let (qa, qb) = (q[0].value, q[1].value);
        let (ta, tb) = (0.3, 0.5);

        let m0 = 0.5 * (qa * (ta + tb) + qb * tb);
        let n0 = ta * qa * tb * qb;
        let root = (m0 * m0 - n0).sqrt();
        let a = (m0 + root) / n0;
        let b = (m0 - root) / n0;
        let t_a = (1.0 / (a - b)) * (1.0 / qa - b * (ta + tb));
        let t_b = ta + tb - t_a;

        // Slowest term first, which pairs with the smaller rate `b`.
        let terms = network.terms();
        assert_relative_eq!(terms[0].time_constant.value, 1.0 / b, max_relative = 1e-10);
        assert_relative_eq!(terms[1].time_constant.value, 1.0 / a, max_relative = 1e-10);
        assert_relative_eq!(terms[0].resistance.value, t_b, max_relative = 1e-10);
        assert_relative_eq!(terms[1].resistance.value, t_a, max_relative = 1e-10);
    }

    #[test]
    fn node_capacities_conserve_heat_capacity() {
        let spec = buried_cable();
        let network = ThermalNetwork::new(&spec).unwrap();

        let lumped: f64 = network.node_capacitances().iter().map(|q| q.value).sum();
        let stages: f64 = spec.stages().iter().map(|s| s.capacitance().value).sum();
        let last = spec.stages().len() - 1;
        let on_ambient = (1.0 - network.van_wormer_coefficients()[last]) * 4.07e7;

        assert_relative_eq!(
            lumped + on_ambient,
            1725.0 + stages,
            max_relative = 1e-12
        );
    }

    #[test]
    fn terms_add_up_to_total_resistance() {
        let spec = buried_cable();
        let network = ThermalNetwork::new(&spec).unwrap();

        assert_eq!(network.terms().len(), 4);
        let sum: f64 = network.terms().iter().map(|t| t.resistance.value).sum();
        assert_relative_eq!(sum, 0.9952, max_relative = 1e-9);
        assert_relative_eq!(network.total_resistance().value, 0.9952, max_relative = 1e-12);

        for pair in network.terms().windows(2) {
            assert!(pair[0].time_constant >= pair[1].time_constant);
        }
    }

    #[test]
    fn attenuation_decays_from_one() {
        let network = ThermalNetwork::new(&compact_cable()).unwrap();

        assert_relative_eq!(network.attenuation_at(0.0), 1.0, max_relative = 1e-9);
        let early = network.attenuation(Time::new::<hour>(0.5));
        let late = network.attenuation(Time::new::<hour>(2.0));
        assert!(early < 1.0 && late < early && late > 0.0);
        assert!(network.attenuation(Time::new::<hour>(48.0)) < 1e-9);
    }
}
