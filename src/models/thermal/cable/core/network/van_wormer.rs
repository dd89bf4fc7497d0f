//! Van Wormer coefficient for splitting a layer's heat capacity.

/// Below this `ln(r_out / r_in)` the closed form loses precision to
/// cancellation and the series limit is used instead.
const THIN_LAYER_LOG_RATIO: f64 = 1e-4;

/// Share of a cylindrical layer's heat capacity placed on its inner node.
///
/// `p = 1 / (2 ln x) − 1 / (x² − 1)` with `x = r_out / r_in`, which tends to
/// 1/2 for a thin layer and to 0 for a thick one. The remaining `1 − p` goes
/// to the outer node.
pub(super) fn coefficient(inner_radius: f64, outer_radius: f64) -> f64 {
    let log_ratio = (outer_radius / inner_radius).ln();
    if log_ratio < THIN_LAYER_LOG_RATIO {
        return 0.5 - log_ratio / 6.0;
    }

    let ratio = outer_radius / inner_radius;
    1.0 / (2.0 * log_ratio) - 1.0 / (ratio * ratio - 1.0)
}
