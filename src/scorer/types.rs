use serde::Serialize;

/// Breakdown of a layout score. `total` is what the optimizer maximises.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub total: f64,

    // Weighted components (penalty is stored positive)
    pub pinky_penalty: f64,
    pub home_row_bonus: f64,

    // Raw frequency sums
    pub pinky_freq: f64,
    pub home_row_freq: f64,
    pub total_freq: f64,
}

impl ScoreDetails {
    pub fn home_row_share(&self) -> f64 {
        if self.total_freq > 0.0 {
            self.home_row_freq / self.total_freq
        } else {
            0.0
        }
    }

    pub fn pinky_share(&self) -> f64 {
        if self.total_freq > 0.0 {
            self.pinky_freq / self.total_freq
        } else {
            0.0
        }
    }
}
