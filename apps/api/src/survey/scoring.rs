/// Points added per boolean signal and multipliers for the numeric answers.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub text_tool: f64,
    pub image_tool: f64,
    pub code_tool: f64,
    pub video_tool: f64,
    pub subscription: f64,
    /// Multiplier for `ustedjeno_vrijeme` (half a point per unit).
    pub time_saved: f64,
    /// Multiplier for `vjeruje_odgovorima`.
    pub trust: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            text_tool: 15.0,
            image_tool: 20.0,
            code_tool: 25.0,
            video_tool: 30.0,
            subscription: 40.0,
            time_saved: 0.5,
            trust: 5.0,
        }
    }
}

/// The subset of a submission that feeds the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub koristi_tekst: bool,
    pub koristi_slike: bool,
    pub koristi_kod: bool,
    pub koristi_video: bool,
    pub ustedjeno_vrijeme: i64,
    pub placa_pretplatu: bool,
    pub vjeruje_odgovorima: i64,
}

/// AI IQ score: a plain weighted sum. Inputs are not range-checked and the
/// result is not clamped, so negative answers lower the score.
pub fn compute_ai_iq_score(inputs: &ScoreInputs, weights: &ScoringWeights) -> f64 {
    let flag = |set: bool, points: f64| if set { points } else { 0.0 };

    flag(inputs.koristi_tekst, weights.text_tool)
        + flag(inputs.koristi_slike, weights.image_tool)
        + flag(inputs.koristi_kod, weights.code_tool)
        + flag(inputs.koristi_video, weights.video_tool)
        + inputs.ustedjeno_vrijeme as f64 * weights.time_saved
        + flag(inputs.placa_pretplatu, weights.subscription)
        + inputs.vjeruje_odgovorima as f64 * weights.trust
}

/// Rounds to two decimals, as shown on the dashboard. Ties go to the even
/// digit, so an average of 0.125 is reported as 0.12.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
