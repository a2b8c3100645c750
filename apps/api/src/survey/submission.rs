use serde::{Deserialize, Serialize};

use crate::config::ScoreMode;
use crate::errors::AppError;
use crate::survey::scoring::{compute_ai_iq_score, ScoreInputs, ScoringWeights};

/// Placeholder stored for categorical answers the respondent skipped.
pub const UNSPECIFIED: &str = "Nije navedeno";

fn unspecified() -> String {
    UNSPECIFIED.to_string()
}

/// Inbound questionnaire. The scoring answers are required; everything else
/// falls back to a placeholder, an empty string or zero.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitSurveyRequest {
    #[serde(default = "unspecified")]
    pub entitet: String,
    #[serde(default = "unspecified")]
    pub opcina: String,
    #[serde(default = "unspecified")]
    pub struka: String,
    #[serde(default)]
    pub podsektor: String,
    #[serde(default = "unspecified")]
    pub obrazovanje: String,
    pub koristi_tekst: bool,
    pub koristi_slike: bool,
    pub koristi_kod: bool,
    pub koristi_video: bool,
    #[serde(default = "unspecified")]
    pub frekvencija: String,
    #[serde(default)]
    pub alati: String,
    #[serde(default)]
    pub detaljni_odgovori: String,
    pub ustedjeno_vrijeme: i64,
    pub placa_pretplatu: bool,
    pub vjeruje_odgovorima: i64,
    #[serde(default)]
    pub strah_faktor: i64,
    #[serde(default = "unspecified")]
    pub utjecaj_na_posao: String,
    /// Only honoured when the service runs with `ScoreMode::ClientSupplied`.
    #[serde(default)]
    pub ai_iq_score: Option<f64>,
}

impl SubmitSurveyRequest {
    pub fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs {
            koristi_tekst: self.koristi_tekst,
            koristi_slike: self.koristi_slike,
            koristi_kod: self.koristi_kod,
            koristi_video: self.koristi_video,
            ustedjeno_vrijeme: self.ustedjeno_vrijeme,
            placa_pretplatu: self.placa_pretplatu,
            vjeruje_odgovorima: self.vjeruje_odgovorima,
        }
    }

    /// Picks the score according to `mode`. A client-supplied score is
    /// mandatory in client mode and ignored otherwise.
    pub fn resolve_score(&self, mode: ScoreMode) -> Result<f64, AppError> {
        match mode {
            ScoreMode::Computed => Ok(compute_ai_iq_score(
                &self.score_inputs(),
                &ScoringWeights::default(),
            )),
            ScoreMode::ClientSupplied => self.ai_iq_score.ok_or_else(|| {
                AppError::Validation("ai_iq_score is required".to_string())
            }),
        }
    }

    pub fn into_new_entry(self, ai_iq_score: f64, ip_adresa: Option<String>) -> NewSurveyEntry {
        NewSurveyEntry {
            entitet: self.entitet,
            opcina: self.opcina,
            struka: self.struka,
            podsektor: self.podsektor,
            obrazovanje: self.obrazovanje,
            koristi_tekst: self.koristi_tekst,
            koristi_slike: self.koristi_slike,
            koristi_kod: self.koristi_kod,
            koristi_video: self.koristi_video,
            frekvencija: self.frekvencija,
            alati: self.alati,
            detaljni_odgovori: self.detaljni_odgovori,
            ustedjeno_vrijeme: self.ustedjeno_vrijeme,
            placa_pretplatu: self.placa_pretplatu,
            vjeruje_odgovorima: self.vjeruje_odgovorima,
            strah_faktor: self.strah_faktor,
            utjecaj_na_posao: self.utjecaj_na_posao,
            ai_iq_score,
            ip_adresa,
        }
    }
}

/// A validated submission ready for insertion. `id` and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewSurveyEntry {
    pub entitet: String,
    pub opcina: String,
    pub struka: String,
    pub podsektor: String,
    pub obrazovanje: String,
    pub koristi_tekst: bool,
    pub koristi_slike: bool,
    pub koristi_kod: bool,
    pub koristi_video: bool,
    pub frekvencija: String,
    pub alati: String,
    pub detaljni_odgovori: String,
    pub ustedjeno_vrijeme: i64,
    pub placa_pretplatu: bool,
    pub vjeruje_odgovorima: i64,
    pub strah_faktor: i64,
    pub utjecaj_na_posao: String,
    pub ai_iq_score: f64,
    pub ip_adresa: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SubmitSurveyResponse {
    pub status: String,
    pub id: i64,
    pub score: f64,
}

impl SubmitSurveyResponse {
    pub fn success(id: i64, score: f64) -> Self {
        Self {
            status: "success".to_string(),
            id,
            score,
        }
    }
}
