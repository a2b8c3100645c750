use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SurveyEntryRow {
    pub id: i64,
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
    pub created_at: DateTime<Utc>,
}
