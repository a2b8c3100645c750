use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::models::survey::SurveyEntryRow;
use crate::survey::scoring::round2;
use crate::survey::submission::NewSurveyEntry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
}

/// Inserts one entry inside its own transaction and returns the assigned id.
/// Append-only: rows are never updated afterwards.
pub async fn insert_entry(pool: &SqlitePool, entry: &NewSurveyEntry) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO survey_entries
            (entitet, opcina, struka, podsektor, obrazovanje,
             koristi_tekst, koristi_slike, koristi_kod, koristi_video,
             frekvencija, alati, detaljni_odgovori, ustedjeno_vrijeme,
             placa_pretplatu, vjeruje_odgovorima, strah_faktor, utjecaj_na_posao,
             ai_iq_score, ip_adresa, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&entry.entitet)
    .bind(&entry.opcina)
    .bind(&entry.struka)
    .bind(&entry.podsektor)
    .bind(&entry.obrazovanje)
    .bind(entry.koristi_tekst)
    .bind(entry.koristi_slike)
    .bind(entry.koristi_kod)
    .bind(entry.koristi_video)
    .bind(&entry.frekvencija)
    .bind(&entry.alati)
    .bind(&entry.detaljni_odgovori)
    .bind(entry.ustedjeno_vrijeme)
    .bind(entry.placa_pretplatu)
    .bind(entry.vjeruje_odgovorima)
    .bind(entry.strah_faktor)
    .bind(&entry.utjecaj_na_posao)
    .bind(entry.ai_iq_score)
    .bind(entry.ip_adresa.as_deref())
    .bind(Utc::now())
    .execute(&mut *tx)
    .await;

    let id = match result {
        Ok(done) => done.last_insert_rowid(),
        Err(e) => {
            warn!("Survey insert failed, rolling back: {e}");
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed: {rollback_err}");
            }
            return Err(e);
        }
    };

    tx.commit().await?;
    info!("Stored survey entry {id} (score {})", entry.ai_iq_score);
    Ok(id)
}

/// Every stored entry, newest first.
pub async fn list_entries(pool: &SqlitePool) -> Result<Vec<SurveyEntryRow>, sqlx::Error> {
    sqlx::query_as::<_, SurveyEntryRow>("SELECT * FROM survey_entries ORDER BY id DESC")
        .fetch_all(pool)
        .await
}

/// Row count plus mean score rounded to two decimals; no average when empty.
pub async fn dashboard_stats(pool: &SqlitePool) -> Result<DashboardStats, sqlx::Error> {
    let (total, average): (i64, Option<f64>) =
        sqlx::query_as("SELECT COUNT(*), AVG(ai_iq_score) FROM survey_entries")
            .fetch_one(pool)
            .await?;

    Ok(DashboardStats {
        total,
        average_score: if total == 0 { None } else { average.map(round2) },
    })
}

#[cfg(test)]
pub(crate) fn sample_entry(score: f64) -> NewSurveyEntry {
    NewSurveyEntry {
        entitet: "Republika Srpska".to_string(),
        opcina: "Banja Luka".to_string(),
        struka: "Obrazovanje".to_string(),
        podsektor: String::new(),
        obrazovanje: "VSS".to_string(),
        koristi_tekst: true,
        koristi_slike: false,
        koristi_kod: false,
        koristi_video: false,
        frekvencija: "Sedmično".to_string(),
        alati: "ChatGPT".to_string(),
        detaljni_odgovori: String::new(),
        ustedjeno_vrijeme: 4,
        placa_pretplatu: false,
        vjeruje_odgovorima: 2,
        strah_faktor: 3,
        utjecaj_na_posao: "Pozitivan".to_string(),
        ai_iq_score: score,
        ip_adresa: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let pool = test_pool().await;
        let first = insert_entry(&pool, &sample_entry(10.0)).await.unwrap();
        let second = insert_entry(&pool, &sample_entry(10.0)).await.unwrap();
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_insert_round_trips_fields() {
        let pool = test_pool().await;
        let mut entry = sample_entry(37.5);
        entry.ip_adresa = Some("10.1.2.3".to_string());
        let id = insert_entry(&pool, &entry).await.unwrap();

        let rows = list_entries(&pool).await.unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, id);
        assert_eq!(row.opcina, "Banja Luka");
        assert_eq!(row.strah_faktor, 3);
        assert_eq!(row.ai_iq_score, 37.5);
        assert_eq!(row.ip_adresa.as_deref(), Some("10.1.2.3"));
        assert!(row.koristi_tekst);
        assert!(!row.placa_pretplatu);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let pool = test_pool().await;
        for score in [1.0, 2.0, 3.0] {
            insert_entry(&pool, &sample_entry(score)).await.unwrap();
        }
        let rows = list_entries(&pool).await.unwrap();
        let scores: Vec<f64> = rows.iter().map(|r| r.ai_iq_score).collect();
        assert_eq!(scores, vec![3.0, 2.0, 1.0]);
        assert!(rows.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[tokio::test]
    async fn test_stats_empty() {
        let pool = test_pool().await;
        let stats = dashboard_stats(&pool).await.unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                total: 0,
                average_score: None
            }
        );
        assert_eq!(serde_json::to_value(&stats).unwrap(), serde_json::json!({"total": 0}));
    }

    #[tokio::test]
    async fn test_stats_average() {
        let pool = test_pool().await;
        for score in [10.0, 20.0, 30.0] {
            insert_entry(&pool, &sample_entry(score)).await.unwrap();
        }
        let stats = dashboard_stats(&pool).await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_score, Some(20.0));
    }

    #[tokio::test]
    async fn test_stats_average_is_rounded() {
        let pool = test_pool().await;
        for score in [10.0, 10.0, 0.0] {
            insert_entry(&pool, &sample_entry(score)).await.unwrap();
        }
        let stats = dashboard_stats(&pool).await.unwrap();
        assert_eq!(stats.average_score, Some(6.67));
    }

    #[tokio::test]
    async fn test_stats_average_ties_round_to_even() {
        let pool = test_pool().await;
        for score in [0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0] {
            insert_entry(&pool, &sample_entry(score)).await.unwrap();
        }
        let stats = dashboard_stats(&pool).await.unwrap();
        assert_eq!(stats.total, 8);
        assert_eq!(stats.average_score, Some(0.12));
    }

    #[tokio::test]
    async fn test_failed_insert_rolls_back() {
        let pool = test_pool().await;
        sqlx::query(
            "CREATE TRIGGER reject_entries BEFORE INSERT ON survey_entries
             BEGIN SELECT RAISE(ABORT, 'insert rejected'); END",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = insert_entry(&pool, &sample_entry(5.0)).await.unwrap_err();
        assert!(
            matches!(&err, sqlx::Error::Database(db) if db.message() == "insert rejected"),
            "unexpected error: {err}"
        );
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM survey_entries")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);

        // The connection is usable again and no id was consumed.
        sqlx::query("DROP TRIGGER reject_entries")
            .execute(&pool)
            .await
            .unwrap();
        assert_eq!(insert_entry(&pool, &sample_entry(5.0)).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_on_closed_pool_fails() {
        let pool = test_pool().await;
        pool.close().await;
        let err = insert_entry(&pool, &sample_entry(1.0)).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::PoolClosed));
    }
}
