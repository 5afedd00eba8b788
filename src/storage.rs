// src/storage.rs

use crate::{errors::AppResult, models::BusinessProfile};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Single-record persistence boundary for the business profile: read
/// once at startup, written whenever onboarding or a profile edit
/// completes. No schema versioning, no migrations.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load(&self) -> AppResult<Option<BusinessProfile>>;
    async fn save(&self, profile: &BusinessProfile) -> AppResult<()>;
}

/// JSON file under the configured data directory.
#[derive(Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> AppResult<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join("profile.json"),
        })
    }
}

#[async_trait]
impl ProfileStore for JsonProfileStore {
    async fn load(&self) -> AppResult<Option<BusinessProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let profile = serde_json::from_str(&raw)?;
        Ok(Some(profile))
    }

    async fn save(&self, profile: &BusinessProfile) -> AppResult<()> {
        // Write to a sibling temp file first so a crash mid-write never
        // leaves a truncated profile behind
        let tmp = self.path.with_extension("json.tmp");
        let raw = serde_json::to_string_pretty(profile)?;
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        info!("Saved business profile for '{}'", profile.company_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("biztax-test-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn load_returns_none_before_onboarding() {
        let store = JsonProfileStore::new(temp_dir()).unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips_the_profile() {
        let store = JsonProfileStore::new(temp_dir()).unwrap();
        let profile = BusinessProfile {
            company_name: "Lagos Ventures Ltd".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
            annual_turnover: dec!(42_500_000),
            sector: "Manufacturing".to_string(),
            employee_count: 23,
        };

        store.save(&profile).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.company_name, profile.company_name);
        assert_eq!(loaded.annual_turnover, profile.annual_turnover);
        assert_eq!(loaded.registration_date, profile.registration_date);
    }

    #[tokio::test]
    async fn save_replaces_the_previous_profile_wholesale() {
        let store = JsonProfileStore::new(temp_dir()).unwrap();
        let mut profile = BusinessProfile {
            company_name: "Acme Ltd".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            annual_turnover: dec!(10_000_000),
            sector: "General Trade".to_string(),
            employee_count: 3,
        };
        store.save(&profile).await.unwrap();

        profile.annual_turnover = dec!(60_000_000);
        store.save(&profile).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.annual_turnover, dec!(60_000_000));
    }
}
