use crate::config::catalog::Catalog;
use crate::core::itinerary::Trip;
use crate::core::planner::{PlanAction, TripPlanner};
use crate::domain::model::CatalogItem;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripConfig {
    pub trip: TripSettings,
    /// 未提供時使用 `Catalog::sample()`
    #[serde(default)]
    pub catalog: Option<Vec<CatalogItem>>,
    #[serde(default)]
    pub actions: Vec<PlanAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSettings {
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
}

fn default_travelers() -> u32 {
    1
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl TripConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRIP_TITLE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(items) => Catalog::new(items.clone()),
            None => Ok(Catalog::sample()),
        }
    }

    pub fn new_trip(&self) -> Result<Trip> {
        Trip::new(
            self.trip.title.clone(),
            self.trip.start_date,
            self.trip.travelers,
        )
    }

    /// 建立規劃器，但尚未套用 `actions`
    pub fn build_planner(&self) -> Result<TripPlanner<Catalog>> {
        Ok(TripPlanner::new(self.catalog()?, self.new_trip()?))
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("trip.title", &self.trip.title)?;
        validate_positive_number("trip.travelers", self.trip.travelers, 1)?;

        if let Some(items) = &self.catalog {
            if items.is_empty() {
                return Err(PlannerError::InvalidConfigValueError {
                    field: "catalog".to_string(),
                    value: "[]".to_string(),
                    reason: "Catalog must contain at least one item when given".to_string(),
                });
            }
        }
        let catalog = self.catalog()?;

        // 拖放動作必須引用目錄中存在的項目
        for action in &self.actions {
            if let PlanAction::DropItem { item, .. } = action {
                if catalog.find(item).is_none() {
                    return Err(PlannerError::UnknownCatalogItem { id: item.clone() });
                }
            }
        }

        Ok(())
    }
}

impl Validate for TripConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
