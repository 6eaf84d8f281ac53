//! Launch-date derivation over the SKU collection.
//!
//! The collection is read once, every record is processed in memory, and the
//! file is only rewritten after the whole array went through without error.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{EnrichError, Result};
use crate::season::Season;
use crate::store;
use crate::waves::{self, WaveGroup, WavePlan};

pub const SEASON_YEAR: &str = "season_year";
pub const SEASON: &str = "season";
pub const LAUNCH_DATE: &str = "launch_date";
pub const SKU_ID: &str = "sku_id";

#[derive(Debug, Clone, PartialEq)]
pub enum Schedule {
    /// `<season_year>-<MM>-01` from the fixed quarter table.
    Quarter,
    /// Staggered waves inside each season.
    Waves(WavePlan),
}

#[derive(Debug)]
pub struct Outcome {
    pub records: Vec<Value>,
    pub enriched: usize,
    pub waves: Vec<WaveGroup>,
    pub written: bool,
}

/// Loads `path`, derives `launch_date` for every qualifying record and writes
/// the collection back unless `dry_run` is set.
pub fn enrich(path: &Path, schedule: &Schedule, dry_run: bool) -> Result<Outcome> {
    let mut records = store::load(path)?;
    info!(path = %path.display(), records = records.len(), ?schedule, "enriching collection");

    let (enriched, groups) = match schedule {
        Schedule::Quarter => (apply_quarter(&mut records)?, Vec::new()),
        Schedule::Waves(plan) => {
            let groups = waves::assign(&mut records, plan)?;
            (groups.iter().map(|g| g.count).sum(), groups)
        }
    };

    let written = if dry_run {
        info!("dry run, leaving file untouched");
        false
    } else {
        store::save(path, &records)?;
        true
    };

    Ok(Outcome {
        records,
        enriched,
        waves: groups,
        written,
    })
}

/// Quarter schedule. Returns the number of records that received a date.
pub fn apply_quarter(records: &mut [Value]) -> Result<usize> {
    let mut enriched = 0;
    for (index, record) in records.iter_mut().enumerate() {
        let Some(obj) = record.as_object_mut() else {
            continue;
        };
        if let Some(date) = quarter_launch_date(index, obj)? {
            obj.insert(LAUNCH_DATE.to_string(), Value::String(date));
            enriched += 1;
        }
    }
    debug!(enriched, "quarter schedule applied");
    Ok(enriched)
}

/// `None` when the record lacks `season_year` or `season`.
pub fn quarter_launch_date(index: usize, record: &Map<String, Value>) -> Result<Option<String>> {
    let (Some(year), Some(season)) = (record.get(SEASON_YEAR), record.get(SEASON)) else {
        return Ok(None);
    };
    let season = parse_season(index, season)?;
    let year = render_year(index, year)?;
    Ok(Some(format!("{}-{}", year, season.month_day())))
}

pub fn parse_season(index: usize, value: &Value) -> Result<Season> {
    match value {
        Value::String(code) => code.parse().map_err(|_| EnrichError::UnknownSeason {
            index,
            season: code.clone(),
        }),
        other => Err(EnrichError::UnknownSeason {
            index,
            season: other.to_string(),
        }),
    }
}

/// Strings are used verbatim, numbers by their JSON text.
pub fn render_year(index: usize, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(EnrichError::UnsupportedYear { index }),
    }
}
