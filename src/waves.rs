//! Staggered launch schedule: inside each season, SKUs launch in waves of
//! `wave_size`, each wave `interval_days` after the previous one.

use std::cmp::Ordering;
use std::sync::OnceLock;

use chrono::{Days, NaiveDate};
use itertools::Itertools;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::enrich::{parse_season, render_year, LAUNCH_DATE, SEASON, SEASON_YEAR, SKU_ID};
use crate::error::{EnrichError, Result};
use crate::season::Season;

#[derive(Debug, Clone, PartialEq)]
pub struct WavePlan {
    pub wave_size: usize,
    pub interval_days: u64,
    /// Year used for records without `season_year`.
    pub default_year: i32,
}

impl Default for WavePlan {
    fn default() -> Self {
        WavePlan {
            wave_size: 15,
            interval_days: 14,
            default_year: 2024,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveGroup {
    pub year: i32,
    pub season: Season,
    pub count: usize,
    /// Distinct launch dates, ascending.
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SkuOrder {
    Numeric(u64),
    Text(String),
    Missing,
}

fn sku_order(record: &Value) -> SkuOrder {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[A-Za-z]*(\d+)").unwrap());

    let Some(id) = record.get(SKU_ID).and_then(Value::as_str) else {
        return SkuOrder::Missing;
    };
    re.captures(id)
        .and_then(|caps| caps.get(1)?.as_str().parse().ok())
        .map(SkuOrder::Numeric)
        .unwrap_or_else(|| SkuOrder::Text(id.to_string()))
}

struct Slot {
    index: usize,
    order: SkuOrder,
}

/// Assigns a `launch_date` to every object record. Missing `season` counts as Q1.
pub fn assign(records: &mut [Value], plan: &WavePlan) -> Result<Vec<WaveGroup>> {
    let wave_size = plan.wave_size.max(1);

    let mut keyed = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let Some(obj) = record.as_object() else {
            continue;
        };
        let season = match obj.get(SEASON) {
            Some(v) => parse_season(index, v)?,
            None => Season::Q1,
        };
        let year = match obj.get(SEASON_YEAR) {
            Some(v) => render_year(index, v)?
                .trim()
                .parse::<i32>()
                .map_err(|_| EnrichError::UnsupportedYear { index })?,
            None => plan.default_year,
        };
        let slot = Slot {
            index,
            order: sku_order(record),
        };
        keyed.push(((year, season), slot));
    }

    let mut groups = Vec::new();
    let grouped = keyed.into_iter().into_group_map();
    for ((year, season), mut slots) in grouped.into_iter().sorted_by_key(|(key, _)| *key) {
        slots.sort_by(|a, b| match a.order.cmp(&b.order) {
            Ordering::Equal => a.index.cmp(&b.index),
            other => other,
        });

        let start = season
            .start_date(year)
            .ok_or_else(|| out_of_range(slots[0].index, year, season))?;
        let mut dates = Vec::with_capacity(slots.len());
        for (pos, slot) in slots.iter().enumerate() {
            let offset = (pos / wave_size) as u64 * plan.interval_days;
            let date = start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| out_of_range(slot.index, year, season))?;
            if let Some(obj) = records[slot.index].as_object_mut() {
                obj.insert(LAUNCH_DATE.to_string(), Value::String(date.to_string()));
            }
            dates.push(date);
        }

        debug!(year, %season, count = slots.len(), "wave group scheduled");
        groups.push(WaveGroup {
            year,
            season,
            count: slots.len(),
            dates: dates.into_iter().dedup().collect(),
        });
    }
    Ok(groups)
}

fn out_of_range(index: usize, year: i32, season: Season) -> EnrichError {
    EnrichError::DateOutOfRange {
        index,
        year: year.to_string(),
        season: season.to_string(),
    }
}
