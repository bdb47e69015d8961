//! Read-side views over tracking records: the compact previous/current/next
//! stage ribbon, the detailed GPI timeline, the counterparty ETA and the
//! tracker list filters.

use crate::domain::draft::{OrmType, RailKind};
use crate::domain::milestones::{is_screening_stage, stages_for};
use crate::domain::tracking::{TrackingInfo, TrackingStatus};
use crate::infrastructure::reference::{ReferenceStore, ScreeningCompletion};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Compact three-stage view shown on tracker cards.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StageRibbon {
    pub previous: Option<&'static str>,
    pub current: &'static str,
    pub next: Option<&'static str>,
    pub current_index: usize,
}

/// Resolves the ribbon for an ORM tracker. Records without a product sub-type
/// fall back to the LRS milestone map.
///
/// The current stage is the first explicitly in-progress milestone, or else
/// the count of completed milestones clamped to the map. A screening stage is
/// never surfaced as current: the ribbon advances past it to the following
/// milestone, since screening is an internal compliance hop the remitter does
/// not act on.
pub fn resolve_ribbon(info: &TrackingInfo) -> StageRibbon {
    let orm_type = info.orm_type.unwrap_or(OrmType::Lrs);
    let stages = stages_for(orm_type);
    let last = stages.len() - 1;

    let completed = info
        .timeline
        .iter()
        .filter(|e| e.status == TrackingStatus::Completed)
        .count();
    let in_progress = stages.iter().position(|stage| {
        info.timeline
            .iter()
            .any(|e| e.event == *stage && e.status == TrackingStatus::InProgress)
    });

    let mut index = in_progress.unwrap_or_else(|| completed.min(last));
    if is_screening_stage(stages[index]) {
        index = (index + 1).min(last);
    }

    StageRibbon {
        previous: (index > 0).then(|| stages[index - 1]),
        current: stages[index],
        next: (index < last).then(|| stages[index + 1]),
        current_index: index,
    }
}

/// One row of the detailed GPI timeline.
#[derive(Debug, PartialEq, Clone)]
pub struct TimelineRow {
    pub stage: String,
    pub status: TrackingStatus,
    pub timestamp: Option<DateTime<Utc>>,
    /// Static duration estimate, present only on rows still ahead.
    pub estimate: Option<String>,
    /// Screening-completed panel, attached to completed screening rows.
    pub screening_panel: Option<ScreeningCompletion>,
}

/// Expands a tracker into its full milestone timeline.
///
/// ORM records are projected onto the product's static milestone map: each
/// stage takes its stored event's status, or a positional default when no
/// event exists yet (first two completed, third in progress, rest pending).
/// An in-progress screening stage is rendered as already completed with the
/// following stage in progress, mirroring the ribbon's suppression rule.
/// Non-ORM records have no milestone map and render their stored events
/// verbatim.
pub fn resolve_timeline(info: &TrackingInfo, reference: &ReferenceStore) -> Vec<TimelineRow> {
    if info.rail != RailKind::Orm {
        return info
            .timeline
            .iter()
            .map(|e| TimelineRow {
                stage: e.event.clone(),
                status: e.status,
                timestamp: e.timestamp,
                estimate: None,
                screening_panel: None,
            })
            .collect();
    }

    let orm_type = info.orm_type.unwrap_or(OrmType::Lrs);
    let stages = stages_for(orm_type);

    let mut statuses: Vec<TrackingStatus> = Vec::with_capacity(stages.len());
    let mut timestamps: Vec<Option<DateTime<Utc>>> = Vec::with_capacity(stages.len());
    for (index, stage) in stages.iter().enumerate() {
        let stored = info.timeline.iter().find(|e| e.event == *stage);
        let status = stored.map(|e| e.status).unwrap_or(match index {
            0 | 1 => TrackingStatus::Completed,
            2 => TrackingStatus::InProgress,
            _ => TrackingStatus::Pending,
        });
        statuses.push(status);
        timestamps.push(stored.and_then(|e| e.timestamp));
    }

    if let Some(screening) = stages.iter().position(|s| is_screening_stage(s))
        && statuses[screening] == TrackingStatus::InProgress
    {
        statuses[screening] = TrackingStatus::Completed;
        if screening + 1 < stages.len() {
            statuses[screening + 1] = TrackingStatus::InProgress;
        }
    }

    stages
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            let status = statuses[index];
            let ahead = !matches!(
                status,
                TrackingStatus::Completed | TrackingStatus::InProgress
            );
            TimelineRow {
                stage: (*stage).to_string(),
                status,
                timestamp: timestamps[index],
                estimate: if ahead {
                    reference
                        .time_estimate(orm_type, stage)
                        .map(str::to_string)
                } else {
                    None
                },
                screening_panel: (is_screening_stage(stage)
                    && status == TrackingStatus::Completed)
                    .then(|| reference.screening_completion().clone()),
            }
        })
        .collect()
}

/// Demo corridor country per product, matching the seeded ETA table keys.
fn corridor_country(orm_type: OrmType) -> &'static str {
    match orm_type {
        OrmType::Lrs => "US",
        OrmType::TradeAdvance => "EU",
        OrmType::TradeDirect => "SG",
    }
}

/// Expected hours until the counterparty credits the beneficiary.
pub fn counterparty_eta(info: &TrackingInfo, reference: &ReferenceStore) -> u32 {
    let orm_type = info.orm_type.unwrap_or(OrmType::Lrs);
    reference.counterparty_eta(orm_type, &info.currency, corridor_country(orm_type))
}

/// Single-select amount bucket filter.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AmountBand {
    Under1200,
    Between1200And12000,
    Over12000,
}

impl AmountBand {
    /// Chip label. The lakh wording does not match the numeric thresholds;
    /// both are carried over from the product data as-is.
    pub fn label(&self) -> &'static str {
        match self {
            AmountBand::Under1200 => "Below 1L",
            AmountBand::Between1200And12000 => "1L-10L",
            AmountBand::Over12000 => "Above 10L",
        }
    }

    pub fn matches(&self, amount: Decimal) -> bool {
        match self {
            AmountBand::Under1200 => amount < dec!(1200),
            AmountBand::Between1200And12000 => amount >= dec!(1200) && amount <= dec!(12000),
            AmountBand::Over12000 => amount > dec!(12000),
        }
    }
}

/// Single-select recency filter over `last_updated`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DateRange {
    Today,
    Last7Days,
    Last30Days,
}

impl DateRange {
    pub fn matches(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(last_updated);
        match self {
            DateRange::Today => age < Duration::days(1),
            DateRange::Last7Days => age <= Duration::days(7),
            DateRange::Last30Days => age <= Duration::days(30),
        }
    }
}

/// Tracker list filter state. Multi-select chips hold display labels;
/// empty selections pass everything. All active predicates must hold.
#[derive(Debug, Default, Clone)]
pub struct TrackerFilters {
    pub search: String,
    pub orm_types: Vec<String>,
    pub statuses: Vec<String>,
    pub currencies: Vec<String>,
    pub amount_band: Option<AmountBand>,
    pub date_range: Option<DateRange>,
}

impl TrackerFilters {
    fn matches(&self, info: &TrackingInfo, now: DateTime<Utc>) -> bool {
        let orm_label = info.orm_type.map(|t| t.label()).unwrap_or("");

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let haystack = format!(
                "{} {} {} {} {}",
                info.beneficiary,
                info.txn_id,
                info.amount,
                info.uetr.as_deref().unwrap_or(""),
                orm_label,
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
        if !self.orm_types.is_empty()
            && !self
                .orm_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(orm_label))
        {
            return false;
        }
        if !self.statuses.is_empty()
            && !self
                .statuses
                .iter()
                .any(|s| s.eq_ignore_ascii_case(info.overall_status.humanize()))
        {
            return false;
        }
        if !self.currencies.is_empty()
            && !self
                .currencies
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&info.currency))
        {
            return false;
        }
        if let Some(band) = self.amount_band
            && !band.matches(info.amount)
        {
            return false;
        }
        if let Some(range) = self.date_range
            && !range.matches(info.last_updated, now)
        {
            return false;
        }
        true
    }
}

/// Applies the filters to the tracker list. Only ORM-rail records are listed;
/// RTGS/NEFT trackers never appear regardless of the filter state.
pub fn filter_trackers<'a>(
    trackers: &'a [TrackingInfo],
    filters: &TrackerFilters,
    now: DateTime<Utc>,
) -> Vec<&'a TrackingInfo> {
    trackers
        .iter()
        .filter(|t| t.rail == RailKind::Orm)
        .filter(|t| filters.matches(t, now))
        .collect()
}
