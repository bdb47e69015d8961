//! Tracking projection over the seeded reference records: ribbon resolution,
//! detailed timelines and list filtering.

use chrono::{TimeZone, Utc};
use remit_hub::application::projection::{
    AmountBand, DateRange, TrackerFilters, counterparty_eta, filter_trackers, resolve_ribbon,
    resolve_timeline,
};
use remit_hub::domain::draft::RailKind;
use remit_hub::domain::milestones::is_screening_stage;
use remit_hub::domain::tracking::TrackingStatus;
use remit_hub::infrastructure::reference::ReferenceStore;

fn store() -> ReferenceStore {
    ReferenceStore::load().unwrap()
}

/// A moment shortly after the seeded records' last updates.
fn demo_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 5, 12, 0, 0).unwrap()
}

#[test]
fn test_lrs_ribbon_suppresses_in_progress_screening() {
    let store = store();
    let info = store.tracker("TXN-LRS-01").unwrap();
    let ribbon = resolve_ribbon(info);
    assert_eq!(ribbon.current, "Sent to Correspondent Bank");
    assert_eq!(ribbon.previous, Some("Screening (Conditional)"));
    assert_eq!(ribbon.next, Some("Payment Credited"));
}

#[test]
fn test_trade_advance_ribbon() {
    let store = store();
    let ribbon = resolve_ribbon(store.tracker("TXN9001").unwrap());
    assert_eq!(ribbon.current, "Intermediary Bank Routing");
    assert_eq!(ribbon.previous, Some("Screening (Mandatory)"));
}

#[test]
fn test_no_seeded_ribbon_shows_screening_as_current() {
    let store = store();
    for info in store.trackers().iter().filter(|t| t.rail == RailKind::Orm) {
        let ribbon = resolve_ribbon(info);
        assert!(
            !is_screening_stage(ribbon.current),
            "{} surfaced {}",
            info.txn_id,
            ribbon.current
        );
    }
}

#[test]
fn test_detailed_timeline_screening_override() {
    let store = store();
    let rows = resolve_timeline(store.tracker("TXN9001").unwrap(), &store);
    assert_eq!(rows.len(), 8);

    // Stored in-progress screening renders as completed with the panel, and
    // the stage after it takes over as in progress.
    assert_eq!(rows[3].stage, "Screening (Mandatory)");
    assert_eq!(rows[3].status, TrackingStatus::Completed);
    let panel = rows[3].screening_panel.as_ref().unwrap();
    assert_eq!(panel.duration, "12 minutes");
    assert_eq!(panel.checks_passed.len(), 3);

    assert_eq!(rows[4].stage, "Intermediary Bank Routing");
    assert_eq!(rows[4].status, TrackingStatus::InProgress);
    assert!(rows[4].estimate.is_none());

    for row in &rows[5..] {
        assert_eq!(row.status, TrackingStatus::Pending);
        assert!(row.estimate.is_some(), "{} has no estimate", row.stage);
    }
}

#[test]
fn test_non_orm_timeline_renders_stored_events() {
    let store = store();
    let info = store.tracker("TXN9002").unwrap();
    let rows = resolve_timeline(info, &store);
    assert_eq!(rows.len(), info.timeline.len());
    assert_eq!(rows[0].stage, "Payment Created");
    assert!(rows.iter().all(|r| r.screening_panel.is_none()));
}

#[test]
fn test_counterparty_eta_per_corridor() {
    let store = store();
    assert_eq!(counterparty_eta(store.tracker("TXN9001").unwrap(), &store), 24);
    assert_eq!(counterparty_eta(store.tracker("TXN-DIR-02").unwrap(), &store), 16);
    // EUR corridor has no entry; falls back to the 24h default.
    assert_eq!(counterparty_eta(store.tracker("TXN-LRS-01").unwrap(), &store), 24);
}

#[test]
fn test_filter_lists_only_orm_rail() {
    let store = store();
    let hits = filter_trackers(store.trackers(), &TrackerFilters::default(), demo_now());
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|t| t.rail == RailKind::Orm));
}

#[test]
fn test_search_matches_beneficiary_and_uetr() {
    let store = store();
    let filters = TrackerFilters {
        search: "euro".to_string(),
        ..TrackerFilters::default()
    };
    let hits = filter_trackers(store.trackers(), &filters, demo_now());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].txn_id, "TXN-LRS-01");

    let filters = TrackerFilters {
        search: "uetr-dir".to_string(),
        ..TrackerFilters::default()
    };
    let hits = filter_trackers(store.trackers(), &filters, demo_now());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].txn_id, "TXN-DIR-02");
}

#[test]
fn test_orm_type_chip_filter() {
    let store = store();
    let filters = TrackerFilters {
        orm_types: vec!["Trade Direct".to_string()],
        ..TrackerFilters::default()
    };
    let hits = filter_trackers(store.trackers(), &filters, demo_now());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].txn_id, "TXN-DIR-02");

    let filters = TrackerFilters {
        orm_types: vec!["LRS".to_string(), "Trade Advance".to_string()],
        ..TrackerFilters::default()
    };
    assert_eq!(filter_trackers(store.trackers(), &filters, demo_now()).len(), 2);
}

#[test]
fn test_amount_band_buckets_over_seeded_records() {
    let store = store();
    let band = |band: AmountBand| TrackerFilters {
        amount_band: Some(band),
        ..TrackerFilters::default()
    };
    // Seeded ORM amounts: 11000, 2500, 45000.
    assert!(filter_trackers(store.trackers(), &band(AmountBand::Under1200), demo_now()).is_empty());
    assert_eq!(
        filter_trackers(
            store.trackers(),
            &band(AmountBand::Between1200And12000),
            demo_now()
        )
        .len(),
        2
    );
    assert_eq!(
        filter_trackers(store.trackers(), &band(AmountBand::Over12000), demo_now()).len(),
        1
    );
}

#[test]
fn test_date_range_filter() {
    let store = store();
    let filters = TrackerFilters {
        date_range: Some(DateRange::Today),
        ..TrackerFilters::default()
    };
    assert_eq!(filter_trackers(store.trackers(), &filters, demo_now()).len(), 3);

    let much_later = Utc.with_ymd_and_hms(2026, 3, 20, 0, 0, 0).unwrap();
    assert!(filter_trackers(store.trackers(), &filters, much_later).is_empty());

    let filters = TrackerFilters {
        date_range: Some(DateRange::Last30Days),
        ..TrackerFilters::default()
    };
    assert_eq!(filter_trackers(store.trackers(), &filters, much_later).len(), 0);
}

#[test]
fn test_combined_filters_are_anded() {
    let store = store();
    let filters = TrackerFilters {
        search: "nova".to_string(),
        statuses: vec!["In Progress".to_string()],
        currencies: vec!["USD".to_string()],
        amount_band: Some(AmountBand::Between1200And12000),
        date_range: Some(DateRange::Today),
        ..TrackerFilters::default()
    };
    let hits = filter_trackers(store.trackers(), &filters, demo_now());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].txn_id, "TXN9001");

    let mismatched = TrackerFilters {
        currencies: vec!["EUR".to_string()],
        ..filters
    };
    assert!(filter_trackers(store.trackers(), &mismatched, demo_now()).is_empty());
}
