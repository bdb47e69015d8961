mod common;

use common::logged_in_engine;
use remit_hub::application::flow::{NavTab, QuickAction, Screen};
use remit_hub::domain::draft::OrmType;

#[test]
fn test_home_to_hub_and_back() {
    let mut engine = logged_in_engine();
    assert_eq!(engine.screen(), Screen::Home);

    engine.start_payment();
    assert_eq!(engine.screen(), Screen::Hub);

    engine.go_back();
    assert_eq!(engine.screen(), Screen::Home);
}

#[test]
fn test_quick_actions_route_to_their_screens() {
    let mut engine = logged_in_engine();

    engine.quick_action(QuickAction::MakePayment);
    assert_eq!(engine.screen(), Screen::Hub);

    engine.quick_action(QuickAction::AddBeneficiary);
    assert_eq!(engine.screen(), Screen::AddBeneficiary);

    engine.quick_action(QuickAction::TrackPayment);
    assert_eq!(engine.screen(), Screen::Track);
    assert!(engine.selected_tracker().is_none());

    engine.quick_action(QuickAction::PayAgain);
    assert_eq!(engine.screen(), Screen::History);
    assert!(engine.pay_again_mode());
}

#[test]
fn test_back_chain_through_manual_flow() {
    let mut engine = logged_in_engine();
    engine.start_payment();
    engine.select_orm_manual(OrmType::Lrs);
    engine.select_customer("CIF1001").unwrap();
    engine.confirm_instruction().unwrap();
    assert_eq!(engine.screen(), Screen::Confirmation);

    engine.go_back();
    assert_eq!(engine.screen(), Screen::PaymentForm);
    engine.go_back();
    assert_eq!(engine.screen(), Screen::Hub);
    engine.go_back();
    assert_eq!(engine.screen(), Screen::Home);
}

#[test]
fn test_bottom_nav_clears_pay_again_and_track_selection() {
    let mut engine = logged_in_engine();
    engine.view_tracker("TXN9001");
    assert_eq!(engine.selected_tracker(), Some("TXN9001"));

    engine.quick_action(QuickAction::PayAgain);
    engine.navigate(NavTab::Track);
    assert!(!engine.pay_again_mode());
    assert!(engine.selected_tracker().is_none());

    engine.quick_action(QuickAction::PayAgain);
    engine.navigate(NavTab::Profile);
    assert_eq!(engine.screen(), Screen::Profile);
    assert!(!engine.pay_again_mode());
}

#[test]
fn test_history_back_clears_pay_again() {
    let mut engine = logged_in_engine();
    engine.quick_action(QuickAction::PayAgain);
    engine.go_back();
    assert_eq!(engine.screen(), Screen::Home);
    assert!(!engine.pay_again_mode());
}

#[test]
fn test_track_from_success_selects_demo_tracker() {
    let mut engine = logged_in_engine();
    engine.track_from_success();
    assert_eq!(engine.screen(), Screen::Track);
    assert_eq!(engine.selected_tracker(), Some("TXN9001"));
    assert!(engine.selected_tracker_info().is_some());
}

#[test]
fn test_reset_flow_discards_draft() {
    let mut engine = logged_in_engine();
    engine.select_orm_manual(OrmType::TradeDirect);
    engine.select_customer("CIF1002").unwrap();
    assert!(engine.draft().beneficiary.is_some());

    engine.reset_flow();
    assert_eq!(engine.screen(), Screen::Home);
    assert!(engine.draft().beneficiary.is_none());
    assert!(engine.draft().rail.is_none());
}

#[test]
fn test_logout_resets_everything() {
    let mut engine = logged_in_engine();
    engine.select_orm_manual(OrmType::Lrs);
    engine.logout();
    assert!(!engine.is_logged_in());
    assert_eq!(engine.screen(), Screen::Home);
    assert!(engine.draft().rail.is_none());
}
