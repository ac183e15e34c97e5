mod common;

use common::*;

#[test]
fn fresh_session_has_defaults() {
    let nav = ViewNavigator::new();
    let session = nav.session();
    assert_eq!(session.current_view, View::Login);
    assert!(!session.is_logged_in);
    assert!(session.selected_class_id.is_none());
    assert!(session.selected_assignment_id.is_none());
    assert!(session.offline_mode);
    assert_eq!(nav.screen(), ActiveScreen::Login);
}

#[test]
fn class_to_submissions_scenario() {
    let mut nav = ViewNavigator::new();
    let initial = nav.snapshot();

    navigate(&mut nav, View::Classroom, Some("c1"), None);
    assert_eq!(nav.session().current_view, View::Classroom);
    assert_eq!(nav.session().selected_class_id, class("c1"));

    navigate(&mut nav, View::AssignmentCreate, None, None);
    assert_eq!(nav.session().current_view, View::AssignmentCreate);
    assert_eq!(nav.session().selected_class_id, class("c1"));

    navigate(&mut nav, View::Submissions, None, Some("a7"));
    assert_eq!(nav.session().selected_class_id, class("c1"));
    assert_eq!(nav.session().selected_assignment_id, assignment("a7"));

    nav.logout();
    assert_eq!(nav.snapshot(), initial);
    assert_eq!(nav.snapshot(), Session::default());
}

#[test]
fn screens_receive_their_selection() {
    let mut nav = logged_in_navigator();
    assert_eq!(nav.screen(), ActiveScreen::Dashboard);

    navigate(&mut nav, View::Classroom, Some("2"), None);
    assert_eq!(nav.screen(), ActiveScreen::Classroom { class_id: class("2") });

    navigate(&mut nav, View::AssignmentCreate, None, None);
    assert_eq!(nav.screen(), ActiveScreen::AssignmentCreate { class_id: class("2") });

    navigate(&mut nav, View::Submissions, Some("2"), Some("1"));
    assert_eq!(nav.screen(), ActiveScreen::Submissions { assignment_id: assignment("1") });

    nav.go(View::Analytics);
    assert_eq!(nav.screen(), ActiveScreen::Analytics);
    nav.go(View::Settings);
    assert_eq!(nav.screen(), ActiveScreen::Settings);
}

#[test]
fn views_needing_a_selection_render_without_one() {
    let mut nav = logged_in_navigator();
    nav.go(View::Classroom);
    assert_eq!(nav.screen(), ActiveScreen::Classroom { class_id: None });
    nav.go(View::Submissions);
    assert_eq!(nav.screen(), ActiveScreen::Submissions { assignment_id: None });
}

#[test]
fn login_is_idempotent_and_keeps_selections() {
    let mut nav = ViewNavigator::new();
    navigate(&mut nav, View::Classroom, Some("c1"), Some("a1"));
    nav.login();
    let first = nav.snapshot();
    assert!(first.is_logged_in);
    assert_eq!(first.current_view, View::Dashboard);
    assert_eq!(first.selected_class_id, class("c1"));
    assert!(first.offline_mode);

    nav.go(View::Analytics);
    nav.login();
    assert_eq!(nav.snapshot(), first);
}

#[test]
fn logout_from_anywhere_restores_defaults() {
    let mut nav = logged_in_navigator();
    navigate(&mut nav, View::Settings, Some("4"), Some("3"));
    nav.logout();
    assert_eq!(nav.snapshot(), Session::default());
    assert_eq!(nav.screen(), ActiveScreen::Login);

    nav.logout();
    assert_eq!(nav.snapshot(), Session::default());
}

#[test]
fn unknown_view_names_route_to_dashboard() {
    let mut nav = logged_in_navigator();
    nav.go(View::parse_or_dashboard("report-cards"));
    assert_eq!(nav.screen(), ActiveScreen::Dashboard);
}

#[test]
fn offline_banner_only_after_login() {
    let mut nav = ViewNavigator::new();
    nav.go(View::Analytics);
    assert!(!nav.frame().offline_banner);

    nav.login();
    nav.go(View::Settings);
    assert!(nav.frame().offline_banner);

    nav.logout();
    let frame = nav.frame();
    assert_eq!(frame.screen, ActiveScreen::Login);
    assert!(!frame.offline_banner);
}
