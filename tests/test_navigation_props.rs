mod common;

use common::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Navigate(View, Option<String>, Option<String>),
    Login,
    Logout,
}

fn view() -> impl Strategy<Value = View> {
    prop::sample::select(View::ALL.to_vec())
}

fn id() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z][0-9]{1,2}")
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (view(), id(), id()).prop_map(|(v, c, a)| Op::Navigate(v, c, a)),
        1 => Just(Op::Login),
        1 => Just(Op::Logout),
    ]
}

proptest! {
    #[test]
    fn selections_are_sticky(ops in prop::collection::vec(op(), 1..40)) {
        let mut nav = ViewNavigator::new();
        for op in ops {
            let before = nav.snapshot();
            match op {
                Op::Navigate(view, class_id, assignment_id) => {
                    navigate(&mut nav, view, class_id.as_deref(), assignment_id.as_deref());
                    let after = nav.session();
                    prop_assert_eq!(after.current_view, view);
                    match class_id {
                        Some(id) => prop_assert_eq!(after.selected_class_id.clone(), class(&id)),
                        None => prop_assert_eq!(&after.selected_class_id, &before.selected_class_id),
                    }
                    match assignment_id {
                        Some(id) => prop_assert_eq!(after.selected_assignment_id.clone(), assignment(&id)),
                        None => prop_assert_eq!(&after.selected_assignment_id, &before.selected_assignment_id),
                    }
                    prop_assert_eq!(after.is_logged_in, before.is_logged_in);
                    prop_assert_eq!(after.offline_mode, before.offline_mode);
                }
                Op::Login => {
                    nav.login();
                    prop_assert!(nav.session().is_logged_in);
                    prop_assert_eq!(nav.session().current_view, View::Dashboard);
                    prop_assert_eq!(&nav.session().selected_class_id, &before.selected_class_id);
                }
                Op::Logout => {
                    nav.logout();
                    prop_assert_eq!(nav.snapshot(), Session::default());
                }
            }
        }
    }

    #[test]
    fn logged_out_renders_login(ops in prop::collection::vec(op(), 0..40)) {
        let mut nav = ViewNavigator::new();
        for op in ops {
            match op {
                Op::Navigate(view, class_id, assignment_id) => {
                    navigate(&mut nav, view, class_id.as_deref(), assignment_id.as_deref())
                }
                Op::Login => nav.login(),
                Op::Logout => nav.logout(),
            }
            if !nav.session().is_logged_in {
                prop_assert_eq!(nav.screen(), ActiveScreen::Login);
            } else {
                prop_assert_ne!(nav.screen(), ActiveScreen::Login);
            }
        }
    }
}
