use super::*;

// =============================================================
// Press
// =============================================================

#[test]
fn single_press_has_one_contact() {
    let press = Press::single(Point::new(4.0, 5.0));
    assert_eq!(press.contacts, 1);
    assert_eq!(press.pos, Point::new(4.0, 5.0));
}

#[test]
fn single_contact_starts_drag() {
    assert!(Press::single(Point::new(0.0, 0.0)).starts_drag());
}

#[test]
fn two_contacts_do_not_start_drag() {
    let press = Press { pos: Point::new(0.0, 0.0), contacts: 2 };
    assert!(!press.starts_drag());
}

#[test]
fn many_contacts_do_not_start_drag() {
    let press = Press { pos: Point::new(0.0, 0.0), contacts: 5 };
    assert!(!press.starts_drag());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_dragging());
}

#[test]
fn dragging_reports_dragging() {
    let state = InputState::Dragging { last_screen: Point::new(1.0, 2.0) };
    assert!(state.is_dragging());
}

#[test]
fn input_state_debug_format() {
    assert_eq!(format!("{:?}", InputState::Idle), "Idle");
}

// =============================================================
// WheelDelta
// =============================================================

#[test]
fn wheel_delta_copy() {
    let a = WheelDelta { dx: 0.0, dy: -3.0 };
    let b = a;
    assert_eq!(a, b);
}
