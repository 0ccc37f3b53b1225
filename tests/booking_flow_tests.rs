//! Selection and booking flow driven through the library API.

mod fixtures;
use fixtures::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use seatmap::booking::{BookingError, SelectionController};
use seatmap::models::{Block, SeatId, SeatStatus, ViewScope};
use seatmap::tui::{handle_key_event, AppState, PopupType};
use seatmap::view::Viewport;

fn seat(raw: &str) -> SeatId {
    raw.parse().unwrap()
}

fn controller() -> SelectionController {
    let config = sectioned_theater_config();
    SelectionController::new(config.theater.build_registry(None).unwrap())
}

#[test]
fn test_select_across_sectors_and_book() {
    let mut controller = controller();

    controller.show_sector(Block::Left);
    assert_eq!(controller.toggle(&seat("B-left-2")), Some(SeatStatus::Selected));
    controller.show_sector(Block::Right);
    assert_eq!(controller.toggle(&seat("C-right-1")), Some(SeatStatus::Selected));
    controller.show_all_sectors();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.scope, ViewScope::All);
    assert_eq!(snapshot.status_of(&seat("B-left-2")), Some(SeatStatus::Selected));
    assert_eq!(snapshot.total.to_string(), "25.00");

    let receipt = controller.book().unwrap();
    assert_eq!(receipt.seat_labels(), vec!["B-left-2", "C-right-1"]);
    assert_eq!(
        controller.status(&seat("C-right-1")),
        Some(SeatStatus::Occupied)
    );
    assert_eq!(controller.registry().occupied_count(), 2);

    // Booked seats can no longer join a selection
    assert_eq!(controller.toggle(&seat("B-left-2")), Some(SeatStatus::Occupied));
    assert!(matches!(controller.book(), Err(BookingError::EmptySelection)));
}

#[test]
fn test_compact_viewport_round_trip() {
    let mut controller = controller().with_viewport(Viewport::Compact);
    assert!(controller.view().shows_sector_picker());

    controller.show_sector(Block::Center);
    controller.toggle(&seat("A-center-3"));
    assert!(controller.on_viewport_change(Viewport::Wide));
    assert_eq!(controller.view().scope(), ViewScope::All);
    assert!(controller.is_selected(&seat("A-center-3")));

    assert!(!controller.on_viewport_change(Viewport::Wide));
    assert!(controller.on_viewport_change(Viewport::Compact));
    assert!(controller.view().shows_sector_picker());
}

#[test]
fn test_keyboard_session() {
    let config = sectioned_theater_config();
    let registry = config.theater.build_registry(None).unwrap();
    let mut state = AppState::new(config, SelectionController::new(registry));
    let mut press = |code: KeyCode| {
        handle_key_event(&mut state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    };

    // Down, End, select: last seat of row B in the right block
    press(KeyCode::Down);
    press(KeyCode::End);
    press(KeyCode::Char(' '));
    press(KeyCode::Char('b'));
    drop(press);

    let Some(PopupType::Receipt(receipt)) = &state.active_popup else {
        panic!("expected receipt popup");
    };
    assert_eq!(receipt.seat_labels(), vec!["B-right-2"]);
    assert_eq!(receipt.total.to_string(), "12.50");
}
