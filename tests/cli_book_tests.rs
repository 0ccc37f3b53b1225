//! End-to-end tests for `seatmap book`.

mod fixtures;
use fixtures::*;

#[test]
fn test_book_requires_a_seat() {
    let (dir, path) = write_config(&small_theater_config());
    let (code, stdout, stderr) = run(isolated_command(
        &["book", "--config", path.to_str().unwrap()],
        dir.path(),
    ));

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Please select at least one seat."));
}

#[test]
fn test_book_only_invalid_seats_is_empty_selection() {
    let (dir, path) = write_config(&small_theater_config());
    let (code, _, stderr) = run(isolated_command(
        &["book", "--config", path.to_str().unwrap(), "-s", "Q-left-1"],
        dir.path(),
    ));

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Skipping seat 'Q-left-1'"));
    assert!(stderr.contains("Please select at least one seat."));
}

#[test]
fn test_book_json_reports_skipped_seats_on_stderr() {
    let (dir, path) = write_config(&small_theater_config());
    let (code, stdout, stderr) = run(isolated_command(
        &[
            "book",
            "--json",
            "--config",
            path.to_str().unwrap(),
            "-s",
            "A-left-9",
            "-s",
            "bogus",
        ],
        dir.path(),
    ));

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Skipping seat 'A-left-9': seat does not exist in this theater"));
    assert!(stderr.contains("Skipping seat 'bogus'"));
    assert!(stderr.contains("Please select at least one seat."));
}

#[test]
fn test_book_text_confirmation() {
    let (dir, path) = write_config(&small_theater_config());
    let (code, stdout, stderr) = run(isolated_command(
        &[
            "book",
            "--config",
            path.to_str().unwrap(),
            "--seat",
            "A-left-1",
            "--seat",
            "A-center-2",
        ],
        dir.path(),
    ));

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("Booking confirmed!"));
    assert!(stdout.contains("A-center-2, A-left-1"));
    assert!(stdout.contains("$25.00"));
    assert!(stdout.contains("Test Hall"));
}

#[test]
fn test_book_json_receipt() {
    let (dir, path) = write_config(&small_theater_config());
    let (code, stdout, _) = run(isolated_command(
        &[
            "book",
            "--json",
            "--config",
            path.to_str().unwrap(),
            "-s",
            "A-left-1",
            "-s",
            "A-center-2",
            "-s",
            "A-left-1",
            "-s",
            "bogus",
        ],
        dir.path(),
    ));
    assert_eq!(code, Some(0));

    let response: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    let receipt = &response["receipt"];
    assert_eq!(receipt["seats"], serde_json::json!(["A-center-2", "A-left-1"]));
    assert_eq!(receipt["total"], "25.00");
    assert!(receipt["id"].as_str().is_some_and(|id| id.len() == 36));
    assert!(receipt["booked_at"].is_string());
    assert_eq!(response["total_display"], "$25.00");

    let skipped = response["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["seat"], "bogus");
}

#[test]
fn test_book_fully_occupied_theater() {
    let mut config = small_theater_config();
    config.theater.occupancy = 1.0;
    config.theater.section_rows = vec![1];
    config.theater.columns = seatmap::models::BlockColumns::new(1, 1, 1);
    let (dir, path) = write_config(&config);

    // Every draw lands on one of three seats; with this many draws at least
    // one is occupied, so booking all three must skip something.
    let (code, stdout, stderr) = run(isolated_command(
        &[
            "book",
            "--json",
            "--config",
            path.to_str().unwrap(),
            "-s",
            "A-left-1",
            "-s",
            "A-center-1",
            "-s",
            "A-right-1",
        ],
        dir.path(),
    ));

    assert!(
        stderr.contains("seat is already occupied"),
        "stdout: {stdout}\nstderr: {stderr}"
    );
    assert!(matches!(code, Some(0 | 1)));
}
