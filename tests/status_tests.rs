mod common;
use common::{init_db_with_schedule, rst, setup_test_db};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_status_before_school() {
    let db_path = setup_test_db("status_before_school");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "status", "--at", "08:30", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("School hasn't started"))
        .stdout(contains("First class: 08:40"))
        .stdout(contains("10:00")); // 600 s until the bell
}

#[test]
fn test_status_active_period() {
    let db_path = setup_test_db("status_active_period");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "status", "--at", "09:20", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Period 1"))
        .stdout(contains("LIVE"))
        .stdout(contains("09:00 - 09:50"))
        .stdout(contains("30:00"))
        .stdout(contains("40%"));
}

#[test]
fn test_status_gap_between_periods() {
    let db_path = setup_test_db("status_gap");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "status", "--at", "09:55", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Break time"))
        .stdout(contains("Next: Period 2"))
        .stdout(contains("5:00"));
}

#[test]
fn test_status_after_school() {
    let db_path = setup_test_db("status_after_school");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "status", "--at", "12:00", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("School's over for today!"))
        .stdout(contains("Good work today!"))
        .stdout(contains("--:--"));
}

#[test]
fn test_status_no_schedule() {
    let db_path = setup_test_db("status_no_schedule");
    init_db_with_schedule(&db_path);

    // Sunday holds nothing
    rst()
        .args(["--db", &db_path, "status", "--at", "10:00", "--day", "0"])
        .assert()
        .success()
        .stdout(contains("No schedule for today"))
        .stdout(contains("Holiday / nothing planned"));
}

#[test]
fn test_status_at_accepts_seconds() {
    let db_path = setup_test_db("status_at_seconds");
    init_db_with_schedule(&db_path);

    // 30 seconds before the end of Period 1
    rst()
        .args(["--db", &db_path, "status", "--at", "09:49:30", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Period 1"))
        .stdout(contains("0:30"));
}

#[test]
fn test_status_at_accepts_loose_input() {
    let db_path = setup_test_db("status_at_loose");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "status", "--at", "920", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Period 1"))
        .stdout(contains("LIVE"));
}

#[test]
fn test_status_rejects_garbage_time() {
    let db_path = setup_test_db("status_bad_time");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "status", "--at", "??", "--day", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn test_status_json_fields() {
    let db_path = setup_test_db("status_json_fields");
    init_db_with_schedule(&db_path);

    rst()
        .args([
            "--db", &db_path, "status", "--at", "09:20", "--day", "1", "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"status\": \"active\""))
        .stdout(contains("\"remainingSeconds\": 1800"))
        .stdout(contains("\"totalDurationSeconds\": 3000"))
        .stdout(contains("\"elapsedSeconds\": 1200"))
        .stdout(contains("\"dayName\": \"Monday\""))
        .stdout(contains("\"startTime\": \"09:00\""))
        .stdout(contains("\"type\": \"CLASS\""));
}

#[test]
fn test_status_json_absent_periods_are_null() {
    let db_path = setup_test_db("status_json_nulls");
    init_db_with_schedule(&db_path);

    rst()
        .args([
            "--db", &db_path, "status", "--at", "12:00", "--day", "1", "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"status\": \"after_school\""))
        .stdout(contains("\"currentPeriod\": null"))
        .stdout(contains("\"nextPeriod\": null"))
        .stdout(contains("LIVE").not());
}

#[test]
fn test_status_json_empty_day() {
    let db_path = setup_test_db("status_json_empty_day");
    init_db_with_schedule(&db_path);

    rst()
        .args([
            "--db", &db_path, "status", "--at", "10:00", "--day", "6", "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"status\": \"no_schedule\""))
        .stdout(contains("\"totalDurationSeconds\": 1"));
}
