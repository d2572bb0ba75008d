mod common;
use common::{init_db_with_schedule, rst, setup_test_db};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rst()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_init_is_repeatable() {
    let db_path = setup_test_db("init_is_repeatable");

    rst()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // a second init must not fail on existing tables
    rst()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
}

#[test]
fn test_init_force_recreates_database() {
    let db_path = setup_test_db("init_force_recreates");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "--test", "init", "--force"])
        .assert()
        .success()
        .stdout(contains("Existing database removed"));

    rst()
        .args(["--db", &db_path, "show", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("No periods for Monday."));
}

#[test]
fn test_add_and_show_day() {
    let db_path = setup_test_db("add_and_show_day");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "show", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("Homeroom"))
        .stdout(contains("Period 1"))
        .stdout(contains("09:00"))
        .stdout(contains("50 min"));
}

#[test]
fn test_show_accepts_day_names() {
    let db_path = setup_test_db("show_accepts_day_names");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "show", "--day", "mon"])
        .assert()
        .success()
        .stdout(contains("Homeroom"));
}

#[test]
fn test_show_empty_day() {
    let db_path = setup_test_db("show_empty_day");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "show", "--day", "0"])
        .assert()
        .success()
        .stdout(contains("No periods for Sunday."));
}

#[test]
fn test_show_week_lists_only_filled_days() {
    let db_path = setup_test_db("show_week");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "show", "--week"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("Homeroom"))
        .stdout(contains("Tuesday").not());
}

#[test]
fn test_add_continues_the_day() {
    let db_path = setup_test_db("add_continues_the_day");

    rst()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // an empty day starts with Period 1 at 09:00
    rst()
        .args(["--db", &db_path, "add", "--day", "2"])
        .assert()
        .success()
        .stdout(contains("Added 'Period 1' (09:00 - 09:50) to Tuesday"));

    // a class is followed by a break
    rst()
        .args(["--db", &db_path, "add", "--day", "2"])
        .assert()
        .success()
        .stdout(contains("Added 'Break' (09:50 - 10:00) to Tuesday"));

    // and the break by the next numbered class
    rst()
        .args(["--db", &db_path, "add", "--day", "2"])
        .assert()
        .success()
        .stdout(contains("Added 'Period 2' (10:00 - 10:50) to Tuesday"));
}

#[test]
fn test_add_normalizes_loose_time_input() {
    let db_path = setup_test_db("add_loose_time_input");

    rst()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rst()
        .args([
            "--db", &db_path, "add", "--day", "3", "--name", "Math", "--start", "930", "--end",
            "1015", "--kind", "class",
        ])
        .assert()
        .success()
        .stdout(contains("Added 'Math' (09:30 - 10:15) to Wednesday"));
}

#[test]
fn test_add_rejects_unknown_kind() {
    let db_path = setup_test_db("add_rejects_unknown_kind");

    rst()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rst()
        .args([
            "--db", &db_path, "add", "--day", "1", "--name", "X", "--kind", "recess",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid period kind"));
}

#[test]
fn test_del_one_period() {
    let db_path = setup_test_db("del_one_period");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "del", "--day", "1", "--id", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Period 1 on Monday has been deleted."));

    rst()
        .args(["--db", &db_path, "show", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Period 1").and(contains("Homeroom").not()));
}

#[test]
fn test_del_missing_period_fails() {
    let db_path = setup_test_db("del_missing_period");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "del", "--day", "1", "--id", "99", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No period with id 99"));
}

#[test]
fn test_del_all_clears_the_day() {
    let db_path = setup_test_db("del_all_clears_the_day");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "del", "--day", "1", "--all", "--yes"])
        .assert()
        .success()
        .stdout(contains("All 3 periods on Monday have been deleted."));

    rst()
        .args(["--db", &db_path, "show", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("No periods for Monday."));
}

#[test]
fn test_del_without_target_fails() {
    let db_path = setup_test_db("del_without_target");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "del", "--day", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("pass --id <ID> or --all"));
}

#[test]
fn test_del_prompt_can_cancel() {
    let db_path = setup_test_db("del_prompt_can_cancel");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "del", "--day", "1", "--all"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    // nothing was deleted
    rst()
        .args(["--db", &db_path, "show", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Homeroom"));
}

#[test]
fn test_copy_day_onto_default_targets() {
    let db_path = setup_test_db("copy_day_defaults");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "copy", "--from", "mon"])
        .assert()
        .success()
        .stdout(contains("Copied Monday onto: Tuesday, Wednesday, Thursday, Friday"));

    rst()
        .args(["--db", &db_path, "show", "--day", "5"])
        .assert()
        .success()
        .stdout(contains("Homeroom"))
        .stdout(contains("Period 2"));
}

#[test]
fn test_copy_day_onto_explicit_targets() {
    let db_path = setup_test_db("copy_day_explicit");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "copy", "--from", "1", "--to", "2,4"])
        .assert()
        .success()
        .stdout(contains("Copied Monday onto: Tuesday, Thursday"));

    // day 3 was not a target
    rst()
        .args(["--db", &db_path, "show", "--day", "3"])
        .assert()
        .success()
        .stdout(contains("No periods for Wednesday."));
}

#[test]
fn test_copy_onto_itself_does_nothing() {
    let db_path = setup_test_db("copy_onto_itself");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "copy", "--from", "1", "--to", "1"])
        .assert()
        .success()
        .stdout(contains("No target days to copy onto."));
}

#[test]
fn test_template_installs_stock_day() {
    let db_path = setup_test_db("template_installs");

    rst()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rst()
        .args(["--db", &db_path, "template", "--level", "MIDDLE", "--days", "1"])
        .assert()
        .success()
        .stdout(contains("Installed the MIDDLE template (4 periods) on: Monday"));

    // middle school means 45-minute classes
    rst()
        .args(["--db", &db_path, "show", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Homeroom"))
        .stdout(contains("08:40"))
        .stdout(contains("09:45"))
        .stdout(contains("Period 2"));
}

#[test]
fn test_template_replaces_existing_day() {
    let db_path = setup_test_db("template_replaces");
    init_db_with_schedule(&db_path);

    rst()
        .args([
            "--db", &db_path, "add", "--day", "1", "--name", "Custom thing",
        ])
        .assert()
        .success();

    rst()
        .args(["--db", &db_path, "template", "--level", "HIGH", "--days", "1"])
        .assert()
        .success();

    rst()
        .args(["--db", &db_path, "show", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Period 1"))
        .stdout(contains("Custom thing").not());
}

#[test]
fn test_config_print_shows_current_settings() {
    let db_path = setup_test_db("config_print");

    rst()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("time_format:"))
        .stdout(contains("school_level:"))
        .stdout(contains("opacity:"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db_with_schedule(&db_path);

    rst()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}
