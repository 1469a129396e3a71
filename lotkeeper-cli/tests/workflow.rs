//! End-to-end workflow tests for the lotkeeper CLI.
//!
//! These tests drive the binary through realistic register, admit,
//! reserve and depart flows and check exit codes and output.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_register_and_list_vehicles() {
    let env = TestEnv::new();
    env.register("AB-1234", "car", "resident");
    env.register("CD-5678", "motorcycle", "operator");

    env.command()
        .arg("vehicles")
        .assert()
        .success()
        .stdout(predicate::str::contains("AB-1234"))
        .stdout(predicate::str::contains("CD-5678"));
}

#[test]
fn test_register_duplicate_plate_exits_with_conflict() {
    let env = TestEnv::new();
    env.register_car("AB-1234");

    env.command()
        .arg("register")
        .arg("ab-1234")
        .arg("--category")
        .arg("car")
        .arg("--owner")
        .arg("Someone Else")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_admit_and_depart_flow() {
    let env = TestEnv::new();
    env.register_car("AB-1234");

    assert_eq!(env.admit("AB-1234"), "inside");

    env.command()
        .arg("depart")
        .arg("AB-1234")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fee due: 2000"));
}

#[test]
fn test_admit_unknown_vehicle_exits_with_not_found() {
    let env = TestEnv::new();

    env.command()
        .arg("admit")
        .arg("GHOST1")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_admit_twice_exits_with_conflict() {
    let env = TestEnv::new();
    env.register_car("AB-1234");
    env.admit("AB-1234");

    env.command()
        .arg("admit")
        .arg("AB-1234")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_depart_without_open_session_exits_with_not_found() {
    let env = TestEnv::new();
    env.register_car("AB-1234");

    env.command()
        .arg("depart")
        .arg("AB-1234")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_overflow_goes_outside_and_resident_can_reserve() {
    let env = TestEnv::new();
    env.register("FULL01", "car", "operator");
    env.register("LATE01", "car", "resident");

    // A one-slot lot: the first car takes the inside zone
    let mut first = env.command();
    first.env("LOTKEEPER_INSIDE_LIMIT", "1");
    first.arg("--quiet").arg("admit").arg("FULL01");
    first.assert().success().stdout(predicate::str::contains("inside"));

    // The next operator car overflows into the outside zone
    env.register("OUT001", "car", "operator");
    let mut overflow = env.command();
    overflow.env("LOTKEEPER_INSIDE_LIMIT", "1");
    overflow.arg("--quiet").arg("admit").arg("OUT001");
    overflow
        .assert()
        .success()
        .stdout(predicate::str::is_match("^outside\n$").unwrap());

    // Reserving while full succeeds for the resident
    let mut reserve = env.command();
    reserve.env("LOTKEEPER_INSIDE_LIMIT", "1");
    reserve.arg("reserve").arg("LATE01");
    reserve
        .assert()
        .success()
        .stdout(predicate::str::contains("Reserved an inside slot"));

    // The reservation admits the resident inside even though the lot is full
    let mut admit = env.command();
    admit.env("LOTKEEPER_INSIDE_LIMIT", "1");
    admit.arg("admit").arg("LATE01");
    admit
        .assert()
        .success()
        .stdout(predicate::str::contains("reservation redeemed"));
}

#[test]
fn test_reserve_with_free_capacity_exits_with_conflict() {
    let env = TestEnv::new();
    env.register_car("AB-1234");

    env.command()
        .arg("reserve")
        .arg("AB-1234")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_sweep_on_empty_database() {
    let env = TestEnv::new();

    env.command()
        .arg("sweep")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deactivated 0 expired reservation(s)"));
}

#[test]
fn test_occupancy_reports_fresh_counts() {
    let env = TestEnv::new();
    env.register_car("AB-1234");

    env.command()
        .arg("occupancy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total vehicles: 0"));

    env.admit("AB-1234");

    env.command()
        .arg("occupancy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total vehicles: 1"));
}

#[test]
fn test_occupancy_json_output() {
    let env = TestEnv::new();
    env.register_car("AB-1234");
    env.admit("AB-1234");

    env.command()
        .arg("occupancy")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"car_inside\": 1"));
}

#[test]
fn test_history_and_revenue() {
    let env = TestEnv::new();
    env.register_car("AB-1234");
    env.admit("AB-1234");

    env.command().arg("depart").arg("AB-1234").assert().success();

    env.command()
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("AB-1234"));

    let now = chrono::Utc::now();
    env.command()
        .arg("--quiet")
        .arg("revenue")
        .arg(now.format("%Y").to_string())
        .arg(now.format("%m").to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("2000"));
}

#[test]
fn test_disable_autoinit_without_database() {
    let env = TestEnv::new();

    env.command()
        .arg("--disable-autoinit")
        .arg("occupancy")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new();

    env.command()
        .arg("init")
        .arg("--with-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created database"));

    assert!(env.data_dir.join("lotkeeper.db").exists());
    assert!(env.data_dir.join("config.yaml").exists());
}
