use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{init_db, rci, setup_test_db};

#[test]
fn test_checkin_confirm_street_profile() {
    let db_path = setup_test_db("checkin_confirm_street");
    init_db("checkin_confirm_street", &db_path);

    rci("checkin_confirm_street")
        .args([
            "--db",
            &db_path,
            "checkin",
            "--profile",
            "street",
            "--lat",
            "-23.5558",
            "--lon",
            "-46.6623",
            "--street",
            "Rua Augusta",
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(contains("Localização Atual"))
        .stdout(contains("Rua Augusta"))
        .stdout(contains("Deseja confirmar o registro do ponto?"))
        .stdout(contains("Ponto registrado com sucesso!"))
        .stdout(is_match(r"(?m)^\d{2}-\d{2}-\d{4} \d{2}:\d{2}$").unwrap());
}

#[test]
fn test_checkin_confirm_basic_profile_has_seconds() {
    let db_path = setup_test_db("checkin_confirm_basic");
    init_db("checkin_confirm_basic", &db_path);

    rci("checkin_confirm_basic")
        .args([
            "--db", &db_path, "checkin", "-p", "basic", "--lat", "10", "--lon", "20", "--confirm",
        ])
        .assert()
        .success()
        .stdout(contains("10.000000, 20.000000"))
        .stdout(contains("Rua Augusta").not())
        .stdout(is_match(r"(?m)^\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2}$").unwrap());
}

#[test]
fn test_checkin_permission_denied() {
    let db_path = setup_test_db("checkin_denied");
    init_db("checkin_denied", &db_path);

    rci("checkin_denied")
        .args(["--db", &db_path, "checkin", "--deny", "--confirm"])
        .assert()
        .success()
        .stdout(contains("Permission to access location was denied"))
        .stdout(contains("Localização Atual").not())
        .stdout(contains("sucesso").not());

    rci("checkin_denied")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("permission (foreground)"));
}

#[test]
fn test_checkin_location_failure() {
    let db_path = setup_test_db("checkin_fail_fix");
    init_db("checkin_fail_fix", &db_path);

    rci("checkin_fail_fix")
        .args(["--db", &db_path, "checkin", "--fail-fix", "--confirm"])
        .assert()
        .success()
        .stdout(contains("Failed to get location"))
        .stdout(contains("Rua Augusta").not());
}

#[test]
fn test_geocode_failure_is_silent_but_logged() {
    let db_path = setup_test_db("checkin_fail_geocode");
    init_db("checkin_fail_geocode", &db_path);

    rci("checkin_fail_geocode")
        .args([
            "--db",
            &db_path,
            "checkin",
            "--profile",
            "street",
            "--fail-geocode",
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(contains("Ponto registrado com sucesso!"))
        .stdout(contains("geocod").not())
        .stderr(contains("geocod").not());

    rci("checkin_fail_geocode")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("geocode"))
        .stdout(contains("reverse geocoding failed"));
}

#[test]
fn test_checkin_cancel_creates_no_record() {
    let db_path = setup_test_db("checkin_cancel");
    init_db("checkin_cancel", &db_path);

    rci("checkin_cancel")
        .args(["--db", &db_path, "checkin", "--cancel"])
        .assert()
        .success()
        .stdout(contains("Deseja confirmar o registro do ponto?"))
        .stdout(contains("sucesso").not());
}

#[test]
fn test_checkin_interactive_via_stdin() {
    let db_path = setup_test_db("checkin_stdin");
    init_db("checkin_stdin", &db_path);

    rci("checkin_stdin")
        .args(["--db", &db_path, "checkin", "-p", "street"])
        .write_stdin("r\nx\nr\nc\nq\n")
        .assert()
        .success()
        .stdout(contains("[r] Registrar Ponto"))
        .stdout(contains("[c] Confirmar   [x] Cancelar"))
        .stdout(contains("Ponto registrado com sucesso!"));
}

#[test]
fn test_home_navigates_to_checkin() {
    let db_path = setup_test_db("home_nav");
    init_db("home_nav", &db_path);

    rci("home_nav")
        .args(["--db", &db_path, "home", "--confirm"])
        .write_stdin("m\n")
        .assert()
        .success()
        .stdout(contains("MARCAR PONTO"))
        .stdout(contains("Ponto registrado com sucesso!"));

    rci("home_nav")
        .args(["--db", &db_path, "home"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("Obtendo localização").not());
}

#[test]
fn test_invalid_profile_fails() {
    let db_path = setup_test_db("checkin_bad_profile");

    rci("checkin_bad_profile")
        .args(["--db", &db_path, "checkin", "--profile", "fancy"])
        .assert()
        .failure()
        .stderr(contains("Invalid screen profile"));
}
