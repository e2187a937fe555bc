//! CLI Integration Tests
//!
//! These tests run the `pokeholo` binary end-to-end against a temporary
//! data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pokeholo").expect("Failed to find pokeholo binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

fn login(data_dir: &TempDir) {
    cli_cmd(data_dir)
        .args(["login", "-u", "admin", "-p", "123456"])
        .assert()
        .success();
}

// ============================================================================
// Catalog Command Tests
// ============================================================================

#[test]
fn test_sets_lists_catalog_in_order() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir).arg("sets").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Card sets (4):"));

    let positions: Vec<usize> = [
        "Base Set Origins",
        "Jungle Expansion",
        "Fossil Excavation",
        "Team Rocket",
    ]
    .iter()
    .map(|name| stdout.find(name).expect("set missing from output"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_sets_shows_release_dates() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Released: January 9, 1999"))
        .stdout(predicate::str::contains("Cards: 24 / 102"));
}

#[test]
fn test_set_shows_cards() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["set", "jungle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jungle Expansion (Original Series)"))
        .stdout(predicate::str::contains("24 / 64 Collected"))
        .stdout(predicate::str::contains("jungle-1"))
        .stdout(predicate::str::contains("jungle-24"))
        .stdout(predicate::str::contains("Unknown set").not());
}

#[test]
fn test_unknown_set_falls_back_to_first() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["set", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown set 'does-not-exist', showing base-set"))
        .stdout(predicate::str::contains("Base Set Origins"));
}

#[test]
fn test_card_shows_details() {
    let data_dir = TempDir::new().unwrap();

    // Card 7 is index 6: Eevee, and every third card is Holofoil
    cli_cmd(&data_dir)
        .args(["card", "fossil-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Eevee"))
        .stdout(predicate::str::contains("Types: Normal"))
        .stdout(predicate::str::contains("Rarity: Holofoil"))
        .stdout(predicate::str::contains("Number: 7 / fossil"));
}

#[test]
fn test_card_joins_multiple_types() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["card", "base-set-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Venusaur"))
        .stdout(predicate::str::contains("Types: Grass / Poison"))
        .stdout(predicate::str::contains("Rarity: Common"));
}

#[test]
fn test_unknown_card_falls_back_to_first() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["card", "nope-99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing base-set-1"))
        .stdout(predicate::str::contains("Charizard"));
}

// ============================================================================
// Session Command Tests
// ============================================================================

#[test]
fn test_whoami_starts_logged_out() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_login_persists_across_invocations() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["login", "-u", "admin", "-p", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin"));

    cli_cmd(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin (admin)"));

    assert!(data_dir.path().join("storage.json").exists());
}

#[test]
fn test_login_wrong_password_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["login", "-u", "admin", "-p", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials. Hint: admin / 123456"));

    cli_cmd(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_login_wrong_username_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["login", "-u", "ash", "-p", "123456"])
        .assert()
        .failure();
}

#[test]
fn test_logout_clears_session() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    cli_cmd(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_logout_when_logged_out() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_corrupt_storage_reads_as_logged_out() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("storage.json"), "{ not json").unwrap();

    cli_cmd(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));

    // Logging in replaces the unreadable file
    login(&data_dir);
    cli_cmd(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin"));
}

// ============================================================================
// Navigation Guard Tests
// ============================================================================

#[test]
fn test_open_protected_path_redirects_to_login() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["open", "/set/jungle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("redirect to /login (returns to /set/jungle"));
}

#[test]
fn test_open_login_when_logged_out_shows_form() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["open", "/login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/login -> login form"));
}

#[test]
fn test_open_when_logged_in() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["open", "/card/jungle-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("card detail: Pikachu (jungle-4)"));

    cli_cmd(&data_dir)
        .args(["open", "/login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("redirect to / (already logged in)"));

    cli_cmd(&data_dir)
        .args(["open", "/somewhere/else"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collection list (unknown path)"));
}

// ============================================================================
// Tilt Command Tests
// ============================================================================

#[test]
fn test_tilt_center_is_flat() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["tilt", "--width", "300", "--height", "420", "--x", "150", "--y", "210"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rotateX: 0.00deg"))
        .stdout(predicate::str::contains("rotateY: 0.00deg"))
        .stdout(predicate::str::contains("glare: 50.00% 50.00%"))
        .stdout(predicate::str::contains("opacity: 1"));
}

#[test]
fn test_tilt_top_left_corner() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["tilt", "--width", "300", "--height", "420", "--x", "0", "--y", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rotateX: 25.00deg"))
        .stdout(predicate::str::contains("rotateY: -25.00deg"))
        .stdout(predicate::str::contains("glare: 0.00% 0.00%"));
}

#[test]
fn test_tilt_rejects_empty_surface() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["tilt", "--width", "0", "--height", "420", "--x", "0", "--y", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Card size must be positive"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_missing_subcommand_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir).assert().failure();
}

#[test]
fn test_help_lists_commands() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sets"))
        .stdout(predicate::str::contains("whoami"))
        .stdout(predicate::str::contains("tilt"));
}
