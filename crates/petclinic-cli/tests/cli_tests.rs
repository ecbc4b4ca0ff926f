//! CLI integration tests
//!
//! Each test writes a seed fixture into a scratch directory and runs the
//! `petclinic` binary against it.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const SEED: &str = r#"
schema_version: 0
pet_types: [Dog, Cat]
specialities: [radiology, surgery]
vets:
  - first_name: James
    last_name: Carter
  - first_name: Helen
    last_name: Leary
    specialities: [radiology]
owners:
  - first_name: Joe
    last_name: Buck
    city: Madison
    pets:
      - name: Rosco
        pet_type: Dog
        visits:
          - date: 2024-01-10
            description: rabies shot
  - first_name: Jim
    last_name: Buck2
    city: Sun Prairie
  - first_name: Sam
    last_name: Axe
    city: Miami
"#;

fn write_seed(temp_dir: &TempDir) -> PathBuf {
    let seed_path = temp_dir.path().join("clinic.yaml");
    fs::write(&seed_path, SEED).unwrap();
    seed_path
}

fn run(temp_dir: &TempDir, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_petclinic");
    Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_find_single_owner_redirects() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        &temp_dir,
        &["--seed", seed.to_str().unwrap(), "owners", "find", "--last-name", "axe"],
    );

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = stdout(&output);
    assert!(stdout.contains("view: redirect:/owners/3"), "stdout: {}", stdout);
    assert!(stdout.contains("Sam Axe"));
}

#[test]
fn test_find_multiple_owners_lists_them() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        &temp_dir,
        &["--seed", seed.to_str().unwrap(), "owners", "find", "--last-name", "Buck"],
    );

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("view: owners/ownersList"));
    assert!(stdout.contains("Joe Buck"));
    assert!(stdout.contains("Jim Buck2"));
    assert!(!stdout.contains("Sam Axe"));
}

#[test]
fn test_find_without_match_shows_search_form() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        &temp_dir,
        &["--seed", seed.to_str().unwrap(), "owners", "find", "--last-name", "DontFindMe"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("view: owners/findOwners"));
}

#[test]
fn test_find_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        &temp_dir,
        &["--seed", seed.to_str().unwrap(), "--json", "owners", "find"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["view"], "owners/ownersList");
    assert_eq!(value["owners"].as_array().unwrap().len(), 3);
}

#[test]
fn test_show_owner_with_pets_and_visits() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(&temp_dir, &["--seed", seed.to_str().unwrap(), "owners", "show", "1"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Joe Buck"));
    assert!(stdout.contains("Rosco"));
    assert!(stdout.contains("Dog"));
    assert!(stdout.contains("rabies shot"));
}

#[test]
fn test_show_missing_owner_fails() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(&temp_dir, &["--seed", seed.to_str().unwrap(), "owners", "show", "99"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Owner 99 not found"));
}

#[test]
fn test_new_visit_redirects_to_owner() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        &temp_dir,
        &[
            "--seed",
            seed.to_str().unwrap(),
            "visits",
            "new",
            "--pet",
            "1",
            "--description",
            "checkup",
        ],
    );

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = stdout(&output);
    assert!(stdout.contains("view: redirect:/owners/1"));
    assert!(stdout.contains("visit 2\tRosco"));
}

#[test]
fn test_new_visit_with_blank_description_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(
        &temp_dir,
        &[
            "--seed",
            seed.to_str().unwrap(),
            "visits",
            "new",
            "--pet",
            "1",
            "--description",
            " ",
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pets/createOrUpdateVisitForm"), "stderr: {}", stderr);
}

#[test]
fn test_vets_list_shows_specialities() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(&temp_dir, &["--seed", seed.to_str().unwrap(), "vets", "list"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("1\tJames Carter\tnone"));
    assert!(stdout.contains("2\tHelen Leary\tradiology"));
}

#[test]
fn test_config_supplies_seed_path() {
    let temp_dir = TempDir::new().unwrap();
    write_seed(&temp_dir);
    let config_path = temp_dir.path().join("clinic.toml");
    fs::write(
        &config_path,
        "[logging]\nprofile = \"test\"\n\n[seed]\npath = \"clinic.yaml\"\n",
    )
    .unwrap();

    let output = run(
        &temp_dir,
        &["--config", config_path.to_str().unwrap(), "vets", "list"],
    );

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("Helen Leary"));
}

#[test]
fn test_invalid_seed_fails_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("bad.yaml");
    fs::write(&seed_path, "schema_version: 7\n").unwrap();

    let output = run(&temp_dir, &["--seed", seed_path.to_str().unwrap(), "vets", "list"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}
