//! End-to-end tests for the `ansiqa stats` command.
//!
//! These tests verify the CLI behavior of the `stats` command by invoking
//! the binary directly and checking its output.

mod common;
use common::prelude::*;

fn two_roles() -> TestFixture {
    TestFixture::new()
        .with_role("web", roles::WEB_TASKS)
        .with_file("roles/web/vars/main.yml", "port: 80\nuser: www\n")
        .with_file("roles/web/defaults/main.yml", "workers: 4\n")
        .with_file("roles/web/README.md", "# web\n")
        .with_role("db", roles::ONE_TASK)
        .with_file("roles/db/vars/main.yml", "port: 5432\n")
}

#[test]
fn test_stats_help() {
    TestFixture::new()
        .command()
        .arg("stats")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show statistics about roles"))
        .stdout(predicate::str::contains("--dump-vars"))
        .stdout(predicate::str::contains("--list-templates"));
}

#[test]
fn test_stats_table() {
    two_roles()
        .command()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name  tasks  vars  defaults  README  meta  extra\n",
        ))
        .stdout(predicate::str::contains("db    1      1     0         none    none  none\n"))
        .stdout(predicate::str::contains("web   2      2     1         ok      none  none\n"));
}

#[test]
fn test_stats_rows_sorted_by_name() {
    let output = two_roles().command().arg("stats").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let db = stdout.find("\ndb ").unwrap();
    let web = stdout.find("\nweb ").unwrap();
    assert!(db < web);
}

#[test]
fn test_stats_role_filter() {
    two_roles()
        .command()
        .args(["stats", "-r", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web "))
        .stdout(predicate::str::contains("db ").not());
}

#[test]
fn test_stats_dump_vars_later_role_wins() {
    // Roles are scanned in name order, so `web` overrides `db`
    two_roles()
        .command()
        .args(["stats", "--dump-vars"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("port: 80"))
        .stdout(predicate::str::contains("user: www"))
        .stdout(predicate::str::contains("5432").not());
}

#[test]
fn test_stats_dump_defaults_empty() {
    TestFixture::new()
        .with_role("web", roles::ONE_TASK)
        .command()
        .args(["stats", "--dump-defaults"])
        .assert()
        .success()
        .stdout("---\n");
}

#[test]
fn test_stats_list_files_and_templates() {
    let fixture = TestFixture::new()
        .with_role("web", roles::ONE_TASK)
        .with_file("roles/web/files/site.conf", "server {}\n")
        .with_file("roles/web/files/certs/ca.pem", "pem\n")
        .with_file("roles/web/templates/index.html.j2", "<html/>\n");

    fixture
        .command()
        .args(["stats", "--list-files"])
        .assert()
        .success()
        .stdout(predicate::str::contains("site.conf"))
        .stdout(predicate::str::contains("ca.pem"))
        .stdout(predicate::str::contains("index.html.j2").not());

    fixture
        .command()
        .args(["stats", "--list-templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html.j2"))
        .stdout(predicate::str::contains("site.conf").not());
}

#[test]
fn test_stats_expands_includes() {
    TestFixture::new()
        .with_role("web", "---\n- include: extra.yml\n- name: last\n  ping:\n")
        .with_file("roles/web/tasks/extra.yml", roles::WEB_TASKS)
        .command()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("web   3 "));
}

#[test]
fn test_stats_path_flag() {
    let fixture = TestFixture::new().with_role("web", roles::ONE_TASK);
    let elsewhere = assert_fs::TempDir::new().unwrap();

    fixture
        .command()
        .env_remove("ANSIQA_PATH")
        .current_dir(elsewhere.path())
        .arg("--path")
        .arg(fixture.roles_path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("web "));
}

#[test]
fn test_stats_malformed_yaml() {
    TestFixture::new()
        .with_role("web", roles::ONE_TASK)
        .with_file("roles/web/vars/main.yml", roles::INVALID_YAML)
        .command()
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("main.yml"));
}

#[test]
fn test_stats_modes_are_exclusive() {
    TestFixture::new()
        .command()
        .args(["stats", "--dump-vars", "--list-files"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[cfg(unix)]
#[test]
fn test_stats_skips_unreadable_directory() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let fixture = TestFixture::new().with_role("web", roles::ONE_TASK);
    let locked = fixture.roles_path().join("secret_cache");
    fs::create_dir_all(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read it anyway
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = fixture.command().arg("stats").assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("web "))
        .stderr(predicate::str::contains("secret_cache"));
}
