//! Integration tests for gencache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const EXAMPLE: &str = r#"activeProfile: default
profiles:
  default:
    images:
      web:
        tag: v1
"#;

    /// Command running inside `dir`, with no inherited overrides
    fn gencache(dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("gencache");
        cmd.current_dir(dir)
            .env_remove("GENCACHE_FILE")
            .env_remove("GENCACHE_PROFILE")
            .env("CI", "1");
        cmd
    }

    fn write_example(dir: &Path) {
        let devspace = dir.join(".devspace");
        fs::create_dir_all(&devspace).unwrap();
        fs::write(devspace.join("generated.yaml"), EXAMPLE).unwrap();
    }

    fn read_cache(dir: &Path) -> String {
        fs::read_to_string(dir.join(".devspace").join("generated.yaml")).unwrap()
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        gencache(temp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("build and deploy")
                    .or(predicate::str::contains("Generated Project Cache")),
            );
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        gencache(temp.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("gencache"));
    }

    #[test]
    fn path_is_project_relative() {
        let temp = TempDir::new().unwrap();
        gencache(temp.path())
            .arg("path")
            .assert()
            .success()
            .stdout(
                predicate::str::contains(".devspace")
                    .and(predicate::str::contains("generated.yaml")),
            );
    }

    #[test]
    fn show_missing_cache_does_not_create_file() {
        let temp = TempDir::new().unwrap();
        gencache(temp.path()).arg("show").assert().success();
        assert!(!temp.path().join(".devspace").exists());
    }

    #[test]
    fn image_reads_existing_entry() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path());

        gencache(temp.path())
            .args(["image", "web"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tag: v1"));
    }

    #[test]
    fn deployment_set_persists_under_active_profile() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path());

        gencache(temp.path())
            .args(["deployment", "api", "--set", "helmChartHash=c0ffee"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Updated deployment api"));

        let content = read_cache(temp.path());
        assert!(content.contains("deployments:"));
        assert!(content.contains("api:"));
        assert!(content.contains("helmChartHash: c0ffee"));
        assert!(content.contains("tag: v1"));
    }

    #[test]
    fn profile_override_selects_other_profile() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path());

        gencache(temp.path())
            .args(["--profile", "staging", "image", "web", "-s", "tag=v9"])
            .assert()
            .success();

        let content = read_cache(temp.path());
        assert!(content.contains("staging:"));
        assert!(content.contains("tag: v9"));
        assert!(content.contains("activeProfile: default"));
    }

    #[test]
    fn profile_from_environment() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path());

        gencache(temp.path())
            .env("GENCACHE_PROFILE", "qa")
            .arg("profile")
            .assert()
            .success()
            .stdout(predicate::str::contains("Profile: qa (override)"));
    }

    #[test]
    fn profile_use_switches_active() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path());

        gencache(temp.path())
            .args(["profile", "use", "prod"])
            .assert()
            .success();

        assert!(read_cache(temp.path()).contains("activeProfile: prod"));
        gencache(temp.path())
            .arg("profile")
            .assert()
            .success()
            .stdout(predicate::str::contains("Profile: prod (active)"));
    }

    #[test]
    fn profile_reset_missing_fails() {
        let temp = TempDir::new().unwrap();
        gencache(temp.path())
            .args(["profile", "reset", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Profile not found"));
    }

    #[test]
    fn profile_reset_clears_other_profile() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("g.yaml");
        fs::write(
            &file,
            "activeProfile: default\nprofiles:\n  default: {}\n  staging:\n    images:\n      web:\n        tag: v1\n",
        )
        .unwrap();

        gencache(temp.path())
            .arg("-f")
            .arg(&file)
            .args(["profile", "reset", "staging"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cleared cached state of profile staging"));

        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("staging: {}"));
        assert!(content.contains("default: {}"));
        assert!(!content.contains("tag: v1"));
    }

    #[test]
    fn profile_reset_active_under_override_keeps_it() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path());

        gencache(temp.path())
            .args(["--profile", "qa", "profile", "reset", "default"])
            .assert()
            .success();

        let content = read_cache(temp.path());
        assert!(content.contains("default: {}"));
        assert!(content.contains("qa: {}"));
        assert!(!content.contains("tag: v1"));
    }

    #[test]
    fn unknown_field_fails_without_writing() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path());

        gencache(temp.path())
            .args(["image", "web", "--set", "helmChartHash=x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown image field"));

        assert_eq!(read_cache(temp.path()), EXAMPLE);
    }

    #[test]
    fn malformed_cache_reports_decode_error() {
        let temp = TempDir::new().unwrap();
        let devspace = temp.path().join(".devspace");
        fs::create_dir_all(&devspace).unwrap();
        fs::write(devspace.join("generated.yaml"), "profiles: [broken").unwrap();

        gencache(temp.path())
            .arg("show")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Malformed cache file"));
    }

    #[test]
    fn var_roundtrip() {
        let temp = TempDir::new().unwrap();

        gencache(temp.path())
            .args(["var", "set", "REGISTRY", "ghcr.io"])
            .assert()
            .success();
        gencache(temp.path())
            .args(["var", "get", "REGISTRY"])
            .assert()
            .success()
            .stdout("ghcr.io\n");
        gencache(temp.path())
            .args(["var", "unset", "REGISTRY"])
            .assert()
            .success();
        gencache(temp.path())
            .args(["var", "get", "REGISTRY"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Variable not set"));
    }

    #[test]
    fn explicit_file_flag() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom").join("cache.yaml");

        gencache(temp.path())
            .arg("--file")
            .arg(&file)
            .args(["dependency", "set", "backend", "1.4.0"])
            .assert()
            .success();

        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("backend"));
        assert!(content.contains("1.4.0"));
        assert!(!temp.path().join(".devspace").exists());
    }

    #[test]
    fn context_set_and_show() {
        let temp = TempDir::new().unwrap();

        gencache(temp.path())
            .args(["context", "set", "-n", "dev", "-c", "kind-dev"])
            .assert()
            .success();
        gencache(temp.path())
            .arg("context")
            .assert()
            .success()
            .stdout(predicate::str::contains("kind-dev"));
    }

    #[test]
    fn hash_prints_sha256() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("empty"), "").unwrap();

        gencache(temp.path())
            .args(["hash", "empty"])
            .assert()
            .success()
            .stdout("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n");
    }

    #[test]
    fn show_json() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path());

        gencache(temp.path())
            .args(["show", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"activeProfile\": \"default\""));
    }
}
