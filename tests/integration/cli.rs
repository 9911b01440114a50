use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{TestSite, with_chunk_tags};
use vite_tags::test_utils::ManifestFixture;

fn vite_tags(site: &TestSite) -> Command {
    let mut cmd = Command::cargo_bin("vite-tags").unwrap();
    cmd.current_dir(site.root())
        .env("NO_COLOR", "1")
        .env_remove("VITE_DEV_SERVER_URL")
        .env_remove("VITE_MANIFEST_PATH")
        .env_remove("VITE_ENVIRONMENT")
        .env_remove("VITE_TAGS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Production render replaces the directive with the ordered tags
#[test]
fn test_render_production() {
    let site = TestSite::new().unwrap();
    site.write_manifest("dist/manifest.json", &ManifestFixture::with_chunk()).unwrap();
    site.write("layout.html", "<head>\n  @vite('main.js')\n</head>\n").unwrap();

    let output = site.run_vite_tags(&["render", "layout.html", "--environment", "production"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert_eq!(output.stdout, format!("<head>\n  {}\n</head>\n", with_chunk_tags("")));
}

/// Render to a file with a theme chain and public base
#[test]
fn test_render_to_file_with_theme() {
    let site = TestSite::new().unwrap();
    site.write_manifest("themes/site/dist/.vite/manifest.json", &ManifestFixture::with_chunk()).unwrap();
    site.write("layout.html", "@vite(\"main.js\");").unwrap();

    let output = site
        .run_vite_tags(&[
            "render",
            "layout.html",
            "-o",
            "out.html",
            "--environment",
            "production",
            "--theme",
            "site",
            "--public-base",
            "/themes/site",
        ])
        .unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.is_empty());
    assert_eq!(site.read("out.html").unwrap(), with_chunk_tags("/themes/site"));
}

/// Development render reads from stdin and never needs a manifest
#[test]
fn test_render_development_from_stdin() {
    let site = TestSite::new().unwrap();

    vite_tags(&site)
        .args(["render", "-", "--dev-server-url", "http://127.0.0.1:3000/"])
        .write_stdin("@viteReactRefresh\n@vite(['src/main.tsx'])")
        .assert()
        .success()
        .stdout(predicate::str::contains("import RefreshRuntime from 'http://127.0.0.1:3000/@react-refresh'"))
        .stdout(predicate::str::contains(
            r#"<script type="module" src="http://127.0.0.1:3000/@vite/client"></script>"#,
        ))
        .stdout(predicate::str::contains(
            r#"<script type="module" src="http://127.0.0.1:3000/src/main.tsx"></script>"#,
        ))
        .stderr(predicate::str::is_empty());
}

/// A missing manifest still renders, logging one error
#[test]
fn test_render_without_manifest() {
    let site = TestSite::new().unwrap();
    site.write("layout.html", "a@vite('main.js')b@vite('other.js')c").unwrap();

    let output = site.run_vite_tags(&["render", "layout.html", "--environment", "production"]).unwrap();
    assert!(output.success);
    assert_eq!(output.stdout, "abc\n");
    assert_eq!(output.stderr.matches("Could not load the Vite manifest").count(), 1, "{}", output.stderr);
}

/// Missing template is a user-facing error
#[test]
fn test_render_missing_template() {
    let site = TestSite::new().unwrap();
    let output = site.run_vite_tags(&["render", "nope.html"]).unwrap();
    assert!(!output.success);
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("error:"));
    assert!(output.stderr.contains("nope.html"));
}

/// Invalid environment values are rejected with a suggestion
#[test]
fn test_invalid_environment_variable() {
    let site = TestSite::new().unwrap();
    site.write("layout.html", "@vite('main.js')").unwrap();

    let output = site.run_vite_tags_with_env(&["render", "layout.html"], &[("VITE_ENVIRONMENT", "staging")]).unwrap();
    assert!(!output.success);
    assert!(output.stderr.contains("Invalid environment 'staging'"), "{}", output.stderr);
    assert!(output.stderr.contains("suggestion:"));
}

#[test]
fn test_resolve_text_and_json() {
    let site = TestSite::new().unwrap();
    site.write_manifest("dist/manifest.json", &ManifestFixture::multi_entry()).unwrap();

    let output = site
        .run_vite_tags(&["resolve", "b.js", "--environment", "production", "--out-dir", "/static/"])
        .unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        "<link rel=\"stylesheet\" href=\"/static/assets/vendor.444.css\">\n\
         <script type=\"module\" src=\"/static/assets/b.222.js\"></script>\n\
         <link rel=\"modulepreload\" href=\"/static/assets/vendor.444.js\">\n"
    );

    let output = site
        .run_vite_tags(&["resolve", "a.js", "--environment", "production", "--format", "json"])
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let assets = json.as_array().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0]["kind"], "stylesheet");
    assert_eq!(assets[1]["kind"], "script");
    assert_eq!(assets[1]["path"], "/dist/assets/a.111.js");
    assert_eq!(assets[1]["html"], r#"<script type="module" src="/dist/assets/a.111.js"></script>"#);
}

#[test]
fn test_resolve_with_options_json() {
    let site = TestSite::new().unwrap();
    site.write_manifest("dist/manifest.json", &ManifestFixture::multi_entry()).unwrap();

    vite_tags(&site)
        .args([
            "resolve",
            "style.scss",
            "--environment",
            "production",
            "--options",
            r#"{"linkTagAttributes": {"media": "print", "crossorigin": true}}"#,
        ])
        .assert()
        .success()
        .stdout("<link rel=\"stylesheet\" href=\"/dist/assets/style.333.css\" media=\"print\" crossorigin>\n");
}

/// Options must be an object; arrays are not read positionally
#[test]
fn test_resolve_rejects_array_options() {
    let site = TestSite::new().unwrap();
    site.write_manifest("dist/manifest.json", &ManifestFixture::multi_entry()).unwrap();

    vite_tags(&site)
        .args(["resolve", "a.js", "--environment", "production", "--options", r#"["build"]"#])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid --options JSON"));
}

#[test]
fn test_check_reports_malformed_directives() {
    let site = TestSite::new().unwrap();
    site.write("layout.html", "<head>\n@vite('a.js')\n@vite(a.js)\n@vite/client\n</head>").unwrap();

    vite_tags(&site)
        .args(["check", "layout.html"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("2: a.js"))
        .stdout(predicate::str::contains("3: Malformed directive"))
        .stdout(predicate::str::contains("2 directive(s), 1 malformed"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn test_check_json_for_clean_template() {
    let site = TestSite::new().unwrap();
    site.write("layout.html", "@vite(['a.js', 'b.css'], {\"outDir\": \"build\"})").unwrap();

    let output = site.run_vite_tags(&["check", "layout.html", "--format", "json"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);

    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(json[0]["line"], 1);
    assert_eq!(json[0]["directive"]["entrypoints"], serde_json::json!(["a.js", "b.css"]));
    assert_eq!(json[0]["directive"]["options"]["outDir"], "build");
    assert_eq!(json[0]["directive"]["span"]["start"], 0);
}

#[test]
fn test_env_defaults_and_overrides() {
    let site = TestSite::new().unwrap();

    let output = site.run_vite_tags(&["env"]).unwrap();
    assert!(output.success);
    assert_eq!(output.stdout, "VITE_ENVIRONMENT=development\nVITE_DEV_SERVER_URL=http://localhost:5173\n");

    let output = site
        .run_vite_tags_with_env(
            &["env", "--format", "json"],
            &[("VITE_ENVIRONMENT", "production"), ("VITE_DEV_SERVER_URL", "http://vite.test:5173")],
        )
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(json["VITE_ENVIRONMENT"], "production");
    assert_eq!(json["VITE_DEV_SERVER_URL"], "http://vite.test:5173");
}

/// Layering: config file < environment < flags
#[test]
fn test_config_file_layering() {
    let site = TestSite::new().unwrap();
    site.write("vite-tags.toml", "environment = \"production\"\ndev_server_url = \"http://file.test\"\n").unwrap();

    let output = site.run_vite_tags(&["env"]).unwrap();
    assert_eq!(output.stdout, "VITE_ENVIRONMENT=production\nVITE_DEV_SERVER_URL=http://file.test\n");

    let output = site.run_vite_tags_with_env(&["env"], &[("VITE_DEV_SERVER_URL", "http://env.test")]).unwrap();
    assert_eq!(output.stdout, "VITE_ENVIRONMENT=production\nVITE_DEV_SERVER_URL=http://env.test\n");

    let output = site
        .run_vite_tags_with_env(
            &["env", "--environment", "development", "--dev-server-url", "http://flag.test"],
            &[("VITE_DEV_SERVER_URL", "http://env.test")],
        )
        .unwrap();
    assert_eq!(output.stdout, "VITE_ENVIRONMENT=development\nVITE_DEV_SERVER_URL=http://flag.test\n");
}

#[test]
fn test_invalid_config_file() {
    let site = TestSite::new().unwrap();
    site.write("custom.toml", "environment = [\n").unwrap();

    let output = site.run_vite_tags(&["--config", "custom.toml", "env"]).unwrap();
    assert!(!output.success);
    assert!(output.stderr.contains("Check the TOML syntax"), "{}", output.stderr);
}
