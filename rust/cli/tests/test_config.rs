use serde_json::Value;
use serial_test::serial;

const VARS: [&str; 4] = [
    "TRICKTABLE_CONFIG",
    "TRICKTABLE_SEED",
    "TRICKTABLE_LEVEL",
    "TRICKTABLE_LEVEL_CARDS_SPECIAL",
];

fn clear_env() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["tricktable"];
    argv.extend_from_slice(args);
    let code = tricktable_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn cfg_json() -> Value {
    let (code, out, err) = run(&["cfg"]);
    assert_eq!(code, 0, "stderr: {}", err);
    serde_json::from_str(&out).expect("cfg prints JSON")
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["level"]["value"].as_str(), Some("2"));
    assert_eq!(json["level"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["level_cards_special"]["value"].as_bool(), Some(true));
    assert_eq!(json["level_cards_special"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tricktable.toml");
    std::fs::write(&path, "seed = 456\nlevel = \"K\"\nlevel_cards_special = false\n").unwrap();
    set_env("TRICKTABLE_CONFIG", path.to_str().unwrap());

    let json = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json["level"]["value"].as_str(), Some("K"));
    assert_eq!(json["level_cards_special"]["source"].as_str(), Some("file"));

    set_env("TRICKTABLE_SEED", "123");
    set_env("TRICKTABLE_LEVEL", "a");
    let json = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(123));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["level"]["value"].as_str(), Some("A"));
    assert_eq!(json["level"]["source"].as_str(), Some("env"));
    assert_eq!(json["level_cards_special"]["value"].as_bool(), Some(false));
    clear_env();
}

#[test]
#[serial]
fn invalid_env_value_fails() {
    clear_env();
    set_env("TRICKTABLE_LEVEL_CARDS_SPECIAL", "sometimes");
    let (code, out, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Invalid level_cards_special"));
    clear_env();
}

#[test]
#[serial]
fn unreadable_config_file_fails() {
    clear_env();
    set_env("TRICKTABLE_CONFIG", "/nonexistent/tricktable.toml");
    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
    clear_env();
}

#[test]
#[serial]
fn classify_uses_configured_level_and_rules() {
    clear_env();
    set_env("TRICKTABLE_LEVEL", "5");
    let (code, out, _) = run(&["classify", "5s 5d 5c 5s"]);
    assert_eq!(code, 0);
    assert!(out.contains("Level: 5"));
    assert!(out.contains("Weight: 9100"));

    set_env("TRICKTABLE_LEVEL_CARDS_SPECIAL", "off");
    let (_, out, _) = run(&["classify", "5s 5d 5c 5s"]);
    assert!(out.contains("Weight: 9005"));

    // the flag wins over the configured level
    let (_, out, _) = run(&["classify", "--level", "9", "5s 5d 5c 5s"]);
    assert!(out.contains("Level: 9"));
    assert!(out.contains("Weight: 9005"));
    clear_env();
}

#[test]
#[serial]
fn deal_uses_configured_seed() {
    clear_env();
    set_env("TRICKTABLE_SEED", "4242");
    let (code, from_env, _) = run(&["deal", "--players", "3"]);
    assert_eq!(code, 0);
    assert!(from_env.starts_with("Seed: 4242\n"));
    clear_env();
    let (_, explicit, _) = run(&["deal", "--players", "3", "--seed", "4242"]);
    assert_eq!(from_env, explicit);
}
