use std::time::Duration;

use imagefill::Error;
use imagefill::config::{Options, Settings, WatchStrategy};

#[test]
fn defaults() {
    let settings = Settings::default();
    assert!(!settings.run_once);
    assert_eq!(settings.target, "img");
    assert_eq!(settings.throttle, Duration::from_millis(32));
    assert_eq!(settings.watch, WatchStrategy::Poll);
}

#[test]
fn resolve_overlays_in_order() {
    // resolve({}, {target: ".a"}, {throttle: 50ms})
    let layers = [
        Options::default(),
        Options {
            target: Some(".a".to_owned()),
            ..Default::default()
        },
        Options {
            throttle: Some(Duration::from_millis(50)),
            ..Default::default()
        },
    ];
    let settings = Settings::resolve(&layers);
    assert!(!settings.run_once);
    assert_eq!(settings.target, ".a");
    assert_eq!(settings.throttle, Duration::from_millis(50));
}

#[test]
fn later_layer_wins_on_collision() {
    let layers = [
        Options {
            target: Some(".first".to_owned()),
            ..Default::default()
        },
        Options {
            target: Some(".second".to_owned()),
            ..Default::default()
        },
    ];
    assert_eq!(Settings::resolve(&layers).target, ".second");
}

#[test]
fn absent_fields_keep_earlier_values() {
    let layers = [
        Options {
            run_once: Some(true),
            throttle: Some(Duration::from_millis(5)),
            ..Default::default()
        },
        Options::default(),
    ];
    let settings = Settings::resolve(&layers);
    assert!(settings.run_once);
    assert_eq!(settings.throttle, Duration::from_millis(5));
    assert_eq!(settings.target, "img");
}

#[test]
fn overlaid_layers_on_top_of_existing_record() {
    let base = Settings {
        target: ".hero".to_owned(),
        ..Settings::default()
    };
    let overlay = Options {
        run_once: Some(true),
        ..Default::default()
    };
    let settings = base.overlaid(&overlay);
    assert!(settings.run_once);
    assert_eq!(settings.target, ".hero");
}

#[test]
fn parse_kebab_case_yaml() {
    let yaml = r#"
run-once: true
target: ".js-background"
throttle: 50ms
watch: resize-event
"#;
    let settings: Settings = serde_yaml::from_str(yaml).unwrap();
    assert!(settings.run_once);
    assert_eq!(settings.target, ".js-background");
    assert_eq!(settings.throttle, Duration::from_millis(50));
    assert_eq!(settings.watch, WatchStrategy::ResizeEvent);
}

#[test]
fn yaml_defaults_apply_for_missing_keys() {
    let settings: Settings = serde_yaml::from_str("run-once: true").unwrap();
    assert_eq!(settings.target, "img");
    assert_eq!(settings.throttle, Duration::from_millis(32));
    assert_eq!(settings.watch, WatchStrategy::Poll);
}

#[test]
fn options_parse_as_partial_overlay() {
    let options: Options = serde_yaml::from_str("throttle: 1s").unwrap();
    assert_eq!(options.throttle, Some(Duration::from_secs(1)));
    assert!(options.target.is_none());
    assert!(options.run_once.is_none());
}

#[test]
fn load_from_file_and_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagefill.yaml");
    std::fs::write(&path, "target: \".hero\"\nthrottle: 16ms\n").unwrap();

    let settings = Settings::from_yaml_file(&path).unwrap().validated().unwrap();
    assert_eq!(settings.target, ".hero");
    assert_eq!(settings.throttle, Duration::from_millis(16));
    assert!(!settings.run_once);
}

#[test]
fn validation_rejects_empty_selector() {
    let settings: Settings = serde_yaml::from_str("target: \"  \"").unwrap();
    match settings.validated() {
        Err(Error::InvalidSettings(msg)) => assert!(msg.contains("selector")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected validation to fail"),
    }
}

#[test]
fn validation_rejects_zero_throttle() {
    let settings: Settings = serde_yaml::from_str("throttle: 0s").unwrap();
    match settings.validated() {
        Err(Error::InvalidSettings(msg)) => assert!(msg.contains("throttle")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected validation to fail"),
    }
}
