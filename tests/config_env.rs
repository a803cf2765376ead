use featureflow::config::{RunnerConfig, DRY_RUN_KEY, PARALLEL_KEY};
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_keys_missing() {
    assert_eq!(RunnerConfig::from_lookup(lookup(&[])), RunnerConfig::default());
}

#[test]
fn flags_are_parsed() {
    let cfg = RunnerConfig::from_lookup(lookup(&[(PARALLEL_KEY, "yes"), (DRY_RUN_KEY, "1")]));
    assert!(cfg.parallel);
    assert!(cfg.dry_run);
}

#[test]
fn invalid_values_fall_back_to_default() {
    let cfg = RunnerConfig::from_lookup(lookup(&[(PARALLEL_KEY, "sometimes")]));
    assert!(!cfg.parallel);
}
