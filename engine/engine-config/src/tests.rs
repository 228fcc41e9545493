//! Tests for the configuration module.

use super::*;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.common.seed, None);
    assert_eq!(config.arena.games, 10);
    assert_eq!(config.arena.first, "minimax");
    assert_eq!(config.arena.second, "random");
    assert!(config.arena.swap_seats);
}

#[test]
fn test_minimax_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.minimax.early_depth, 1);
    assert_eq!(config.minimax.late_depth, 3);
    assert_eq!(config.minimax.late_game_pawns, 10);
    assert!(config.minimax.pruning);
}

#[test]
fn test_montecarlo_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.montecarlo.early_matches, 20);
    assert_eq!(config.montecarlo.late_matches, 50);
    assert_eq!(config.montecarlo.late_game_pawns, 12);
}

#[test]
fn test_quarzo_env_overrides() {
    std::env::set_var("QUARZO_COMMON_SEED", "7");
    std::env::set_var("QUARZO_MINIMAX_LATE_DEPTH", "4");
    std::env::set_var("QUARZO_ARENA_SECOND", "montecarlo");
    std::env::set_var("QUARZO_ARENA_SWAP_SEATS", "false");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.common.seed, Some(7));
    assert_eq!(config.minimax.late_depth, 4);
    assert_eq!(config.arena.second, "montecarlo");
    assert!(!config.arena.swap_seats);

    std::env::remove_var("QUARZO_COMMON_SEED");
    std::env::remove_var("QUARZO_MINIMAX_LATE_DEPTH");
    std::env::remove_var("QUARZO_ARENA_SECOND");
    std::env::remove_var("QUARZO_ARENA_SWAP_SEATS");
}

#[test]
fn test_unparseable_env_override_is_ignored() {
    std::env::set_var("QUARZO_MONTECARLO_LATE_MATCHES", "lots");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.montecarlo.late_matches, 50);

    std::env::remove_var("QUARZO_MONTECARLO_LATE_MATCHES");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"
seed = 1234

[minimax]
early_depth = 2
pruning = false

[montecarlo]
late_matches = 200

[arena]
games = 100
first = "montecarlo"
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.common.seed, Some(1234));
    assert_eq!(config.minimax.early_depth, 2);
    assert_eq!(config.minimax.late_depth, 3); // Default
    assert!(!config.minimax.pruning);
    assert_eq!(config.montecarlo.late_matches, 200);
    assert_eq!(config.montecarlo.early_matches, 20); // Default
    assert_eq!(config.arena.games, 100);
    assert_eq!(config.arena.first, "montecarlo");
    assert_eq!(config.arena.second, "random"); // Default
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[arena]
games = 3
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.arena.games, 3);
    assert_eq!(config.common.log_level, "info"); // Default
    assert_eq!(config.minimax.late_game_pawns, 10); // Default
    assert_eq!(config.montecarlo.late_game_pawns, 12); // Default
}

#[test]
fn test_load_from_missing_path_uses_defaults() {
    let config = load_from_path(std::path::Path::new("/nonexistent/quarzo/config.toml"));
    assert_eq!(config.arena.games, 10);
    assert_eq!(config.minimax.early_depth, 1);
}

#[test]
fn test_load_from_path_reads_file() {
    let path = std::env::temp_dir().join(format!("quarzo-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[montecarlo]\nearly_matches = 5\n").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.montecarlo.early_matches, 5);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.arena.first, cloned.arena.first);
    assert_eq!(config.minimax.late_depth, cloned.minimax.late_depth);
}
