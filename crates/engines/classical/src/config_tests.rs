use super::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("classical_engine_{}_{}.toml", std::process::id(), name))
}

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.difficulty, Difficulty::Medium);
    assert_eq!(cfg.quiescence_depth, 3);
    assert_eq!(cfg.think_time_limit_ms, 1800);
    assert_eq!(cfg.history_limit, None);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_difficulty_depths() {
    assert_eq!(Difficulty::Easy.depth(), 2);
    assert_eq!(Difficulty::Medium.depth(), 3);
    assert_eq!(Difficulty::Hard.depth(), 4);
}

#[test]
fn test_difficulty_from_str() {
    assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert!(matches!(
        "grandmaster".parse::<Difficulty>(),
        Err(ConfigError::UnknownDifficulty(_))
    ));
}

#[test]
fn test_missing_file_gives_defaults() {
    let cfg = EngineConfig::load(&temp_path("absent")).unwrap();
    assert_eq!(cfg, EngineConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("partial", "difficulty = \"hard\"\nhistory_limit = 50\n");
    let cfg = EngineConfig::load(&file).unwrap();
    assert_eq!(cfg.difficulty, Difficulty::Hard);
    assert_eq!(cfg.history_limit, Some(50));
    assert_eq!(cfg.quiescence_depth, 3);
}

#[test]
fn test_out_of_range_values_rejected() {
    let file = write_config("qdepth", "quiescence_depth = 9\n");
    assert!(matches!(
        EngineConfig::load(&file),
        Err(ConfigError::QuiescenceDepth(9))
    ));

    let file = write_config("history", "history_limit = 0\n");
    assert!(matches!(
        EngineConfig::load(&file),
        Err(ConfigError::HistoryLimit)
    ));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let file = write_config("malformed", "difficulty = \"impossible\"\n");
    assert!(matches!(
        EngineConfig::load(&file),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_toml_round_trip() {
    let cfg = EngineConfig {
        difficulty: Difficulty::Easy,
        quiescence_depth: 2,
        think_time_limit_ms: 500,
        history_limit: Some(10),
    };
    let text = cfg.to_toml().unwrap();
    let file = write_config("round_trip", &text);
    assert_eq!(EngineConfig::load(&file).unwrap(), cfg);
}
