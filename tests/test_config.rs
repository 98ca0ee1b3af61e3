use pop_my_balloons::config::*;
use pop_my_balloons::error::ConfigError;

#[test]
fn empty_file_gives_defaults() {
    let cfg = GameConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, GameConfig::default());
    assert_eq!(cfg.rules.screen.width, 800);
    assert_eq!(cfg.rules.screen.height, 600);
    assert_eq!(cfg.rules.arrow.max_on_screen, 3);
    assert_eq!(cfg.rules.balloon.band_left, 15);
    assert_eq!(cfg.rules.balloon.band_right, 785);
    assert_eq!(cfg.display.framerate, 60);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = GameConfig::from_toml_str(
        r#"
        [arrow]
        max_on_screen = 5

        [balloon]
        band_left = 35
        band_right = 765

        [display]
        framerate = 30
        "#,
    )
    .unwrap();
    assert_eq!(cfg.rules.arrow.max_on_screen, 5);
    assert_eq!(cfg.rules.arrow.speed, 5);
    assert_eq!(cfg.rules.balloon.band_left, 35);
    assert_eq!(cfg.rules.balloon.band_right, 765);
    assert_eq!(cfg.rules.balloon.speed, 4);
    assert_eq!(cfg.display.framerate, 30);
    assert_eq!(cfg.rules.player, PlayerConfig::default());
}

#[test]
fn log_file_override() {
    let cfg = GameConfig::from_toml_str("[display]\nlog_file = \"/tmp/pmb.log\"\n").unwrap();
    assert_eq!(cfg.display.log_path(), std::path::PathBuf::from("/tmp/pmb.log"));
}

#[test]
fn default_log_path_is_in_temp_dir() {
    let path = DisplayConfig::default().log_path();
    assert!(path.starts_with(std::env::temp_dir()));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = GameConfig::from_toml_str("[screen\nwidth =").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_arrow_cap_rejected() {
    let err = GameConfig::from_toml_str("[arrow]\nmax_on_screen = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn non_positive_speed_rejected() {
    let err = GameConfig::from_toml_str("[balloon]\nspeed = 0\n").unwrap_err();
    assert!(err.to_string().contains("balloon.speed"));
}

#[test]
fn huge_speed_rejected() {
    let err = GameConfig::from_toml_str("[player]\nspeed = 2147483647\n").unwrap_err();
    assert!(err.to_string().contains("player.speed"));
    assert!(GameConfig::from_toml_str("[arrow]\nspeed = 601\n").is_err());
    assert!(GameConfig::from_toml_str("[balloon]\nspeed = 800\n").is_ok());
}

#[test]
fn sprite_larger_than_screen_rejected() {
    let err = GameConfig::from_toml_str("[balloon]\nwidth = 801\n").unwrap_err();
    assert!(err.to_string().contains("balloon size"));
    assert!(GameConfig::from_toml_str("[player]\nheight = 700\n").is_err());
    assert!(GameConfig::from_toml_str("[arrow]\nwidth = 800\nheight = 600\n").is_ok());
}

#[test]
fn oversized_screen_rejected() {
    assert!(GameConfig::from_toml_str("[screen]\nwidth = 100000\n").is_err());
}

#[test]
fn far_spawn_coordinates_rejected() {
    let err = GameConfig::from_toml_str(
        "[balloon]\nspawn_x_min = 800\nspawn_x_max = 2147483000\n",
    )
    .unwrap_err();
    assert!(err.to_string().contains("balloon.spawn_x_max"));
}

#[test]
fn band_outside_screen_rejected() {
    assert!(GameConfig::from_toml_str("[balloon]\nband_right = 900\n").is_err());
    assert!(GameConfig::from_toml_str("[balloon]\nband_left = 500\nband_right = 400\n").is_err());
}

#[test]
fn spawn_range_must_be_ordered() {
    let err = GameConfig::from_toml_str("[balloon]\nspawn_x_min = 1000\nspawn_x_max = 800\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn zero_min_delay_rejected() {
    assert!(GameConfig::from_toml_str("[spawn]\nmin_delay_ms = 0\n").is_err());
    assert!(GameConfig::from_toml_str("[spawn]\nramp_scale = 0\n").is_err());
}

#[test]
fn zero_framerate_rejected() {
    assert!(GameConfig::from_toml_str("[display]\nframerate = 0\n").is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("pop_my_balloons_does_not_exist_8c1f.toml");
    let cfg = GameConfig::load_from(&path).unwrap();
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn load_from_reads_file() {
    let path = std::env::temp_dir().join(format!("pmb_config_{}.toml", std::process::id()));
    std::fs::write(&path, "[player]\nspeed = 6\n").unwrap();
    let cfg = GameConfig::load_from(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(cfg.rules.player.speed, 6);
}

#[test]
fn rules_screen_rect_matches_screen() {
    let rules = Rules::default();
    let r = rules.screen_rect();
    assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 800, 600));
}
