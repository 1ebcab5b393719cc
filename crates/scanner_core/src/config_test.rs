use super::*;

#[test]
fn test_defaults_match_calibrated_setup() {
	let config = ScanConfig::default();

	assert_eq!(config.scan_min, DEFAULT_SCAN_MIN);
	assert_eq!(config.scan_max, DEFAULT_SCAN_MAX);
	assert_eq!(config.max_depth, 4);
	assert_eq!(config.threshold, 0.5);
	assert_eq!(config.output, PathBuf::from("untitled.stl"));
	assert_eq!(config.normal_mode, NormalMode::Zero);
}

#[test]
fn test_default_bounds_are_well_formed() {
	assert!(ScanConfig::default().bounds().is_well_formed());
}

#[test]
fn test_parse_partial_toml_keeps_defaults() {
	let config: ScanConfig = toml::from_str(
		r#"
			max_depth = 5
			threshold = 0.75
		"#,
	)
	.unwrap();

	assert_eq!(config.max_depth, 5);
	assert_eq!(config.threshold, 0.75);
	// Untouched fields fall back to defaults
	assert_eq!(config.scan_min, DEFAULT_SCAN_MIN);
	assert_eq!(config.output, PathBuf::from("untitled.stl"));
}

#[test]
fn test_parse_full_toml() {
	let config: ScanConfig = toml::from_str(
		r#"
			scan_min = [-1.0, -1.0, 0.0]
			scan_max = [1.0, 1.0, 2.0]
			max_depth = 6
			threshold = 0.25
			output = "scan/model.stl"
			normal_mode = "geometric"
		"#,
	)
	.unwrap();

	assert_eq!(config.scan_min, [-1.0, -1.0, 0.0]);
	assert_eq!(config.scan_max, [1.0, 1.0, 2.0]);
	assert_eq!(config.max_depth, 6);
	assert_eq!(config.threshold, 0.25);
	assert_eq!(config.output, PathBuf::from("scan/model.stl"));
	assert_eq!(config.normal_mode, NormalMode::Geometric);
}

#[test]
fn test_builders() {
	let config = ScanConfig::new()
		.with_bounds([-1.0; 3], [1.0; 3])
		.with_depth(3)
		.with_threshold(0.9)
		.with_output("out.stl")
		.with_normal_mode(NormalMode::Geometric);

	assert_eq!(config.bounds().min, Vec3::splat(-1.0));
	assert_eq!(config.bounds().max, Vec3::splat(1.0));
	assert_eq!(config.max_depth, 3);
	assert_eq!(config.threshold, 0.9);
	assert_eq!(config.output, PathBuf::from("out.stl"));
	assert_eq!(config.normal_mode, NormalMode::Geometric);
}

#[test]
fn test_load_missing_file_is_io_error() {
	let err = ScanConfig::load("/nonexistent/scanner.toml").unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}
