use trimesh_quality::prelude::*;

mod util;
use util::*;

#[test]
fn two_valid_triangles_and_one_disabled() {
    let mesh = two_valid_one_disabled();
    let config = QualityConfig {
        verbosity: 5,
        ..Default::default()
    };
    let mut out = Vec::new();
    let stats = input_quality(&mesh, None, &config, &mut out, None).unwrap();

    assert_eq!(stats.count, 2);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.min, 0.0);
    assert_eq!(stats.worst, Some(TriangleId::new(1)));
    assert!((stats.max - 1.0).abs() < 1e-12);
    assert_eq!(stats.histogram.total(), 2);
    assert_eq!(stats.histogram.as_array(), &[1, 0, 0, 0, 1]);
    assert!(stats.has_bad_elements);

    let text = report_text(out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "  -- MESH QUALITY   2");
    assert!(lines[2].starts_with("     BEST   1.000000  AVRG.   0.500000  WRST.   0.000000 (1)"));
    assert_eq!(lines[3], "     HISTOGRAMM:   50.00 % > 0.5");
    // Bands 4 down to 0.
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[4], "       0.8 < Q <   1.0         1    50.00 %");
    assert_eq!(lines[8], "       0.0 < Q <   0.2         1    50.00 %");
}

#[test]
fn low_verbosity_omits_histogram() {
    let mesh = two_valid_one_disabled();
    let mut out = Vec::new();
    input_quality(&mesh, None, &QualityConfig::default(), &mut out, None).unwrap();
    let text = report_text(out);
    assert_eq!(text.lines().count(), 3);
    assert!(!text.contains("HISTOGRAMM"));
}

#[test]
fn good_mesh_is_not_flagged() {
    let mesh = grid(4);
    let config = QualityConfig::default();
    let stats = scan_quality(&mesh, None, ReportMode::Input, &config, None);
    assert_eq!(stats.count, 32);
    assert!(!stats.has_bad_elements);
    // Right isoceles triangles: sqrt(3) / 2 after scaling.
    let expected = 3f64.sqrt() / 2.0;
    assert!((stats.min - expected).abs() < 1e-12);
    assert!((stats.max - expected).abs() < 1e-12);
    assert_eq!(stats.above_half, 32);
    assert_eq!(stats.histogram.count(4), 32);
}

#[test]
fn identity_metric_reports_like_isotropic() {
    let mesh = grid(3);
    let metric = MetricField::uniform(&mesh, SymTensor3::IDENTITY);
    let config = QualityConfig::default();
    let iso = scan_quality(&mesh, None, ReportMode::Input, &config, None);
    let input = scan_quality(&mesh, Some(&metric), ReportMode::Input, &config, None);
    let output = scan_quality(
        &mesh,
        Some(&metric),
        ReportMode::Output(&StraightEdgeMetric),
        &config,
        None,
    );
    for stats in [&input, &output] {
        assert_eq!(stats.count, iso.count);
        assert!((stats.min - iso.min).abs() < 1e-12);
        assert!((stats.max - iso.max).abs() < 1e-12);
        assert_eq!(stats.histogram, iso.histogram);
    }
}

#[test]
fn anisotropic_metric_changes_the_ranking() {
    // Grid cells are squares; a metric prescribing half the size along x
    // stretches them into 2:1 rectangles in metric space.
    let mesh = grid(2);
    let metric = MetricField::uniform(&mesh, SymTensor3::diagonal(4.0, 1.0, 1.0));
    let config = QualityConfig::default();
    let iso = scan_quality(&mesh, None, ReportMode::Input, &config, None);
    let aniso = scan_quality(&mesh, Some(&metric), ReportMode::Input, &config, None);
    assert!(aniso.max < iso.max);
}

#[test]
fn singular_metric_scores_everything_zero() {
    let mesh = grid(2);
    let metric = MetricField::uniform(&mesh, SymTensor3::ZERO);
    let mut out = Vec::new();
    let stats = output_quality(
        &mesh,
        Some(&metric),
        &StraightEdgeMetric,
        &QualityConfig::default(),
        &mut out,
        None,
    )
    .unwrap();
    assert_eq!(stats.max, 0.0);
    assert_eq!(stats.histogram.count(0), stats.count);
    assert!(stats.has_bad_elements);
}

#[test]
fn custom_scaling_and_threshold() {
    let mesh = grid(2);
    let config = QualityConfig {
        alphad: 1.0,
        badkal: 0.0,
        verbosity: 0,
    };
    let stats = scan_quality(&mesh, None, ReportMode::Input, &config, None);
    // Raw quality of a right isoceles triangle is 1/4.
    assert!((stats.max - 0.25).abs() < 1e-12);
    assert!(!stats.has_bad_elements);
}

#[test]
fn invalid_config_is_rejected_before_writing() {
    let mesh = grid(1);
    let config = QualityConfig {
        badkal: -0.1,
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = input_quality(&mesh, None, &config, &mut out, None).unwrap_err();
    assert!(matches!(err, QualityError::InvalidConfig(_)));
    assert!(out.is_empty());
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: QualityConfig = serde_json::from_str(r#"{ "verbosity": 6 }"#).unwrap();
    assert_eq!(cfg.verbosity, 6);
    assert_eq!(cfg.alphad, ALPHAD);
    assert_eq!(cfg.badkal, BADKAL);
}

#[test]
fn stats_serialize_for_downstream_tools() {
    let mesh = two_valid_one_disabled();
    let config = QualityConfig::default();
    let stats = scan_quality(&mesh, None, ReportMode::Input, &config, None);
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["worst"], 1);
    assert_eq!(json["has_bad_elements"], true);
}

struct FailingSink;

impl std::io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("sink closed"))
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_errors_propagate() {
    let mesh = grid(1);
    let config = QualityConfig::default();
    let err = input_quality(&mesh, None, &config, &mut FailingSink, None).unwrap_err();
    assert!(matches!(err, QualityError::Io(_)));
}
