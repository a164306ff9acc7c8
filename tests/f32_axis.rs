use axis_tics::{AxisTics, TicMultiple};

#[test]
fn test_f32_interval_mode() {
    let tics = AxisTics::<f32>::from_interval(-1.0, 1.0, 0.5);
    assert_eq!(tics.count_major(), 5);
    assert_eq!(tics.first_major(), -1.0f32);
    assert_eq!(tics.multiple(), TicMultiple::Five);
    assert!((tics.delta_minor() - 0.1f32).abs() < 1e-6);
    assert_eq!(tics.count_minor(), 21);
}

#[test]
fn test_f32_count_mode() {
    let tics = AxisTics::<f32>::from_count(0.0, 100.0, 11);
    assert_eq!(tics.count_major(), 11);
    assert_eq!(tics.delta_major(), 10.0f32);
    assert_eq!(tics.multiple(), TicMultiple::Ten);
    assert_eq!(tics.count_minor(), 101);
}

#[test]
fn test_f32_ticks_match_values() {
    let tics = AxisTics::<f32>::from_interval(0.0, 10.0, 2.0);
    let majors: Vec<f32> = tics.ticks().filter(|t| t.is_major()).map(|t| t.value).collect();
    assert_eq!(majors, tics.major_values().collect::<Vec<_>>());
    assert_eq!(majors, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}
