use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in [Ease::Linear, Ease::InOutQuad] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
}

#[test]
fn loop_phase_wraps() {
    assert_eq!(loop_phase(0.0, 2.0), 0.0);
    assert_eq!(loop_phase(3.0, 2.0), 0.5);
    assert_eq!(loop_phase(4.0, 2.0), 0.0);
    assert_eq!(loop_phase(1.0, 0.0), 0.0);
}

#[test]
fn there_and_back_peaks_at_mid_period() {
    assert_eq!(there_and_back(0.0, Ease::InOutQuad), 0.0);
    assert_eq!(there_and_back(0.5, Ease::InOutQuad), 1.0);
    let a = there_and_back(0.25, Ease::Linear);
    let b = there_and_back(0.75, Ease::Linear);
    assert!((a - b).abs() < 1e-12);
}
