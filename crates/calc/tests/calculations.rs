//! Integration tests for the full dose-to-MU pipeline

use dosetools_calc::{
    calculate, monitor_units, sensitivity, sweep, tissue_maximum_ratio, DoseInputs, Error,
    Geometry, Variable,
};
use dosetools_tables::{reference, Energy};
use dosetools_utils::ValueExt;
use rstest::{fixture, rstest};

fn close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-10, "{a} != {b}");
}

#[fixture]
fn baseline() -> DoseInputs {
    DoseInputs {
        dose: 200.0,
        field_size: 10.0,
        mu_rate: 100.0,
        energy: Energy::Mv6,
        depth: 5.0,
        wedge_factor: 1.0,
        inverse_square: 1.0,
        tray_factor: 1.0,
        geometry: Geometry::Sad,
        bolus: None,
    }
}

#[rstest]
fn isocentric_open_field(baseline: DoseInputs) {
    let result = calculate(reference(), &baseline).unwrap();

    // every intermediate is an exact table hit
    assert_eq!(result.output_factor, 1.0);
    assert_eq!(result.percent_dd, 83.0);
    close(result.tmr, 0.83);

    // 200 / (1.00 * 100 * 0.83 * 1 * 1 * 1)
    let mu = result.mu.unwrap();
    close(mu, 200.0 / 83.0);
    assert_eq!(mu.dp(2), "2.41");
}

#[rstest]
fn exact_output_factor_needs_no_interpolation(baseline: DoseInputs) {
    let inputs = DoseInputs {
        field_size: 7.5,
        ..baseline
    };
    let result = calculate(reference(), &inputs).unwrap();
    assert_eq!(result.output_factor, 0.98);
}

#[rstest]
fn bracketed_output_factor_interpolates(baseline: DoseInputs) {
    let inputs = DoseInputs {
        field_size: 12.0,
        ..baseline
    };
    let result = calculate(reference(), &inputs).unwrap();

    // 1.00 + (12 - 10) * (1.05 - 1.00) / (15 - 10)
    close(result.output_factor, 1.02);
}

#[test]
fn ssd_conversion_applies_the_inverse_square() {
    // at 95 cm SSD and 5 cm deep the source-target distance is the SAD
    close(
        tissue_maximum_ratio(83.0, 5.0, Geometry::Ssd { ssd: 95.0 }, 100.0),
        0.83,
    );

    // at 100 cm SSD the target sits beyond the axis
    close(
        tissue_maximum_ratio(80.0, 10.0, Geometry::Ssd { ssd: 100.0 }, 100.0),
        0.8 * 1.21,
    );
}

#[rstest]
fn ssd_at_machine_distance_matches_isocentric(baseline: DoseInputs) {
    let sad = calculate(reference(), &baseline).unwrap();

    let inputs = DoseInputs {
        geometry: Geometry::Ssd { ssd: 95.0 },
        ..baseline
    };
    let ssd = calculate(reference(), &inputs).unwrap();

    close(sad.mu.unwrap(), ssd.mu.unwrap());
}

#[rstest]
#[case(Variable::WedgeFactor)] // case 1
#[case(Variable::MuRate)] // case 2
#[case(Variable::TrayFactor)] // case 3
fn any_zero_factor_makes_mu_undefined(baseline: DoseInputs, #[case] variable: Variable) {
    let points = sweep(reference(), &baseline, variable, &[0.0]).unwrap();
    assert_eq!(points[0].mu, None);
}

#[test]
fn zero_factors_never_divide() {
    assert_eq!(monitor_units(200.0, 1.0, 100.0, 0.83, 0.0, 1.0, 1.0), None);
    assert_eq!(monitor_units(200.0, 1.0, 0.0, 0.83, 1.0, 1.0, 1.0), None);
}

#[rstest]
fn the_pipeline_is_idempotent(baseline: DoseInputs) {
    let first = calculate(reference(), &baseline).unwrap();
    let second = calculate(reference(), &baseline).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn bolus_thickens_the_effective_depth(baseline: DoseInputs) {
    let with_bolus = DoseInputs {
        depth: 4.0,
        bolus: Some(1.0),
        ..baseline.clone()
    };

    let direct = calculate(reference(), &baseline).unwrap();
    let bolused = calculate(reference(), &with_bolus).unwrap();
    assert_eq!(direct, bolused);
}

#[rstest]
fn uncommissioned_energies_propagate_as_errors(baseline: DoseInputs) {
    let inputs = DoseInputs {
        energy: Energy::Mv15,
        ..baseline
    };
    let result = calculate(reference(), &inputs);
    assert!(matches!(result, Err(Error::TablesError(_))));
}

#[rstest]
fn raising_a_denominator_factor_lowers_mu(baseline: DoseInputs) {
    let shift = sensitivity(reference(), &baseline, Variable::MuRate, 5.0)
        .unwrap()
        .unwrap();
    assert!(shift.up < 0.0);
    assert!(shift.down > 0.0);
}

#[rstest]
fn raising_the_dose_raises_mu(baseline: DoseInputs) {
    let shift = sensitivity(reference(), &baseline, Variable::Dose, 10.0)
        .unwrap()
        .unwrap();

    // dose scales MU linearly: +-10 cGy on 200 cGy is +-5%
    close(shift.up, 5.0);
    close(shift.down, -5.0);
}

#[rstest]
fn perturbation_never_mutates_the_baseline(baseline: DoseInputs) {
    let before = baseline.clone();
    sensitivity(reference(), &baseline, Variable::Depth, 1.0)
        .unwrap()
        .unwrap();
    assert_eq!(baseline, before);
}

#[rstest]
fn undefined_baselines_yield_no_sensitivity(baseline: DoseInputs) {
    let inputs = DoseInputs {
        wedge_factor: 0.0,
        ..baseline
    };
    let shift = sensitivity(reference(), &inputs, Variable::Depth, 1.0).unwrap();
    assert_eq!(shift, None);
}

#[rstest]
fn decreased_values_are_floored_above_zero(baseline: DoseInputs) {
    // an increment larger than the value itself must not push the copy to
    // zero or below, the decreased direction stays defined
    let shift = sensitivity(reference(), &baseline, Variable::MuRate, 1000.0)
        .unwrap()
        .unwrap();
    assert!(shift.down.is_finite());
    assert!(shift.down > 0.0);
}

#[rstest]
fn sweeps_match_single_calculations(baseline: DoseInputs) {
    let depths = [0.0, 5.0, 10.0, 15.0];
    let points = sweep(reference(), &baseline, Variable::Depth, &depths).unwrap();
    assert_eq!(points.len(), depths.len());

    for point in points {
        let inputs = DoseInputs {
            depth: point.value,
            ..baseline.clone()
        };
        let single = calculate(reference(), &inputs).unwrap();
        assert_eq!(point.mu, single.mu);
    }
}

#[rstest]
fn sweeps_carry_undefined_points(baseline: DoseInputs) {
    let points = sweep(
        reference(),
        &baseline,
        Variable::WedgeFactor,
        &[0.0, 0.5, 1.0],
    )
    .unwrap();

    assert_eq!(points[0].mu, None);
    assert!(points[1].mu.is_some());
    assert!(points[2].mu.is_some());
}

#[rstest]
fn results_render_for_the_reporting_layer(baseline: DoseInputs) {
    let result = calculate(reference(), &baseline).unwrap();
    assert_eq!(result.to_string(), "2.41 MU (OF 1.000, %DD 83.0, TMR 0.830)");

    let inputs = DoseInputs {
        wedge_factor: 0.0,
        ..baseline
    };
    let undefined = calculate(reference(), &inputs).unwrap();
    assert_eq!(
        undefined.to_string(),
        "undefined MU (zero dose rate denominator)"
    );
}
