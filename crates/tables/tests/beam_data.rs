//! Integration tests for the reference beam data and JSON loading

use dosetools_tables::{read_beam_data, reference, BeamData, Energy, Error, LookupTable};
use rstest::rstest;

fn close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-10, "{a} != {b}");
}

#[test]
fn reference_data_covers_six_and_ten_mv() {
    let mut energies = reference()
        .depth_dose
        .energies()
        .collect::<Vec<Energy>>();
    energies.sort();
    assert_eq!(energies, vec![Energy::Mv6, Energy::Mv10]);
}

#[rstest]
#[case(7.5, 0.98)] // case 1, exact hit
#[case(10.0, 1.0)] // case 2, exact hit
#[case(15.0, 1.05)] // case 3, exact hit
fn reference_output_factors_hit_exactly(#[case] field_size: f64, #[case] expected: f64) {
    assert_eq!(reference().output_factor(field_size), expected);
}

#[test]
fn reference_output_factor_interpolates_between_keys() {
    // between 10 -> 1.00 and 15 -> 1.05
    close(reference().output_factor(12.0), 1.02);
}

#[test]
fn reference_percent_depth_dose_hits_exactly() {
    let pdd = reference()
        .percent_depth_dose(Energy::Mv6, 10.0, 5.0)
        .unwrap();
    assert_eq!(pdd, 83.0);
}

#[test]
fn higher_energies_penetrate_deeper() {
    let beam = reference();
    let six = beam.percent_depth_dose(Energy::Mv6, 10.0, 10.0).unwrap();
    let ten = beam.percent_depth_dose(Energy::Mv10, 10.0, 10.0).unwrap();
    assert!(six < ten);
}

#[test]
fn uncommissioned_energies_fail_fast() {
    let result = reference().percent_depth_dose(Energy::Mv15, 10.0, 5.0);
    assert!(matches!(result, Err(Error::MissingEnergy(Energy::Mv15))));
}

#[rstest]
#[case(15.0, 0.96)] // case 1
#[case(45.0, 0.88)] // case 2
fn reference_wedge_factors_hit_exactly(#[case] angle: f64, #[case] expected: f64) {
    assert_eq!(reference().wedge_factor(angle), expected);
}

#[test]
fn beam_data_round_trips_through_json() {
    let beam = reference();
    let json = serde_json::to_string(beam).unwrap();
    let back = serde_json::from_str::<BeamData>(&json).unwrap();
    assert_eq!(&back, beam);
}

#[test]
fn reads_beam_data_from_a_json_file() {
    let beam = read_beam_data("./data/reference.json").unwrap();
    assert_eq!(&beam, reference());
}

#[test]
fn missing_files_report_an_io_error() {
    let result = read_beam_data("./data/does_not_exist.json");
    assert!(matches!(result, Err(Error::IOError(_))));
}

#[test]
fn malformed_tables_are_rejected_during_deserialisation() {
    // empty table
    assert!(serde_json::from_str::<LookupTable>("[]").is_err());

    // duplicate keys
    assert!(serde_json::from_str::<LookupTable>("[[10.0, 1.0], [10.0, 1.1]]").is_err());
}

#[test]
fn sad_defaults_to_one_hundred_centimetres() {
    let json = r#"{
        "output_factors": [[10.0, 1.0]],
        "wedge_factors": [[30.0, 0.92]],
        "depth_dose": { "6 MV": [{ "field_size": 10.0, "table": [[0.0, 100.0]] }] }
    }"#;
    let beam = serde_json::from_str::<BeamData>(json).unwrap();
    assert_eq!(beam.sad, 100.0);
}
