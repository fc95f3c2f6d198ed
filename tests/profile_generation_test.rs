//! End-to-end tests for the breeze and eady profile generators.
//!
//! Runs each case into a temporary directory and checks the written
//! artifact the way the downstream simulation tool would read it.

use std::fs;
use std::path::Path;

use abl_rs::cases::{BreezeCase, BreezeResolution, CaseError, EadyCase};
use abl_rs::io::SettingsError;
use abl_rs::profile::BuoyancyProfile;
use approx::assert_relative_eq;
use tempfile::tempdir;

/// Parse the data lines of a profile file into per-column vectors.
fn read_profile(path: &Path) -> (Vec<String>, Vec<Vec<f64>>) {
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();

    let header: Vec<String> = lines
        .next()
        .unwrap()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); header.len()];
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields.len(), header.len(), "ragged data line: {}", line);
        for (i, field) in fields.iter().enumerate() {
            columns[i].push(field.parse().unwrap());
        }
    }

    (header, columns)
}

#[test]
fn breeze_writes_header_and_512_data_lines() {
    let dir = tempdir().unwrap();
    let summary = BreezeCase::default().run(dir.path()).unwrap();

    assert_eq!(summary.kmax, 512);
    assert_eq!(summary.output, dir.path().join("breeze.prof"));

    let text = fs::read_to_string(&summary.output).unwrap();
    assert_eq!(text.lines().count(), 513); // header + one line per level

    let (header, columns) = read_profile(&summary.output);
    assert_eq!(header, ["z", "b"]);
    assert_eq!(columns[0].len(), 512);
}

#[test]
fn breeze_buoyancy_is_three_times_height() {
    // In memory the relation is exact (a single multiplication); through
    // the 14-digit file format it holds to the format's precision.
    let case = BreezeCase::default();
    let grid = case.grid().unwrap();
    let b = case.buoyancy.evaluate(grid.z());
    for k in 0..grid.kmax() {
        assert_eq!(b[k], 3.0 * grid.z()[k]);
    }

    let dir = tempdir().unwrap();
    let summary = case.run(dir.path()).unwrap();
    let (_, columns) = read_profile(&summary.output);
    for k in 0..512 {
        assert_relative_eq!(columns[1][k], 3.0 * columns[0][k], max_relative = 1e-13);
    }
}

#[test]
fn breeze_heights_strictly_increasing_in_file() {
    let dir = tempdir().unwrap();
    let summary = BreezeCase::default().run(dir.path()).unwrap();

    let (_, columns) = read_profile(&summary.output);
    let z = &columns[0];
    for k in 1..z.len() {
        assert!(z[k] > z[k - 1], "z not increasing at level {}", k);
    }
}

#[test]
fn breeze_fine_resolution_writes_1024_levels() {
    let dir = tempdir().unwrap();
    let case = BreezeCase {
        resolution: BreezeResolution::Fine1024,
        ..BreezeCase::default()
    };
    let summary = case.run(dir.path()).unwrap();

    assert_eq!(summary.kmax, 1024);
    let (_, columns) = read_profile(&summary.output);
    assert_eq!(columns[0].len(), 1024);
}

#[test]
fn breeze_erf_corrected_relaxes_to_linear_aloft() {
    let dir = tempdir().unwrap();
    let case = BreezeCase::erf_corrected(BreezeResolution::Coarse512);
    let summary = case.run(dir.path()).unwrap();

    let (_, columns) = read_profile(&summary.output);
    let (z, b) = (&columns[0], &columns[1]);

    // Near the surface the correction dominates: b ~ b0, not ~ 3z.
    assert!(b[0] > 0.5);
    // Well above the surface layer the linear profile is recovered.
    let top = z.len() - 1;
    assert_relative_eq!(b[top], 3.0 * z[top], max_relative = 1e-10);
}

#[test]
fn eady_profiles_match_settings() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("eady.ini"), "ktot=64\nzsize=5.\n").unwrap();

    let case = EadyCase::from_settings_file(&dir.path().join("eady.ini")).unwrap();
    let summary = case.run(dir.path()).unwrap();

    assert_eq!(summary.ktot, 64);
    assert_eq!(summary.zsize, 5.0);

    let (header, columns) = read_profile(&summary.output);
    assert_eq!(header, ["z", "b", "u", "ug"]);
    assert_eq!(columns[0].len(), 64);

    // Uniform spacing: constant dz = zsize / ktot between cell centers.
    let z = &columns[0];
    let dz = 5.0 / 64.0;
    assert_relative_eq!(z[0], 0.5 * dz, max_relative = 1e-12);
    for k in 1..z.len() {
        assert_relative_eq!(z[k] - z[k - 1], dz, max_relative = 1e-10);
    }

    // b = N2 * z with N2 = 1.
    for k in 0..z.len() {
        assert_relative_eq!(columns[1][k], z[k], max_relative = 1e-13);
    }
}

#[test]
fn eady_streamwise_and_geostrophic_wind_identical() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("eady.ini"), "ktot=32\nzsize=3200.0\n").unwrap();

    let case = EadyCase::from_settings_file(&dir.path().join("eady.ini")).unwrap();
    let summary = case.run(dir.path()).unwrap();

    // u and ug come from the same evaluation, so even their formatted
    // text is identical.
    let text = fs::read_to_string(&summary.output).unwrap();
    for line in text.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields[2], fields[3]);
    }
}

#[test]
fn eady_dbdy_diagnostic_is_exact() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("eady.ini"), "ktot=8\nzsize=1.0\n").unwrap();

    let case = EadyCase::from_settings_file(&dir.path().join("eady.ini")).unwrap();
    let summary = case.run(dir.path()).unwrap();
    assert_eq!(summary.dbdy_ls, -1.0e-4 * 1.0e-4);
}

#[test]
fn eady_missing_settings_file_leaves_no_output() {
    let dir = tempdir().unwrap();

    let result = EadyCase::from_settings_file(&dir.path().join("eady.ini"));
    assert!(matches!(
        result,
        Err(CaseError::Settings(SettingsError::Io(_)))
    ));
    assert!(!dir.path().join("eady.prof").exists());
}

#[test]
fn eady_malformed_settings_leaves_no_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("eady.ini"), "ktot=twelve\nzsize=100.0\n").unwrap();

    let result = EadyCase::from_settings_file(&dir.path().join("eady.ini"));
    assert!(matches!(
        result,
        Err(CaseError::Settings(SettingsError::Parse { .. }))
    ));
    assert!(!dir.path().join("eady.prof").exists());
}

#[test]
fn eady_settings_missing_zsize_leaves_no_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("eady.ini"), "ktot=64\n").unwrap();

    let result = EadyCase::from_settings_file(&dir.path().join("eady.ini"));
    assert!(matches!(
        result,
        Err(CaseError::Settings(SettingsError::MissingKey { .. }))
    ));
    assert!(!dir.path().join("eady.prof").exists());
}

#[test]
fn reruns_are_bit_identical() {
    // Pure pipeline: regenerating with identical inputs reproduces the
    // artifact byte for byte.
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();

    let a = BreezeCase::default().run(dir_a.path()).unwrap();
    let b = BreezeCase::default().run(dir_b.path()).unwrap();

    let text_a = fs::read_to_string(&a.output).unwrap();
    let text_b = fs::read_to_string(&b.output).unwrap();
    assert_eq!(text_a, text_b);
}

#[test]
fn profile_values_use_fixed_exponent_format() {
    let dir = tempdir().unwrap();
    let summary = BreezeCase::default().run(dir.path()).unwrap();

    let text = fs::read_to_string(&summary.output).unwrap();
    let first_data = text.lines().nth(1).unwrap();
    // Every value: 14-digit mantissa, 'E', explicit sign, two-digit
    // exponent -- e.g. 5.00000000000000E-04.
    for field in first_data.split_whitespace() {
        let (mantissa, exponent) = field.split_once('E').unwrap();
        assert_eq!(mantissa.trim_start_matches('-').len(), 16); // d.dddddddddddddd
        assert!(exponent.starts_with('+') || exponent.starts_with('-'));
        assert_eq!(exponent.len(), 3);
    }
}

#[test]
fn breeze_erf_surface_value_near_b0() {
    // z[0] ~ 0.5 mm << delta ~ 4.4 mm, so erf(-0.5 z / delta) is small
    // and b[0] stays close to b0 + N2 * z[0].
    let case = BreezeCase::erf_corrected(BreezeResolution::Coarse512);
    let grid = case.grid().unwrap();
    let b = case.buoyancy.evaluate(grid.z());

    if let BuoyancyProfile::ErfCorrected { b0, .. } = case.buoyancy {
        assert!((b[0] - b0).abs() < 0.1);
    } else {
        panic!("expected erf-corrected buoyancy");
    }
}
