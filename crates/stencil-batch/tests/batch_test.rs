//! Batch orchestration tests against on-disk fixtures.

use std::path::PathBuf;

use stencil_batch::run_batch;
use stencil_core::{EngineConfig, GrayImage, Kernel, Strategy};
use stencil_io::png::write_gray;

const RES: usize = 32;

/// Writes `n` valid images and `m` corrupt files into `dir`, returning all
/// paths sorted by name.
fn make_fixtures(dir: &std::path::Path, n: usize, m: usize) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for i in 0..n {
        let data: Vec<f32> = (0..RES * RES)
            .map(|p| ((p * (i + 3)) % 256) as f32 / 255.0)
            .collect();
        let image = GrayImage::from_vec(RES, RES, data).unwrap();
        let path = dir.join(format!("img_{i:03}.png"));
        write_gray(&path, &image).unwrap();
        paths.push(path);
    }
    for i in 0..m {
        let path = dir.join(format!("junk_{i:03}.png"));
        std::fs::write(&path, b"definitely not a png").unwrap();
        paths.push(path);
    }
    paths.sort();
    paths
}

fn config(strategy: Strategy) -> EngineConfig {
    EngineConfig::new(RES, RES, Kernel::edge_horizontal(), strategy)
}

#[test]
fn batch_count_with_corrupt_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = make_fixtures(dir.path(), 4, 2);
    let out_dir = dir.path().join("out");

    let report = run_batch(config(Strategy::Global), &inputs, &out_dir).unwrap();
    assert_eq!(report.processed, 4);
    assert_eq!(report.skipped, 2);

    let written = std::fs::read_dir(&out_dir).unwrap().count();
    assert_eq!(written, 4);
}

#[test]
fn wrong_resolution_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut inputs = make_fixtures(dir.path(), 2, 0);

    let odd = GrayImage::new(RES + 1, RES);
    let odd_path = dir.path().join("odd_size.png");
    write_gray(&odd_path, &odd).unwrap();
    inputs.push(odd_path);
    inputs.sort();

    let report = run_batch(config(Strategy::Shared), &inputs, &dir.path().join("out")).unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 1);
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = make_fixtures(dir.path(), 3, 0);
    let out_a = dir.path().join("out_a");
    let out_b = dir.path().join("out_b");

    run_batch(config(Strategy::Shared), &inputs, &out_a).unwrap();
    run_batch(config(Strategy::Shared), &inputs, &out_b).unwrap();

    for input in &inputs {
        let name = input.file_name().unwrap();
        let a = std::fs::read(out_a.join(name)).unwrap();
        let b = std::fs::read(out_b.join(name)).unwrap();
        assert_eq!(a, b, "output for {name:?} differs between runs");
    }
}

#[test]
fn strategies_write_identical_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = make_fixtures(dir.path(), 2, 0);
    let out_global = dir.path().join("out_global");
    let out_shared = dir.path().join("out_shared");

    run_batch(config(Strategy::Global), &inputs, &out_global).unwrap();
    run_batch(config(Strategy::Shared), &inputs, &out_shared).unwrap();

    for input in &inputs {
        let name = input.file_name().unwrap();
        let a = std::fs::read(out_global.join(name)).unwrap();
        let b = std::fs::read(out_shared.join(name)).unwrap();
        assert_eq!(a, b, "strategies disagree for {name:?}");
    }
}
