#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use cellstats_common::{CellCatalog, CellStatsError, ScanConfig, run};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const HEADER: &str =
    "file,cells,sites,transistors,cells_with_fill,sites_with_fill,transistors_with_fill";

fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

struct Netlists {
    dir: TempDir,
}

impl Netlists {
    fn write(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

#[fixture]
fn netlists() -> Netlists {
    init_test_logger();
    Netlists {
        dir: tempfile::tempdir().unwrap(),
    }
}

struct Output {
    result: Result<usize, CellStatsError>,
    stdout: String,
    stderr: String,
}

fn run_on(paths: &[PathBuf], config: &ScanConfig) -> Output {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = run(paths, CellCatalog::sky130_hd(), config, &mut stdout, &mut stderr);
    Output {
        result,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

fn row(path: &PathBuf, counts: &str) -> String {
    format!("{},{counts}", path.display())
}

fn sequential() -> ScanConfig {
    ScanConfig::default()
}

fn parallel() -> ScanConfig {
    ScanConfig::builder().parallel(true).build()
}

#[rstest]
#[case::sequential(sequential())]
#[case::parallel(parallel())]
fn inverter_and_filler(netlists: Netlists, #[case] config: ScanConfig) {
    let path = netlists.write(
        "gate-level.v",
        b"wire sky130_fd_sc_hd__inv_1 a, b; sky130_fd_sc_hd__fill_1 c;",
    );
    let out = run_on(std::slice::from_ref(&path), &config);

    assert_eq!(out.result.unwrap(), 1);
    assert_eq!(out.stdout, format!("{HEADER}\n{}\n", row(&path, "1,3,2,2,4,2")));
    assert!(out.stderr.is_empty());
}

#[rstest]
fn empty_file(netlists: Netlists) {
    let path = netlists.write("empty.v", b"");
    let out = run_on(std::slice::from_ref(&path), &sequential());

    assert_eq!(out.result.unwrap(), 1);
    assert_eq!(out.stdout, format!("{HEADER}\n{}\n", row(&path, "0,0,0,0,0,0")));
}

#[rstest]
#[case::filler(b"sky130_fd_sc_hd__decap_12", "0,0,0,5,60,10")]
#[case::tap(b"sky130_fd_sc_hd__tapvpwrvgnd_1", "0,0,0,5,5,0")]
#[case::regular(b"sky130_fd_sc_hd__a21oi_1", "5,20,30,5,20,30")]
#[case::spare(b"sky130_fd_sc_hd__macro_sparecell", "0,0,0,5,145,0")]
fn repeated_cell(netlists: Netlists, #[case] cell: &[u8], #[case] expected: &str) {
    let mut content = Vec::new();
    for i in 0..5 {
        content.extend_from_slice(cell);
        content.extend_from_slice(format!(" _{i}_ ();\n").as_bytes());
    }
    let path = netlists.write("repeat.v", &content);
    let out = run_on(std::slice::from_ref(&path), &sequential());

    out.result.unwrap();
    assert_eq!(out.stdout.lines().nth(1), Some(row(&path, expected).as_str()));
}

#[rstest]
#[case::sequential(sequential())]
#[case::parallel(parallel())]
fn rows_follow_argument_order(netlists: Netlists, #[case] config: ScanConfig) {
    let a = netlists.write("a.v", b"sky130_fd_sc_hd__inv_1");
    let b = netlists.write("b.v", b"sky130_fd_sc_hd__fill_2 sky130_fd_sc_hd__fill_2");
    let c = netlists.write("c.v", b"no cells here");
    let paths = vec![c.clone(), a.clone(), b.clone(), a.clone()];
    let out = run_on(&paths, &config);

    assert_eq!(out.result.unwrap(), 4);
    let lines: Vec<_> = out.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            HEADER.to_string(),
            row(&c, "0,0,0,0,0,0"),
            row(&a, "1,3,2,1,3,2"),
            row(&b, "0,0,0,2,4,0"),
            row(&a, "1,3,2,1,3,2"),
        ]
    );
}

#[rstest]
#[case::sequential(sequential())]
#[case::parallel(parallel())]
fn unknown_identifier_stops_the_run(netlists: Netlists, #[case] config: ScanConfig) {
    let good = netlists.write("good.v", b"sky130_fd_sc_hd__inv_1");
    let bad = netlists.write("bad.v", b"sky130_fd_sc_hd__inv_1 sky130_unknown_cell_9");
    let later = netlists.write("later.v", b"sky130_fd_sc_hd__inv_1");
    let out = run_on(&[good.clone(), bad.clone(), later], &config);

    match out.result.unwrap_err() {
        CellStatsError::UnknownIdentifier { path, identifier } => {
            assert_eq!(path, bad);
            assert_eq!(identifier, "sky130_unknown_cell_9");
        },
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(out.stdout, format!("{HEADER}\n{}\n", row(&good, "1,3,2,1,3,2")));
}

#[rstest]
#[case::sequential(sequential())]
#[case::parallel(parallel())]
fn missing_file_stops_the_run(netlists: Netlists, #[case] config: ScanConfig) {
    let missing = netlists.dir.path().join("missing.v");
    let later = netlists.write("later.v", b"sky130_fd_sc_hd__inv_1");
    let out = run_on(&[missing.clone(), later], &config);

    let err = out.result.unwrap_err();
    assert!(matches!(err, CellStatsError::FileAccess { .. }));
    assert_eq!(err.path(), Some(missing.as_path()));
    assert_eq!(out.stdout, format!("{HEADER}\n"));
}

#[rstest]
fn directory_is_a_file_access_error(netlists: Netlists) {
    let dir = netlists.dir.path().to_path_buf();
    let out = run_on(&[dir], &sequential());

    assert!(matches!(
        out.result.unwrap_err(),
        CellStatsError::FileAccess { .. }
    ));
}

#[rstest]
fn verbose_diagnostics_go_to_the_diagnostic_stream(netlists: Netlists) {
    let path = netlists.write(
        "top.v",
        b"sky130_fd_sc_hd__inv_1 u0 (); sky130_fd_sc_hd__fill_1 f0 ();",
    );
    let config = ScanConfig::builder().verbose(true).build();
    let out = run_on(std::slice::from_ref(&path), &config);

    out.result.unwrap();
    assert_eq!(out.stdout.lines().count(), 2);
    let name = path.display();
    assert_eq!(
        out.stderr,
        format!(
            "{name}:  sky130_fd_sc_hd__inv_1  => (Regular, 3, 2)\n\
             {name}:  sky130_fd_sc_hd__fill_1  => (Filler, 1, 0)\n"
        )
    );
}
