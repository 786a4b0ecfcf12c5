use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pairsofwords-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pairsofwords"))
}

#[test]
fn writes_sorted_report_and_summary() {
    let dir = scratch_dir("report");
    let a = dir.join("a.txt");
    let b = dir.join("b.txt");
    fs::write(&a, "one fish two fish\nred fish blue fish\n").unwrap();
    fs::write(&b, "one fish two fish").unwrap();
    let out = dir.join("out.txt");

    let status = bin()
        .arg("-2")
        .arg("-o")
        .arg(&out)
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(status.status.success(), "{:?}", status);

    let report = fs::read_to_string(&out).unwrap();
    assert_eq!(report, "         2 fish two\n         2 one fish\n");
    let stdout = String::from_utf8(status.stdout).unwrap();
    assert!(stdout.contains("Process finished, final table had"));
    assert!(stdout.contains("Process completed in"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_fails() {
    let dir = scratch_dir("missing");
    let output = bin()
        .arg("-o")
        .arg(dir.join("out.txt"))
        .arg(dir.join("nope.txt"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("was not found"), "{stderr}");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_table_parameters_fail() {
    let dir = scratch_dir("params");
    let input = dir.join("in.txt");
    fs::write(&input, "a b c").unwrap();
    let output = bin()
        .args(["--initial-capacity", "0", "-o"])
        .arg(dir.join("out.txt"))
        .arg(&input)
        .output()
        .unwrap();
    assert!(!output.status.success());
    fs::remove_dir_all(&dir).unwrap();
}
