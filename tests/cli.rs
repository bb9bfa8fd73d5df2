use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

static BIN: &str = env!("CARGO_BIN_EXE_ip_filter");

const INPUT: &str = "1.2.3.4:2020-01-01 00:00:00\r\n\
                     1.2.3.5:2020-06-01 00:00:00\r\n\
                     bogus line\r\n\
                     1.2.3.6:2021-01-01 00:00:00\r\n";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ip_filter-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("input.txt"), INPUT).unwrap();
    dir
}

fn command_output(dir: &Path, extra: impl IntoIterator<Item = impl AsRef<OsStr>>) -> Output {
    Command::new(BIN)
        .arg("--file-log")
        .arg(dir.join("input.txt"))
        .arg("--file-output")
        .arg(dir.join("output.txt"))
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn filters_by_time() {
    let dir = scratch_dir("time");
    let output = command_output(
        &dir,
        ["--time-start", "2020-01-01 00:00:00", "--time-end", "2020-12-31 23:59:59"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(dir.join("output.txt")).unwrap(),
        "1.2.3.4:2020-01-01 00:00:00\n1.2.3.5:2020-06-01 00:00:00\n"
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[cfg(target_endian = "little")]
#[test]
fn filters_by_address_start() {
    let dir = scratch_dir("address");
    let output = command_output(
        &dir,
        [
            "--time-start",
            "01.01.2020",
            "--time-end",
            "31.12.2020",
            "--address-start",
            "1.2.3.5",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(dir.join("output.txt")).unwrap(),
        "1.2.3.5:2020-06-01 00:00:00\n"
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn inverted_range_prints_message() {
    let dir = scratch_dir("inverted");
    let output = command_output(
        &dir,
        ["--time-start", "2021-01-01", "--time-end", "2020-01-01"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("time-start must not be later than time-end"));
    assert!(!dir.join("output.txt").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_log_prints_path() {
    let dir = scratch_dir("missing");
    fs::remove_file(dir.join("input.txt")).unwrap();
    let output = command_output(
        &dir,
        ["--time-start", "2020-01-01", "--time-end", "2020-12-31"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("does not exist"));
    assert!(stdout.contains("input.txt"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_arguments_are_rejected_before_running() {
    let dir = scratch_dir("args");
    for extra in [
        vec!["--time-start", "2020-01-01", "--time-end", "2020-12-31", "--address-start", "333.444.555.666"],
        vec!["--time-start", "2020-01-01", "--time-end", "2020-12-31", "--address-mask", "165"],
        vec!["--time-start", "00.00.0000", "--time-end", "125.44.9999999"],
    ] {
        let output = command_output(&dir, extra);
        assert_eq!(output.status.code(), Some(2));
        assert!(!output.stderr.is_empty());
        assert!(!dir.join("output.txt").exists());
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn config_file_sets_newline() {
    let dir = scratch_dir("config");
    fs::write(dir.join("ipfilter.toml"), "newline = \"\\r\\n\"\n").unwrap();
    let output = command_output(
        &dir,
        [
            "--time-start",
            "2020-06-01",
            "--time-end",
            "2020-06-01",
            "--config",
            dir.join("ipfilter.toml").to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(dir.join("output.txt")).unwrap(),
        "1.2.3.5:2020-06-01 00:00:00\r\n"
    );
    fs::remove_dir_all(&dir).unwrap();
}
