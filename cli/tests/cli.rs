use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::process::Command;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn data_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
}

/// Width and height from the IHDR chunk of a PNG file.
fn png_dimensions(path: &Path) -> (u32, u32) {
    let content = std::fs::read(path).unwrap();
    assert_eq!(&PNG_MAGIC[..], &content[0..8]);
    let width = u32::from_be_bytes([content[16], content[17], content[18], content[19]]);
    let height = u32::from_be_bytes([content[20], content[21], content[22], content[23]]);
    (width, height)
}

fn interaxplot() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("interaxplot")?;
    cmd.env_remove("INTERAXPLOT_DATA_DIR");
    Ok(cmd)
}

#[test]
fn render_default_output() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempfile::tempdir()?;
    let mut cmd = interaxplot()?;
    cmd.current_dir(workdir.path()).arg(data_dir("data"));
    cmd.assert().success();

    let output = workdir.path().join("edges.png");
    assert_eq!((2000, 1000), png_dimensions(&output));
    Ok(())
}

#[test]
fn render_to_given_output() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempfile::tempdir()?;
    let output = workdir.path().join("interactions.png");

    let mut cmd = interaxplot()?;
    cmd.arg(data_dir("data")).arg("-o").arg(&output).arg("--debug");
    cmd.assert().success();

    assert!(output.is_file());
    Ok(())
}

#[test]
fn data_dir_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempfile::tempdir()?;
    let output = workdir.path().join("edges.png");

    let mut cmd = interaxplot()?;
    cmd.env("INTERAXPLOT_DATA_DIR", data_dir("data-edges-only"))
        .env("INTERAXPLOT__RENDER__DPI", "10")
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    assert_eq!((200, 100), png_dimensions(&output));
    Ok(())
}

#[test]
fn settings_from_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempfile::tempdir()?;
    let config_file = workdir.path().join("interaxplot.toml");
    std::fs::write(
        &config_file,
        r##"
[output]
file = "from-config.png"

[render]
width_inches = 4.0
height_inches = 3.0
dpi = 20
edge_colormap = "Greens"
"##,
    )?;

    let mut cmd = interaxplot()?;
    cmd.current_dir(workdir.path())
        .arg("-c")
        .arg(&config_file)
        .arg(data_dir("data"));
    cmd.assert().success();

    assert_eq!(
        (80, 60),
        png_dimensions(&workdir.path().join("from-config.png"))
    );
    Ok(())
}

#[test]
fn invalid_data_dir() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempfile::tempdir()?;
    let mut cmd = interaxplot()?;
    cmd.current_dir(workdir.path())
        .arg(workdir.path().join("does-not-exist"));
    cmd.assert().code(3);
    assert!(!workdir.path().join("edges.png").exists());
    Ok(())
}

#[test]
fn missing_report_file() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempfile::tempdir()?;
    // an existing directory without any reports
    let mut cmd = interaxplot()?;
    cmd.current_dir(workdir.path()).arg(workdir.path());
    let output = cmd.output()?;

    assert_eq!(Some(1), output.status.code());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("agent_report.txt"), "{}", stderr);
    Ok(())
}

#[test]
fn malformed_weight() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempfile::tempdir()?;
    let mut cmd = interaxplot()?;
    cmd.current_dir(workdir.path()).arg(data_dir("data-malformed"));
    let output = cmd.output()?;

    assert_eq!(Some(1), output.status.code());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("invalid weight \"many\""),
        "unexpected error output: {}",
        stderr
    );
    assert!(stderr.contains("line 2"), "{}", stderr);
    assert!(!workdir.path().join("edges.png").exists());
    Ok(())
}

#[test]
fn missing_data_dir_argument() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = interaxplot()?;
    cmd.assert().failure();
    Ok(())
}
