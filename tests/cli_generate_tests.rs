//! End-to-end tests for `periodic-samples generate`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

mod fixtures;
use fixtures::*;

#[test]
fn test_generate_from_input_succeeds() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_basic());
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("table.html");

    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            payload_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    ));

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generate should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(&format!("Generated {} successfully.", out_path.display())),
        "stdout: {stdout}"
    );

    let html = read(&out_path);
    assert!(html.starts_with("<!doctype html>"));
    assert_eq!(html.matches(r#"class="cell element""#).count(), 118);
    assert_eq!(html.matches(r#"class="quarter""#).count(), 118 * 4);
    // Color back-filled from labelColors
    assert!(html.contains(
        r#"style="background:#00ff00" data-state="in-arrivo" title="in arrivo | A1""#
    ));
    // Numeric value stringified, null state treated as absent
    assert!(html.contains(r#"data-state="" title="17""#));
}

#[test]
fn test_generate_legend_follows_explicit_order() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_basic());
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("table.html");

    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            payload_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    ));
    assert_eq!(output.status.code(), Some(0));

    let html = read(&out_path);
    assert_eq!(html.matches(r#"class="legend-item""#).count(), 2);
    let arrivo = html.find(r#"data-state="in-arrivo"><span"#).unwrap();
    let comprare = html.find(r#"data-state="da-comprare"><span"#).unwrap();
    assert!(arrivo < comprare);
}

#[test]
fn test_generate_empty_payload_renders_empty_grid() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_empty());
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("empty.html");

    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            payload_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    ));

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html = read(&out_path);
    assert_eq!(html.matches(r#"class="legend-item""#).count(), 0);
    assert_eq!(html.matches(r#"style="background:#eaeaea""#).count(), 118 * 4);
    assert_eq!(html.matches(r#"data-state="""#).count(), 118 * 4);
}

#[test]
fn test_generate_is_deterministic() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_basic());
    let config_dir = temp_config_dir();
    let first = config_dir.path().join("first.html");
    let second = config_dir.path().join("second.html");

    for out in [&first, &second] {
        let output = run(&mut isolated_command(
            &[
                "generate",
                "--input",
                payload_path.to_str().unwrap(),
                "--output",
                out.to_str().unwrap(),
            ],
            config_dir.path(),
        ));
        assert_eq!(output.status.code(), Some(0));
    }

    assert_eq!(read(&first), read(&second));
}

#[test]
fn test_generate_title_flag() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_empty());
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("table.html");

    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            payload_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--title",
            "Lab <B>",
        ],
        config_dir.path(),
    ));
    assert_eq!(output.status.code(), Some(0));

    let html = read(&out_path);
    assert!(html.contains("<title>Lab &lt;B&gt;</title>"));
    assert!(html.contains("<h1>Lab &lt;B&gt;</h1>"));
}

#[test]
fn test_generate_dump_json_preserves_payload() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_basic());
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("table.html");
    let dump_path = config_dir.path().join("dump.json");

    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            payload_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--dump-json",
            dump_path.to_str().unwrap(),
        ],
        config_dir.path(),
    ));
    assert_eq!(output.status.code(), Some(0));

    let dumped: serde_json::Value = serde_json::from_str(&read(&dump_path)).unwrap();
    assert_eq!(dumped, payload_basic());

    // The dump can be rendered again offline
    let again = config_dir.path().join("again.html");
    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            dump_path.to_str().unwrap(),
            "--output",
            again.to_str().unwrap(),
        ],
        config_dir.path(),
    ));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read(&out_path), read(&again));
}

#[test]
fn test_generate_uses_config_defaults() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_empty());
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("from-config.html");

    let output = run(&mut isolated_command(
        &[
            "config",
            "set",
            "--output",
            out_path.to_str().unwrap(),
            "--title",
            "Configured title",
        ],
        config_dir.path(),
    ));
    assert_eq!(output.status.code(), Some(0));

    let output = run(&mut isolated_command(
        &["generate", "--input", payload_path.to_str().unwrap()],
        config_dir.path(),
    ));
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(read(&out_path).contains("<title>Configured title</title>"));
}

#[test]
fn test_generate_without_source_fails_validation() {
    let config_dir = temp_config_dir();

    let output = run(&mut isolated_command(&["generate"], config_dir.path()));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("--input"), "stderr: {stderr}");
}

#[test]
fn test_generate_input_with_api_url_fails_validation() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_empty());
    let config_dir = temp_config_dir();

    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            payload_path.to_str().unwrap(),
            "--api-url",
            "https://example.invalid/exec",
        ],
        config_dir.path(),
    ));

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_generate_malformed_payload_fails_fetch() {
    let (payload_path, payload_temp) = create_temp_text_file(r#"{"rows": []}"#);
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("table.html");

    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            payload_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    ));

    assert_eq!(output.status.code(), Some(3));
    assert!(!out_path.exists(), "No document should be written");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("elements"), "stderr: {stderr}");
}

#[test]
fn test_generate_invalid_json_fails_fetch() {
    let (payload_path, payload_temp) = create_temp_text_file("<html>\nnot json\n</html>");
    let config_dir = temp_config_dir();

    let output = run(&mut isolated_command(
        &["generate", "--input", payload_path.to_str().unwrap()],
        config_dir.path(),
    ));

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_generate_missing_input_file_is_io_error() {
    let config_dir = temp_config_dir();
    let missing = config_dir.path().join("missing.json");

    let output = run(&mut isolated_command(
        &["generate", "--input", missing.to_str().unwrap()],
        config_dir.path(),
    ));

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_generate_unwritable_output_is_io_error() {
    let (payload_path, payload_temp) = create_temp_payload_file(&payload_empty());
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("no-such-dir").join("table.html");

    let output = run(&mut isolated_command(
        &[
            "generate",
            "--input",
            payload_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    ));

    assert_eq!(output.status.code(), Some(2));
    assert!(!out_path.exists());
}
