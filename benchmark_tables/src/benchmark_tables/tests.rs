//!
//! Tests for the benchmark tables binary.
//!

#![cfg(test)]

use std::path::Path;
use std::path::PathBuf;

use super::arguments::Arguments;

const HEADER: &str = " Measuring Number \t coreVoltage \t frequency \t averageHashRate \t averageTemperature \t efficiencyJHT \t averageVRTemp";

fn convert(directory: &Path, file_name: &str, report: &str) -> anyhow::Result<PathBuf> {
    let input_path = directory.join(file_name);
    std::fs::write(input_path.as_path(), report)?;
    let arguments = Arguments {
        quiet: true,
        no_pause: true,
        output_directory: Some(directory.to_path_buf()),
        input_path: Some(input_path),
        ..Default::default()
    };
    super::main_inner(&arguments)?;
    Ok(directory.join(format!(
        "{}.{}",
        file_name.split('.').next().unwrap_or(file_name),
        benchmark_tables::EXTENSION_TXT
    )))
}

#[test]
fn convert_single_list() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let report = r#"{
        "all_results": [
            { "coreVoltage": 700, "frequency": 500, "averageHashRate": 100.456,
              "averageTemperature": 60, "efficiencyJTH": 20.005, "averageVRTemp": 45 },
            { "coreVoltage": 750, "frequency": 525, "averageHashRate": 110.1,
              "averageTemperature": 62.375, "efficiencyJTH": 19.5, "averageVRTemp": 47.25 }
        ],
        "most_efficient": [],
        "top_performers": []
    }"#;
    let output_path =
        convert(directory.path(), "run1.json", report).expect("Failed to convert the report");

    let contents = std::fs::read_to_string(output_path).expect("Failed to read the text report");
    let expected = [
        "",
        "ALL RESULTS",
        HEADER,
        "        1         \t     700     \t    500    \t     100.46      \t         60         \t     20.01     \t      45",
        "        2         \t     750     \t    525    \t      110.1      \t       62.38        \t     19.5      \t     47.25",
        "",
        "",
        "MOST EFFICIENT",
        HEADER,
        "",
        "",
        "TOP PERFORMANCE",
        HEADER,
        "",
    ]
    .join("\n");
    assert_eq!(contents, expected);
}

#[test]
fn convert_merges_selected_measurements() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let report = r#"{
        "all_results": [
            { "coreVoltage": 1150, "frequency": 490, "averageHashRate": 512.3,
              "averageTemperature": 58.1, "efficiencyJTH": 19.7, "averageVRTemp": 49 }
        ],
        "most_efficient": [
            { "coreVoltage": 1150, "frequency": 490, "averageHashRate": 512.3,
              "averageTemperature": 58.1, "efficiencyJTH": 19.7, "averageVRTemp": 49 },
            { "coreVoltage": 1100, "frequency": 450, "averageHashRate": 470.0,
              "averageTemperature": 55.0, "efficiencyJTH": 17.914, "averageVRTemp": 46 }
        ],
        "top_performers": [
            { "coreVoltage": 1100, "frequency": 450, "averageHashRate": 470,
              "averageTemperature": 55, "efficiencyJTH": 17.914, "averageVRTemp": 46 },
            { "coreVoltage": 1250, "frequency": 575, "averageHashRate": 620.777,
              "averageTemperature": 66.5, "efficiencyJTH": 21.2, "averageVRTemp": 58 }
        ]
    }"#;
    let output_path =
        convert(directory.path(), "sweep.json", report).expect("Failed to convert the report");

    let contents = std::fs::read_to_string(output_path).expect("Failed to read the text report");
    let expected = [
        "",
        "ALL RESULTS",
        HEADER,
        "        1         \t    1150     \t    490    \t      512.3      \t        58.1        \t     19.7      \t      49",
        "        2         \t    1100     \t    450    \t       470       \t         55         \t     17.91     \t      46",
        "        3         \t    1250     \t    575    \t     620.78      \t        66.5        \t     21.2      \t      58",
        "",
        "",
        "MOST EFFICIENT",
        HEADER,
        "        1         \t    1150     \t    490    \t      512.3      \t        58.1        \t     19.7      \t      49",
        "        2         \t    1100     \t    450    \t       470       \t         55         \t     17.91     \t      46",
        "",
        "",
        "TOP PERFORMANCE",
        HEADER,
        "        1         \t    1100     \t    450    \t       470       \t         55         \t     17.91     \t      46",
        "        2         \t    1250     \t    575    \t     620.78      \t        66.5        \t     21.2      \t      58",
        "",
    ]
    .join("\n");
    assert_eq!(contents, expected);
}

#[test]
fn convert_missing_collections() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let report = r#"{
        "all_results": [
            { "coreVoltage": 700, "frequency": 500, "averageHashRate": 100,
              "averageTemperature": 60, "efficiencyJTH": 20, "averageVRTemp": 45 }
        ]
    }"#;
    let output_path =
        convert(directory.path(), "partial.json", report).expect("Failed to convert the report");

    let contents = std::fs::read_to_string(output_path).expect("Failed to read the text report");
    assert!(contents.contains(format!("\nMOST EFFICIENT\n{HEADER}\n\n").as_str()));
    assert!(contents.ends_with(format!("\nTOP PERFORMANCE\n{HEADER}\n").as_str()));
}

#[test]
fn convert_overwrites_existing() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    std::fs::write(directory.path().join("run2.txt"), "stale").expect("Failed to write a file");
    let output_path =
        convert(directory.path(), "run2.json", "{}").expect("Failed to convert the report");

    let contents = std::fs::read_to_string(output_path).expect("Failed to read the text report");
    assert!(contents.starts_with("\nALL RESULTS\n"));
    assert!(!contents.contains("stale"));
}

#[test]
fn malformed_report_is_rejected() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let error = convert(directory.path(), "broken.json", "{ \"all_results\": ")
        .expect_err("Must be rejected");
    assert!(error.to_string().contains("parsing"));
    assert!(!directory.path().join("broken.txt").exists());
}

#[test]
fn unwritable_output_is_rejected() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let input_path = directory.path().join("run3.json");
    std::fs::write(input_path.as_path(), "{}").expect("Failed to write a file");
    let arguments = Arguments {
        quiet: true,
        no_pause: true,
        output_directory: Some(directory.path().join("missing")),
        input_path: Some(input_path),
        ..Default::default()
    };
    let error = super::main_inner(&arguments).expect_err("Must be rejected");
    assert!(error.to_string().contains("writing"));
}

#[test]
fn empty_path_is_cancelled() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let arguments = Arguments {
        quiet: true,
        no_pause: true,
        output_directory: Some(directory.path().to_path_buf()),
        input_path: Some(PathBuf::new()),
        ..Default::default()
    };
    super::main_inner(&arguments).expect("Cancellation is not an error");
    let entries = std::fs::read_dir(directory.path())
        .expect("Failed to read the temporary directory")
        .count();
    assert_eq!(entries, 0);
}

#[test]
fn summary_reports_collection_sizes() {
    let report: benchmark_tables::Report = serde_json::from_str(
        r#"{
            "all_results": [
                { "coreVoltage": 1150, "frequency": 490, "averageHashRate": 512.3,
                  "averageTemperature": 58.1, "efficiencyJTH": 19.7, "averageVRTemp": 49 }
            ],
            "most_efficient": [
                { "coreVoltage": 1150, "frequency": 490, "averageHashRate": 512.3,
                  "averageTemperature": 58.1, "efficiencyJTH": 19.7, "averageVRTemp": 49 },
                { "coreVoltage": 1100, "frequency": 450, "averageHashRate": 470,
                  "averageTemperature": 55, "efficiencyJTH": 17.914, "averageVRTemp": 46 }
            ]
        }"#,
    )
    .expect("Failed to parse the report");
    assert_eq!(
        super::report_summary(&report),
        "1 in all_results, 2 in most_efficient, 0 in top_performers, 2 after merging"
    );
}

#[test]
fn verbose_conversion() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let input_path = directory.path().join("run4.json");
    std::fs::write(input_path.as_path(), "{}").expect("Failed to write a file");
    let arguments = Arguments {
        verbose: true,
        no_pause: true,
        output_directory: Some(directory.path().to_path_buf()),
        input_path: Some(input_path),
        ..Default::default()
    };
    super::main_inner(&arguments).expect("Failed to convert the report");
    assert!(directory.path().join("run4.txt").exists());
}
