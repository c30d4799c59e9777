use std::fs;
use std::path::Path;

use lexique::application::{ExportConfig, Exporter};
use lexique::domain::{LexiqueError, WordRecord};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use serde_json::Value;
use tempfile::tempdir;

/// Writes a workbook whose first sheet holds `rows`; `None` leaves a cell blank.
fn write_workbook(path: &Path, rows: &[Vec<Option<&str>>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(text) = cell {
                worksheet.write_string(r as u32, c as u16, *text).unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

fn config(dir: &Path) -> ExportConfig {
    ExportConfig {
        input: dir.join("LexiqueFr.xlsx"),
        output: dir.join("LexiqueFr.json"),
        ..ExportConfig::default()
    }
}

fn read_output(path: &Path) -> Vec<WordRecord> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_duplicates_and_case_variants() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    write_workbook(
        &config.input,
        &[
            vec![Some("1"), Some("nom"), Some("chat")],
            vec![Some("2"), Some("nom"), Some("Chat")],
            vec![Some("3"), Some("nom"), Some("chien")],
            vec![Some("4"), Some("nom"), None],
            vec![Some("5"), Some("nom"), Some(" chat ")],
        ],
    );

    let summary = Exporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.written, 3);
    assert_eq!(summary.null_cells, 1);

    let words: Vec<String> = read_output(&config.output).into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["Chat", "chat", "chien"]);
}

#[test]
fn test_all_null_column_writes_empty_array() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    write_workbook(
        &config.input,
        &[
            vec![Some("a"), None, None, Some("note")],
            vec![Some("b"), None, None, Some("note")],
        ],
    );

    let summary = Exporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.written, 0);
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "[]");
}

#[test]
fn test_empty_sheet_writes_empty_array() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    write_workbook(&config.input, &[]);

    let summary = Exporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.written, 0);
    assert!(read_output(&config.output).is_empty());
}

#[test]
fn test_missing_input_leaves_output_untouched() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());

    let result = Exporter::new(config.clone()).run();
    assert!(matches!(result, Err(LexiqueError::FileAccess { .. })));
    assert!(!config.output.exists());

    fs::write(&config.output, "previous").unwrap();
    assert!(Exporter::new(config.clone()).run().is_err());
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "previous");
}

#[test]
fn test_unwritable_output() {
    let dir = tempdir().unwrap();
    let mut config = config(dir.path());
    config.output = dir.path().join("no-such-dir").join("LexiqueFr.json");
    write_workbook(&config.input, &[vec![None, None, Some("chat")]]);

    let result = Exporter::new(config).run();
    assert!(matches!(result, Err(LexiqueError::FileWrite { .. })));
}

#[test]
fn test_narrow_sheet_is_data_shape_error() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    write_workbook(&config.input, &[vec![Some("a"), Some("b")]]);

    let result = Exporter::new(config.clone()).run();
    assert!(matches!(result, Err(LexiqueError::DataShape { width: 2, column: 2, .. })));
    assert!(!config.output.exists());
}

#[test]
fn test_used_range_starting_at_word_column() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    write_workbook(
        &config.input,
        &[vec![None, None, None], vec![None, None, Some("zèbre")], vec![None, None, Some("Âne")]],
    );

    Exporter::new(config.clone()).run().unwrap();
    let words: Vec<String> = read_output(&config.output).into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["zèbre", "Âne"]);
}

#[test]
fn test_numbers_are_exported_as_text() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_number(0, 2, 42.0).unwrap();
    worksheet.write_number(1, 2, 2.5).unwrap();
    worksheet.write_string(2, 2, "abeille").unwrap();
    workbook.save(&config.input).unwrap();

    Exporter::new(config.clone()).run().unwrap();
    let words: Vec<String> = read_output(&config.output).into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["2.5", "42", "abeille"]);
}

#[test]
fn test_dates_are_exported_as_date_text() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let time_format = Format::new().set_num_format("hh:mm:ss");
    let date = ExcelDateTime::from_ymd(2025, 9, 9).unwrap();
    let time = ExcelDateTime::from_hms(10, 30, 0.0).unwrap();
    worksheet.write_datetime_with_format(0, 2, &date, &date_format).unwrap();
    worksheet.write_datetime_with_format(1, 2, &time, &time_format).unwrap();
    workbook.save(&config.input).unwrap();

    Exporter::new(config.clone()).run().unwrap();
    let words: Vec<String> = read_output(&config.output).into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["10:30:00", "2025-09-09 00:00:00"]);
}

#[test]
fn test_large_numbers_use_exponent_form() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_number(0, 2, 1e20).unwrap();
    workbook.save(&config.input).unwrap();

    Exporter::new(config.clone()).run().unwrap();
    let words: Vec<String> = read_output(&config.output).into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["1e+20"]);
}

#[test]
fn test_skip_header_keeps_first_word_below_blank_row_one() {
    let dir = tempdir().unwrap();
    let config = ExportConfig {
        skip_header: true,
        ..config(dir.path())
    };
    write_workbook(
        &config.input,
        &[vec![None, None, None], vec![None, None, Some("abeille")], vec![None, None, Some("abricot")]],
    );

    let summary = Exporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.written, 2);
    let words: Vec<String> = read_output(&config.output).into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["abeille", "abricot"]);
}

#[test]
fn test_output_schema_and_order() {
    let dir = tempdir().unwrap();
    let config = ExportConfig {
        skip_header: true,
        skip_blank: true,
        ..config(dir.path())
    };
    write_workbook(
        &config.input,
        &[
            vec![Some("id"), Some("type"), Some("Mot")],
            vec![Some("1"), Some("nom"), Some("Océan")],
            vec![Some("2"), Some("nom"), Some("abricot")],
            vec![Some("3"), Some("nom"), Some("   ")],
            vec![Some("4"), Some("nom"), Some("Abeille")],
            vec![Some("5"), Some("nom"), Some("abricot")],
            vec![Some("6"), Some("nom"), Some("mer")],
        ],
    );

    let summary = Exporter::new(config.clone()).run().unwrap();

    let content = fs::read_to_string(&config.output).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), summary.written);
    assert_eq!(array.len(), 4);

    for item in array {
        let object = item.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object["word"].is_string());
        assert_eq!(object["found"], Value::Bool(false));
    }

    let words: Vec<&str> = array.iter().map(|item| item["word"].as_str().unwrap()).collect();
    assert_eq!(words, vec!["Abeille", "abricot", "mer", "Océan"]);
    for pair in words.windows(2) {
        assert!(pair[0].to_lowercase() <= pair[1].to_lowercase());
    }

    assert!(content.contains("Océan"));
    assert!(content.starts_with("[\n  {\n    \"word\": "));
}

#[test]
fn test_csv_input() {
    let dir = tempdir().unwrap();
    let config = ExportConfig {
        input: dir.path().join("LexiqueFr.csv"),
        ..config(dir.path())
    };
    fs::write(&config.input, "1,nom,chien\n2,nom,\n3,nom,Chat\n4,nom,chien\n").unwrap();

    let summary = Exporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.written, 2);
    assert_eq!(summary.duplicates, 1);

    let words: Vec<String> = read_output(&config.output).into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["Chat", "chien"]);
}
