//! Integration tests for the CSV output format

use csv::ReaderBuilder;
use unit_export::core::export::CsvExporter;
use unit_export::core::transform::flatten_users;
use unit_export::domain::{UnitRecord, UserRecord, EXPORT_HEADER};

fn export_to_string(users: Vec<UserRecord>) -> String {
    let mut exporter = CsvExporter::from_writer(Vec::new()).unwrap();
    exporter.write_rows(flatten_users(users)).unwrap();
    String::from_utf8(exporter.finish().unwrap()).unwrap()
}

fn parse(contents: &str) -> Vec<Vec<String>> {
    ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_reader(contents.as_bytes())
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_delimiter_and_quote_characters_survive_parsing() {
    let contents = export_to_string(vec![UserRecord::new("Doe; Jane").with_unit(
        UnitRecord::new("Station \"North\"", "Volunteer", "N;1"),
    )]);

    assert_eq!(
        contents,
        "User;Name;Code;Type\r\n\"Doe; Jane\";\"Station \"\"North\"\"\";\"N;1\";Volunteer\r\n"
    );

    let records = parse(&contents);
    assert_eq!(records[0], EXPORT_HEADER);
    assert_eq!(records[1], ["Doe; Jane", "Station \"North\"", "N;1", "Volunteer"]);
}

#[test]
fn test_non_ascii_and_empty_fields_are_preserved() {
    let contents = export_to_string(vec![
        UserRecord::new("Jürgen Müller").with_unit(UnitRecord::new("Löschzug Süd", "", "")),
    ]);

    let records = parse(&contents);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], ["Jürgen Müller", "Löschzug Süd", "", ""]);
}

#[test]
fn test_column_order_is_user_name_code_type() {
    let contents = export_to_string(vec![
        UserRecord::new("Alice").with_unit(UnitRecord::new("Fire", "Volunteer", "F1"))
    ]);

    let records = parse(&contents);
    assert_eq!(records[0], ["User", "Name", "Code", "Type"]);
    assert_eq!(records[1], ["Alice", "Fire", "F1", "Volunteer"]);
}

#[test]
fn test_embedded_newline_is_quoted() {
    let contents = export_to_string(vec![
        UserRecord::new("Alice").with_unit(UnitRecord::new("Fire\nBrigade", "Volunteer", "F1"))
    ]);

    assert!(contents.contains("\"Fire\nBrigade\""));
    let records = parse(&contents);
    assert_eq!(records[1][1], "Fire\nBrigade");
}
