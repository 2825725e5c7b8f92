// Rendering records into injected containers

use needle_table_wasm::dom::{Container, MemoryContainer, MemoryHost};
use needle_table_wasm::html_table::render_rows;
use needle_table_wasm::sources::{JsonSource, StaticSource};
use needle_table_wasm::{mock_records, render, Record, TableError, TableRenderer};

fn cells(html: &str) -> Vec<String> {
    html.split("<td>")
        .skip(1)
        .map(|part| part.split("</td>").next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_one_row_per_record() {
    for n in [0usize, 1, 2, 9, 50] {
        let records: Vec<Record> = (0..n).map(|i| Record::new(format!("c{}", i), i as u64)).collect();
        let html = render_rows(&records);
        assert_eq!(html.matches("<tr>").count(), n, "row count for {} records", n);
        assert_eq!(html.matches("</tr>").count(), n);
    }
}

#[test]
fn test_two_record_scenario() {
    let container = MemoryContainer::new();
    render(&[Record::new("c1", 5), Record::new("c2", 2)], &container);

    assert_eq!(cells(&container.content()), vec!["c1", "5", "c2", "2"]);
}

#[test]
fn test_duplicates_are_not_collapsed() {
    let records = vec![Record::new("c2", 2), Record::new("c2", 2)];
    assert_eq!(cells(&render_rows(&records)), vec!["c2", "2", "c2", "2"]);
}

#[test]
fn test_mock_data_renders_in_order() {
    let container = MemoryContainer::new();
    render(&mock_records(), &container);

    let categories: Vec<String> = cells(&container.content()).into_iter().step_by(2).collect();
    assert_eq!(
        categories,
        vec!["c1", "c2", "c3", "c4", "h2", "g5", "c9", "d2", "f5"]
    );
}

#[test]
fn test_poll_replaces_previous_content() {
    let mut host = MemoryHost::new();
    let container = host.add_container("Needle-data");
    container.replace_content("<tr><td>stale</td><td>0</td></tr>");

    TableRenderer::new(|| vec![Record::new("g5", 7)])
        .poll(&host, "Needle-data")
        .unwrap();

    assert_eq!(container.content(), "<tr><td>g5</td><td>7</td></tr>");
}

#[test]
fn test_poll_unknown_container() {
    let mut host = MemoryHost::new();
    host.add_container("other");

    let result = TableRenderer::new(StaticSource::mock()).poll(&host, "Needle-data");
    assert_eq!(result, Err(TableError::ContainerNotFound("Needle-data".to_string())));
}

#[test]
fn test_json_source_end_to_end() {
    let container = MemoryContainer::new();
    let renderer = TableRenderer::new(JsonSource::new(r#"{"1": 3, "10": 1}"#));

    let rows = renderer.refresh(&container).unwrap();

    assert_eq!(rows, 11);
    let html = container.content();
    assert!(html.starts_with("<tr><td>BV75-4</td><td>0</td></tr><tr><td>C-1</td><td>3</td></tr>"));
    assert!(html.ends_with("<tr><td>UR-6</td><td>1</td></tr>"));
}
