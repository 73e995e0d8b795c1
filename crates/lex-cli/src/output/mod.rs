use lex_query::query::Page;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a list page; tables show the rows plus a position footer.
pub fn render_page<T: Serialize>(page: &Page<T>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let rows = render_table(&page.items)?;
            Ok(format!(
                "{rows}\n\npage {} of {} ({} matching)",
                page.page,
                page.total_pages,
                page.total_filtered_count
            ))
        }
        OutputFormat::Json | OutputFormat::Raw => render(page, format),
    }
}

pub fn output_page<T: Serialize>(page: &Page<T>, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_page(page, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut rows = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                rows.push(vec![key, value_to_cell(&value)]);
            }
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

/// Nested objects collapse to their `name` (client references) or compact JSON.
fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Object(map) if map.get("name").is_some_and(Value::is_string) => {
            map.get("name").map(value_to_cell).unwrap_or_default()
        }
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{render, render_page, table::render_entity_table, value_to_cell};
    use crate::cli::OutputFormat;
    use lex_query::query::Page;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_tabular() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("id"));
        assert!(out.contains("value"));
    }

    #[test]
    fn page_table_has_rows_and_footer() {
        let page = Page {
            items: vec![Example { id: "c1", value: 1 }, Example { id: "c2", value: 2 }],
            total_filtered_count: 12,
            total_pages: 2,
            page: 2,
            page_size: 10,
        };
        let out = render_page(&page, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[2].starts_with("c1"));
        assert_eq!(lines.last().copied(), Some("page 2 of 2 (12 matching)"));
    }

    #[test]
    fn empty_page_footer_reports_zero_pages() {
        let page = Page {
            items: Vec::<Example>::new(),
            total_filtered_count: 0,
            total_pages: 0,
            page: 1,
            page_size: 10,
        };
        let out = render_page(&page, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)\n\npage 1 of 0 (0 matching)");
    }

    #[test]
    fn page_json_keeps_counts() {
        let page = Page {
            items: Vec::<Example>::new(),
            total_filtered_count: 0,
            total_pages: 0,
            page: 1,
            page_size: 10,
        };
        let out = render_page(&page, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["totalPages"], 0);
        assert_eq!(parsed["totalFilteredCount"], 0);
    }

    #[test]
    fn cells_flatten_client_references_and_tags() {
        assert_eq!(value_to_cell(&json!({ "id": "cl1", "name": "Joana" })), "Joana");
        assert_eq!(value_to_cell(&json!(["VIP", "rural"])), "VIP, rural");
        assert_eq!(value_to_cell(&json!(null)), "-");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "status", "title"];
        let rows = vec![
            vec!["c-1".to_string(), "filed".to_string(), "short".to_string()],
            vec![
                "c-200".to_string(),
                "administrative_appeal".to_string(),
                "a much longer title".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines.len() >= 4);
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("status"));
        assert!(lines[0].contains("title"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
