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

/// Print a collection response. Tables show only `rows`; json/raw keep the
/// full envelope (including `total`).
pub fn output_listing<T: Serialize, R: Serialize>(
    envelope: &T,
    rows: &[R],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => output(&rows, format),
        OutputFormat::Json | OutputFormat::Raw => output(envelope, format),
    }
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            // serde_json maps are sorted, so rows come out alphabetical.
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(table::render(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            table_options(),
        )),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render(&["value"], &rows, table_options());
    }

    // Union of keys across rows; each row contributes its keys sorted.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
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

    use super::{render, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Job {
        job_id: &'static str,
        status: &'static str,
        items_collected: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Job {
            job_id: "job-1",
            status: "queued",
            items_collected: 0,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["job_id"], "job-1");
    }

    #[test]
    fn raw_render_is_single_line() {
        let value = Job {
            job_id: "job-1",
            status: "queued",
            items_collected: 3,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_sorts_columns() {
        let jobs = vec![
            Job {
                job_id: "job-1",
                status: "queued",
                items_collected: 0,
            },
            Job {
                job_id: "job-22",
                status: "completed",
                items_collected: 100,
            },
        ];
        let out = render(&jobs, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        let items_col = lines[0].find("items_collected").unwrap();
        let job_col = lines[0].find("job_id").unwrap();
        let status_col = lines[0].find("status").unwrap();
        assert!(items_col < job_col);
        assert!(job_col < status_col);
        assert!(lines[3].contains("completed"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let empty: Vec<Job> = Vec::new();
        assert_eq!(render(&empty, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn string_arrays_are_joined() {
        assert_eq!(value_to_cell(&json!(["r/politics", "r/climate"])), "r/politics, r/climate");
        assert_eq!(value_to_cell(&json!([1, 2])), "[1,2]");
        assert_eq!(value_to_cell(&json!(null)), "-");
    }
}
