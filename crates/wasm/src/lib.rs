use gantt_viz_core::options::GanttOptions;
use gantt_viz_core::parsers::{parse_query_result, parse_rows};
use gantt_viz_core::{DEFAULT_ROWS, VISUALIZATION_NAME, VISUALIZATION_TYPE};
use wasm_bindgen::prelude::*;

/// Build the chart configuration for a query result and stored options.
///
/// Both sides of the boundary are JSON strings: `rows_json` is the query
/// result (`columns` + `rows`), `options_json` the stored options (partial
/// options merge over the defaults). Returns the configuration object the
/// host passes to its gantt renderer.
#[wasm_bindgen]
pub fn build_chart(rows_json: &str, options_json: &str) -> Result<String, JsError> {
    let result =
        parse_query_result(rows_json.as_bytes()).map_err(|e| JsError::new(&e.to_string()))?;
    let options: GanttOptions =
        serde_json::from_str(options_json).map_err(|e| JsError::new(&e.to_string()))?;
    let records = parse_rows(&result, &options).map_err(|e| JsError::new(&e.to_string()))?;
    let config = gantt_viz_core::build_chart(&records, &options)
        .map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&config).map_err(|e| JsError::new(&e.to_string()))
}

/// Default options as JSON, the base the editor merges stored options over.
#[wasm_bindgen]
pub fn default_options() -> Result<String, JsError> {
    serde_json::to_string(&GanttOptions::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Column names of a query result, for the editor's project-column
/// selector. Returns a JSON string array.
#[wasm_bindgen]
pub fn column_names(rows_json: &str) -> Result<String, JsError> {
    let result =
        parse_query_result(rows_json.as_bytes()).map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&result.column_names()).map_err(|e| JsError::new(&e.to_string()))
}

/// Registration descriptor for the host's visualization registry.
#[wasm_bindgen]
pub fn descriptor() -> Result<String, JsError> {
    let value = serde_json::json!({
        "type": VISUALIZATION_TYPE,
        "name": VISUALIZATION_NAME,
        "defaultRows": DEFAULT_ROWS,
    });
    serde_json::to_string(&value).map_err(|e| JsError::new(&e.to_string()))
}
