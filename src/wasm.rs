use crate::errors::ParseError;
use crate::grid::{Grid, GridError};
use crate::log::init_logger;
use crate::puzzle::Puzzle;
use crate::report::{build_report, Report};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G002", "P001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<ParseError> for WasmError {
    fn from(e: ParseError) -> Self {
        // For InvalidGrid, report the nested GridError
        match e {
            ParseError::InvalidGrid(ge) => WasmError::from(ge),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(|s| s.to_string()),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// Convert a report into a plain JS object (not a `Map`), keys in word order.
fn report_to_js(report: &Report) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    report.serialize(&serializer).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize report".to_string(),
            details: "The report could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

fn string_array(value: JsValue, name: &str) -> Result<Vec<String>, WasmError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("{name} must be string[]: {e}"),
        description: "Invalid argument format".to_string(),
        details: format!("The {name} parameter must be a JavaScript array of strings."),
        help: Some("Ensure you're passing a valid string array, e.g., ['CAT', 'XXX']".to_string()),
    })
}

/// JS entry: (grid_rows: string[], words: string[]) -> { [word]: boolean }
///
/// Each string in `grid_rows` is one row, one cell per character.
#[wasm_bindgen]
pub fn find_words_wasm(grid_rows: JsValue, words: JsValue) -> Result<JsValue, JsValue> {
    let grid_rows = string_array(grid_rows, "grid_rows")?;
    let words = string_array(words, "words")?;

    let grid = Grid::from_rows(&grid_rows).map_err(WasmError::from)?;
    report_to_js(&build_report(&grid, &words))
}

/// JS entry: (text: string, separator?: string) -> { [word]: boolean }
///
/// `text` is a whole puzzle definition, as the CLI reads from a file.
#[wasm_bindgen]
pub fn solve_puzzle_wasm(text: &str, separator: Option<String>) -> Result<JsValue, JsValue> {
    let separator = separator.as_deref().unwrap_or(crate::puzzle::DEFAULT_SEPARATOR);
    let puzzle = Puzzle::parse_from_str(text, separator).map_err(WasmError::from)?;
    report_to_js(&puzzle.solve())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_unwraps_grid_error() {
        let err = WasmError::from(ParseError::InvalidGrid(GridError::Empty));
        assert_eq!(err.code, "G001");
        assert!(err.help.is_some());
    }

    #[test]
    fn test_missing_separator_error() {
        let err = WasmError::from(ParseError::MissingSeparator { separator: "---".to_string() });
        assert_eq!(err.code, "P001");
        assert!(err.message.contains("---"));
    }
}
