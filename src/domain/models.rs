use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// The one exported entity. Field declaration order is load-bearing:
/// serialization must emit `component`, `name`, `modules` in exactly
/// this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Opaque payload text; stored and forwarded byte-for-byte, never
    /// parsed as code.
    pub component: String,
    /// Non-empty, lowercase; doubles as the export file's base name.
    pub name: String,
    /// Ordered placeholder list; `[""]` in the default invocation.
    pub modules: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UnpackReport {
    pub file: String,
    pub name: String,
    pub path: String,
    pub component_bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub file: String,
    pub name: String,
    pub component_bytes: usize,
    pub module_count: usize,
}
