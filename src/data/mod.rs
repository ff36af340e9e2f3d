/// Data layer: record types, parsing, smoothing, loading and export.
///
/// Architecture:
/// ```text
///   training .log (bytes)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  strict UTF-8 decode, extension check
///   └──────────┘
///        │ lines
///        ▼
///   ┌──────────┐
///   │  parser   │  regex search per line → MetricTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  smooth   │  trailing rolling mean → SmoothedTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  raw + MA columns → CSV
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
pub mod parser;
pub mod smooth;
