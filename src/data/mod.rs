/// Data layer: window extraction, output and binning.
///
/// Architecture:
/// ```text
///   raw instrument log
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  open file → BufReader
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  window   │  Seeking → InWindow → Done over the state column
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ Extraction  │  window, series, tail
///   └────────────┘
///      │       │
///      ▼       ▼
///  ┌────────┐ ┌───────────┐
///  │ writer │ │ histogram │  one value per line / unit-width bins
///  └────────┘ └───────────┘
/// ```

pub mod error;
pub mod histogram;
pub mod loader;
pub mod model;
pub mod window;
pub mod writer;
