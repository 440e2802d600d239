/// Classification layer: wire types, HTTP client, and label resolution.
///
/// Architecture:
/// ```text
///   image bytes
///        │
///        ▼
///   ┌──────────┐
///   │  client   │  multipart POST → validated JSON
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────────┐
///   │ ClassificationResult │  predicted_class, confidence, probabilities
///   └──────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  labels   │  raw label → LabelDescriptor (name, emoji, status)
///   └──────────┘
/// ```

pub mod client;
pub mod labels;
pub mod model;
