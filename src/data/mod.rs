/// Data layer: core types, loading, filtering, selection and sampling.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet        built-in sample set
///        │                               │
///        ▼                               ▼
///   ┌──────────┐                  ┌──────────┐
///   │  loader   │  parse records   │ builtin  │
///   └──────────┘                  └──────────┘
///        └───────────────┬───────────────┘
///                        ▼
///                ┌─────────────┐
///                │ PostDataset │  Vec<ScoredPost>
///                └─────────────┘
///                        │
///                        ▼
///   ┌───────────┐   ┌──────────┐
///   │ selection │──▶│  filter   │  score range → filtered indices
///   └───────────┘   └──────────┘
///                        │
///                        ▼
///                  ┌──────────┐
///                  │ sampler  │  evenly spaced order statistics → cards
///                  └──────────┘
/// ```

pub mod builtin;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sampler;
pub mod selection;
