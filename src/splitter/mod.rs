//! Chapter detection and grouping.
//!
//! ```text
//! text + BoundaryRule -> segment() -> [Segment] -> batch() -> [Batch]
//!                                                     |
//!                                        extract_label(first/last heading)
//! ```

pub mod batcher;
pub mod label;
pub mod presets;
pub mod rule;
pub mod segmenter;

pub use batcher::{Batch, batch};
pub use presets::{DEFAULT_PRESET, Preset, PresetCatalog};
pub use rule::RegexRule;
pub use segmenter::{preface, segment};

/// Default number of chapters per output file.
pub const DEFAULT_GROUP_SIZE: usize = 5;

/// Group sizes offered by the interactive menu.
pub const GROUP_SIZE_CHOICES: [usize; 6] = [5, 10, 20, 30, 50, 100];
