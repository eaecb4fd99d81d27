/// View layer
///
/// - `style.rs` - status descriptors and container styles
/// - `card.rs` - a single catalog entry with its expand toggle
/// - `sections.rs` - header, counters, filters, banner, legend, footer

pub mod style;
pub mod card;
pub mod sections;
