// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive session.
//
// Module responsibilities:
// - `model`: Catalog data shapes and the JSON loader.
// - `currency`: USD price formatting shared by menu and summary.
// - `menu`: The interactive walk over the catalog tiers, including the
//   line-prompt seam and input validation.
// - `report`: Post-selection summary table, totals and link.
//
// Keeping this separation makes it easy to test the walk and the
// rendering without a terminal attached.
pub mod currency;
pub mod menu;
pub mod model;
pub mod report;
