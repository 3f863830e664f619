// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to a business layer:
//
//   store.rs  JSON file persistence for generated materials.
//             One file holds the whole collection, newest first.
//             Writes go to a temp file that is then renamed over
//             the old one, so a crash never leaves half a file.

/// JSON-file MaterialStore
pub mod store;
