// ============================================================
// Layer 5: Study Material Generation
// ============================================================
// Builds the two study artifacts from cleaned text:
//
//   quiz.rs     cloze questions with sliding-window distractors
//   mindmap.rs  radial layout + SVG rendering
//   random.rs   injectable randomness and the Fisher-Yates shuffle
//
// Everything here is a pure function of its inputs apart from
// the RandomSource handed to the quiz.

/// Cloze quiz synthesis
pub mod quiz;

/// Radial mind-map layout and SVG output
pub mod mindmap;

/// RandomSource implementations and shuffle
pub mod random;
