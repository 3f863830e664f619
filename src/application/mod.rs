// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Orchestrates the other layers; does no text processing or
// printing of its own.

// Sources → quiz + mind map + tags + summary → store
pub mod generate_use_case;

// Listing, quizzing and map export over stored materials
pub mod library_use_case;
