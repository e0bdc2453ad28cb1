pub mod android_strings;
pub mod csv;

// Reexporting the formats for easier access
pub use android_strings::Format as AndroidStringsFormat;
