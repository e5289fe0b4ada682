/// The lookup tables built once from the dataset, and all point queries
pub mod emoji_index;
/// Dataset parsing and preparation (filtering, sort order adjustment)
pub mod dataset;
pub mod errors;
#[cfg(test)]
mod tests;
