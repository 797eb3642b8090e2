pub mod io;
pub mod transform;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use transform::{
    LineClass, LineClassifier, LineTransformer, TransformOptions, markdown_to_html,
    markdown_to_html_with, source_lines, transform_lines, transform_lines_with,
};
