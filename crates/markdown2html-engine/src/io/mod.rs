use crate::transform::{TransformOptions, markdown_to_html_with};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Missing {}", .0.display())]
    Missing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Check that the input exists and is a regular file
pub fn validate_input_file(path: &Path) -> Result<(), IoError> {
    if !path.is_file() {
        return Err(IoError::Missing(path.to_path_buf()));
    }

    Ok(())
}

/// Read a markdown source file as UTF-8
pub fn read_source(path: &Path) -> Result<String, IoError> {
    validate_input_file(path)?;
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write the converted document, creating parent directories if needed
pub fn write_output(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}

/// Convert `input` and write the result to `output`.
///
/// The output is only touched once the input has been validated, read and
/// transformed in full.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &TransformOptions,
) -> Result<(), IoError> {
    let source = read_source(input)?;
    let html = markdown_to_html_with(&source, options);
    write_output(output, &html)?;
    log::debug!(
        "wrote {} bytes from {} to {}",
        html.len(),
        input.display(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_validate_input_file_exists() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "README.md", "# Readme");
        assert!(validate_input_file(&path).is_ok());
    }

    #[test]
    fn test_validate_input_file_not_exists() {
        let result = validate_input_file(Path::new("/nonexistent/README.md"));
        assert!(matches!(result, Err(IoError::Missing(_))));
    }

    #[test]
    fn test_validate_input_file_rejects_directory() {
        let dir = create_test_dir();
        let result = validate_input_file(dir.path());
        assert!(matches!(result, Err(IoError::Missing(_))));
    }

    #[test]
    fn test_missing_error_message() {
        let err = IoError::Missing(PathBuf::from("README.md"));
        assert_eq!(err.to_string(), "Missing README.md");
    }

    #[test]
    fn test_read_source_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "doc.md", "# Test Content\n\nParagraph");
        assert_eq!(read_source(&path).unwrap(), "# Test Content\n\nParagraph");
    }

    #[test]
    fn test_read_source_not_utf8() {
        let dir = create_test_dir();
        let path = dir.path().join("latin1.md");
        fs::write(&path, [0x23, 0x20, 0xe9, 0x0a]).unwrap();

        let result = read_source(&path);
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn test_write_output_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("site").join("docs").join("index.html");

        write_output(&path, "<h1>Hi</h1>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_write_output_overwrites_existing() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "out.html", "old content that is longer");

        write_output(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_convert_file() {
        let dir = create_test_dir();
        let input = create_test_file(&dir, "README.md", "# Title\n\n- one\n- two\n");
        let output = dir.path().join("README.html");

        convert_file(&input, &output, &TransformOptions::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<h1>Title</h1>\n<ul>\n    <li>one</li>\n    <li>two</li>\n</ul>"
        );
    }

    #[test]
    fn test_convert_file_missing_input_leaves_output_untouched() {
        let dir = create_test_dir();
        let output = create_test_file(&dir, "README.html", "previous");

        let result = convert_file(
            &dir.path().join("nope.md"),
            &output,
            &TransformOptions::default(),
        );

        assert!(matches!(result, Err(IoError::Missing(_))));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_convert_empty_file_writes_empty_output() {
        let dir = create_test_dir();
        let input = create_test_file(&dir, "empty.md", "");
        let output = dir.path().join("empty.html");

        convert_file(&input, &output, &TransformOptions::default()).unwrap();

        assert!(output.is_file());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }
}
