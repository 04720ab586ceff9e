//! Conditional-compilation wrapping
//!
//! Wraps the whole content of a file between `#ifdef <TOKEN>` and `#endif`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::{RelinkError, Result};

/// Wrap `content` in an `#ifdef token` / `#endif` block.
///
/// # Examples
/// ```
/// use relink::guard::wrap_content;
///
/// assert_eq!(
///     wrap_content("FEATURE_X", "int x;"),
///     "#ifdef FEATURE_X\n\nint x;\n#endif\n"
/// );
/// ```
pub fn wrap_content(token: &str, content: &str) -> String {
    format!("#ifdef {token}\n\n{content}\n#endif\n")
}

/// Wrap the file at `path` in place.
///
/// A missing file is reported as [`RelinkError::FileNotFound`]; every other
/// failure, including content that is not UTF-8, as [`RelinkError::Io`].
pub fn wrap_file(token: &str, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => RelinkError::FileNotFound(path.display().to_string()),
        _ => RelinkError::Io(err),
    })?;

    fs::write(path, wrap_content(token, &content))?;
    log::debug!("Wrapped {} in #ifdef {token}", path.display());
    Ok(())
}
