//! Category rules: naming constraints and the default-category fixture.

use crate::error::CoreError;

/// Name of the auto-provisioned default category.
pub const DEFAULT_CATEGORY_NAME: &str = "Journal";

/// Icon of the auto-provisioned default category.
pub const DEFAULT_CATEGORY_ICON: &str = "📝";

/// Color of the auto-provisioned default category.
pub const DEFAULT_CATEGORY_COLOR: &str = "#FF9A76";

/// Maximum category name length, in characters (not bytes — names are
/// frequently CJK or emoji).
pub const MAX_NAME_CHARS: usize = 10;

/// Validate a category name: non-empty after trimming, at most
/// [`MAX_NAME_CHARS`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Category name must not be empty".into(),
        ));
    }
    let chars = trimmed.chars().count();
    if chars > MAX_NAME_CHARS {
        return Err(CoreError::Validation(format!(
            "Category name must be at most {MAX_NAME_CHARS} characters, got {chars}"
        )));
    }
    Ok(())
}
