use std::fs;

use anyhow::Result;
use time::OffsetDateTime;

use crate::args::GeneratorArgs;

/// Literal replaced with the current 4-digit UTC year in header files.
pub const YEAR_TOKEN: &str = "YEAR";

/// Placeholder in the generated-by template replaced with the generator's
/// name.
pub const GENERATOR_NAME_TOKEN: &str = "GENERATOR_NAME";

impl<C> GeneratorArgs<C> {
    /// Loads the boilerplate header named by `header_file_path` and returns
    /// it ready for prefixing to generated output.
    ///
    /// Every literal `YEAR` is replaced with the current UTC year. When a
    /// generated-by template is configured and the header is non-empty, the
    /// template is appended below it with `GENERATOR_NAME` replaced by
    /// `generator_name` (see [`invoking_program_name`]). An unreadable header
    /// file propagates the I/O error as-is.
    ///
    /// [`invoking_program_name`]: crate::args::invoking_program_name
    pub fn load_boilerplate(&self, generator_name: &str) -> Result<Vec<u8>> {
        let contents = fs::read(&self.header_file_path)?;
        let year = OffsetDateTime::now_utc().year().to_string();
        let mut contents = replace_all(&contents, YEAR_TOKEN.as_bytes(), year.as_bytes());

        if !self.generated_by_comment_template.is_empty() && !contents.is_empty() {
            let comment = self
                .generated_by_comment_template
                .replace(GENERATOR_NAME_TOKEN, generator_name);
            contents.push(b'\n');
            contents.extend_from_slice(comment.as_bytes());
            contents.extend_from_slice(b"\n\n");
        }

        Ok(contents)
    }
}

// Byte-level so a header is never forced through UTF-8. `needle` must be
// non-empty.
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(index) = find(rest, needle) {
        output.extend_from_slice(&rest[..index]);
        output.extend_from_slice(replacement);
        rest = &rest[index + needle.len()..];
    }
    output.extend_from_slice(rest);
    output
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}
