use std::ops::Range;

use log::warn;
use thiserror::Error;

/// Error splicing a generated block into a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpliceError {
    #[error("could not find {marker:?} in the file")]
    MarkerNotFound { marker: String },
}

/// Finds the byte span of the block that starts at the first occurrence of `marker`.
///
/// Scans forward from the start of the marker, counting `{` and `}`, and ends the span right after
/// the `}` that brings the count back to zero. Braces inside strings or comments count like any
/// other brace.
///
/// If the braces never balance, the span is empty and sits at the marker, so a splice inserts the
/// new block in front of the marker without removing anything.
pub fn find_block(content: &str, marker: &str) -> Option<Range<usize>> {
    let start = content.find(marker)?;
    let mut depth = 0i64;
    for (offset, byte) in content.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start..start + offset + 1);
                }
            }
            _ => (),
        }
    }
    warn!("Block starting with {marker:?} never closes; inserting without replacing");
    Some(start..start)
}

/// Replaces the block that starts at `marker` with `replacement`.
///
/// Everything outside the matched span is kept byte for byte.
pub fn splice_block(content: &str, marker: &str, replacement: &str) -> Result<String, SpliceError> {
    let span = find_block(content, marker).ok_or_else(|| SpliceError::MarkerNotFound {
        marker: marker.to_owned(),
    })?;
    let mut spliced = String::with_capacity(content.len() - span.len() + replacement.len());
    spliced.push_str(&content[..span.start]);
    spliced.push_str(replacement);
    spliced.push_str(&content[span.end..]);
    Ok(spliced)
}
