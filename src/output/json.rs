//! JSON output.

use crate::error::AggregateError;
use crate::models::CidrBlock;

/// Render blocks as a pretty JSON array of `"a.b.c.d/p"` strings.
pub fn render_json(blocks: &[CidrBlock]) -> Result<String, AggregateError> {
    let json = serde_json::to_string_pretty(blocks)?;
    Ok(json + "\n")
}
