use std::fmt::{self, Debug, Formatter};

/// Writes the contained text as-is when debug formatted, without quotes or escaping.
pub struct DebugRaw(pub &'static str);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
