use std::fmt::{self, Debug, Formatter};

/// Formats a chain of key-value pairs on a single line, as `(k: v) -> (k: v)`, or `-` if the chain
/// is empty.
pub struct DebugChain<'a, K, V>(pub &'a [(K, V)]);

impl<K: Debug, V: Debug> Debug for DebugChain<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }

        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({k:?}: {v:?})")?;
        }

        Ok(())
    }
}
