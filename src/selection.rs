use crate::error::{Result, TransformError};

/// A non-empty character range `[start, end)` inside a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check the range against `text` and return its byte offsets.
    ///
    /// Offsets are counted in characters, not bytes.
    fn byte_range(&self, text: &str) -> Result<(usize, usize)> {
        let len = text.chars().count();
        if self.start >= self.end || self.end > len {
            return Err(TransformError::InvalidSelection {
                start: self.start,
                end: self.end,
                len,
            });
        }
        let offset = |n: usize| {
            text.char_indices()
                .nth(n)
                .map(|(i, _)| i)
                .unwrap_or(text.len())
        };
        Ok((offset(self.start), offset(self.end)))
    }

    /// The selected slice of `text`
    pub fn slice<'a>(&self, text: &'a str) -> Result<&'a str> {
        let (start, end) = self.byte_range(text)?;
        Ok(&text[start..end])
    }

    /// Replace the selected slice with `transform(slice)`, keeping the
    /// surrounding text
    pub fn splice<F>(&self, text: &str, transform: F) -> Result<String>
    where
        F: FnOnce(&str) -> String,
    {
        let (start, end) = self.byte_range(text)?;
        let replacement = transform(&text[start..end]);
        let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
        out.push_str(&text[..start]);
        out.push_str(&replacement);
        out.push_str(&text[end..]);
        Ok(out)
    }
}
