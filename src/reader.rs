/// Single-pass source of Unicode scalars over an in-memory string, with one
/// scalar of pushback
#[derive(Debug, Clone)]
pub struct RuneReader<'a> {
  input: &'a str,
  offset: usize,
  last_width: Option<usize>,
}

impl<'a> RuneReader<'a> {
  /// Creates a new `RuneReader` positioned at the start of `input`
  pub fn new(input: &'a str) -> RuneReader<'a> {
    RuneReader {
      input,
      offset: 0,
      last_width: None,
    }
  }

  /// Returns the next scalar, or `None` once the input is exhausted. Reading
  /// past the end keeps returning `None`.
  pub fn read(&mut self) -> Option<char> {
    match self.input[self.offset..].chars().next() {
      Some(ch) => {
        let width = ch.len_utf8();
        self.offset += width;
        self.last_width = Some(width);
        Some(ch)
      }
      None => {
        // Reading EOS consumes nothing, so unreading it must not move either
        self.last_width = Some(0);
        None
      }
    }
  }

  /// Moves the cursor back over the scalar returned by the previous `read`.
  /// Must not be called twice without a `read` in between.
  pub fn unread(&mut self) {
    debug_assert!(
      self.last_width.is_some(),
      "unread called without a preceding read"
    );

    if let Some(width) = self.last_width.take() {
      self.offset -= width;
    }
  }

  /// Byte offset of the next scalar to be read
  pub fn offset(&self) -> usize {
    self.offset
  }

  /// Underlying input
  pub fn input(&self) -> &'a str {
    self.input
  }
}
