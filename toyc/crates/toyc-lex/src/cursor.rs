//! Character cursor for traversing source code.
//!
//! The `Cursor` owns the scan position over an immutable source text and
//! keeps the line/column bookkeeping used for token origins. It only moves
//! forward: there is no snapshot, restore or pushback.

/// Sentinel returned by [`Cursor::current_char`] once the source is exhausted.
///
/// The sentinel alone does not mean "end": an embedded NUL in the source is a
/// real character. Use [`Cursor::is_at_end`] to test for exhaustion.
pub const EOF_CHAR: char = '\0';

/// A forward-only cursor over source text.
///
/// # Example
///
/// ```
/// use toyc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("if x");
///
/// assert_eq!(cursor.current_char(), 'i');
/// assert_eq!(cursor.advance(), 'f');
/// assert_eq!(cursor.column(), 2);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Line of the current character (1-based).
    line: u32,

    /// Column of the current character (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or [`EOF_CHAR`] past the end.
    ///
    /// ```
    /// use toyc_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.current_char(), EOF_CHAR);
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return EOF_CHAR;
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        self.source[self.position..].chars().next().unwrap_or(EOF_CHAR)
    }

    /// Consumes the current character and returns the new current one.
    ///
    /// Consuming a newline moves to column 1 of the next line. Does nothing
    /// once the end has been reached.
    ///
    /// ```
    /// use toyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.advance(), '\n');
    /// assert_eq!(cursor.advance(), 'b');
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        let c = match self.source[self.position..].chars().next() {
            Some(c) => c,
            None => return EOF_CHAR,
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.current_char()
    }

    /// Consumes the current character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips consecutive whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the line of the current character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the current character (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between byte offset `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
