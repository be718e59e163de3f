//! Scanner: cursor and token recognition over the input buffer.
//!
//! What it does
//! - Owns the byte cursor and recognizes one token shape at a time, always
//!   returning the token's exact source bytes as a slice of the input.
//! - Reports failures as [`ScanError`]s carrying the cursor offset.
//!
//! Scope
//! - Container structure, separator grammar and event delivery live in the
//!   walker; the scanner never looks past the end of a single token, except
//!   in [`Scanner::skip_balanced`] which swallows a whole subtree without
//!   tokenizing it.

use crate::error::{ErrorKind, ScanError};

/// Insignificant whitespace per RFC 8259.
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

pub(crate) struct Scanner<'buf> {
    input: &'buf [u8],
    pos: usize,
}

impl<'buf> Scanner<'buf> {
    pub(crate) fn new(input: &'buf [u8]) -> Self {
        Self { input, pos: 0 }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consumes one byte, returning it as a slice of the input.
    #[inline]
    pub(crate) fn take_byte(&mut self) -> &'buf [u8] {
        let token = &self.input[self.pos..=self.pos];
        self.pos += 1;
        token
    }

    #[inline]
    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
    }

    /// An error positioned at the cursor.
    #[inline]
    pub(crate) fn error_here(&self, kind: ErrorKind) -> ScanError {
        ScanError { kind, offset: self.pos }
    }

    #[inline]
    fn end_of_input(&self) -> ScanError {
        self.error_here(ErrorKind::UnexpectedEndOfInput)
    }

    /// Recognizes one scalar token (string, number, `true`, `false` or
    /// `null`) starting at the cursor.
    pub(crate) fn scan_scalar(&mut self) -> Result<&'buf [u8], ScanError> {
        match self.peek() {
            Some(b'"') => self.scan_string(),
            Some(b'-' | b'0'..=b'9') => self.scan_number(),
            Some(b't') => self.scan_keyword(b"true"),
            Some(b'f') => self.scan_keyword(b"false"),
            Some(b'n') => self.scan_keyword(b"null"),
            Some(other) => Err(self.error_here(ErrorKind::UnexpectedCharacter(other))),
            None => Err(self.end_of_input()),
        }
    }

    /// Scans an object member key (a string, quotes kept) and the colon
    /// after it, tolerating whitespace in between. The cursor ends up on
    /// the first byte after the colon.
    pub(crate) fn scan_member_key(&mut self) -> Result<&'buf [u8], ScanError> {
        let key = match self.peek() {
            Some(b'"') => self.scan_string()?,
            Some(other) => return Err(self.error_here(ErrorKind::UnexpectedCharacter(other))),
            None => return Err(self.end_of_input()),
        };
        self.skip_whitespace();
        match self.peek() {
            Some(b':') => {
                self.bump();
                Ok(key)
            }
            Some(other) => Err(self.error_here(ErrorKind::UnexpectedCharacter(other))),
            None => Err(self.end_of_input()),
        }
    }

    /// Scans a double-quoted string with the cursor on the opening quote.
    /// The returned slice keeps the quotes and leaves escapes untouched.
    fn scan_string(&mut self) -> Result<&'buf [u8], ScanError> {
        let start = self.pos;
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.bump();
        loop {
            let byte = self.peek().ok_or_else(|| self.end_of_input())?;
            match byte {
                b'"' => {
                    self.bump();
                    return Ok(&self.input[start..self.pos]);
                }
                b'\\' => {
                    self.bump();
                    self.scan_escape()?;
                }
                // Unescaped control characters never appear in a valid
                // string; everything else, UTF-8 continuation bytes
                // included, passes through untouched.
                0x00..=0x1F => {
                    return Err(self.error_here(ErrorKind::UnexpectedCharacter(byte)));
                }
                _ => self.bump(),
            }
        }
    }

    /// Validates the escape body after a consumed backslash. `\u` must be
    /// followed by exactly four hex digits; the digits are not decoded, so
    /// surrogate pairing is left to whoever eventually unescapes.
    fn scan_escape(&mut self) -> Result<(), ScanError> {
        let byte = self.peek().ok_or_else(|| self.end_of_input())?;
        match byte {
            b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                self.bump();
                Ok(())
            }
            b'u' => {
                self.bump();
                for _ in 0..4 {
                    let digit = self.peek().ok_or_else(|| self.end_of_input())?;
                    if !digit.is_ascii_hexdigit() {
                        return Err(self.error_here(ErrorKind::InvalidEscape(digit)));
                    }
                    self.bump();
                }
                Ok(())
            }
            other => Err(self.error_here(ErrorKind::InvalidEscape(other))),
        }
    }

    /// Scans a number with the cursor on `-` or a digit. The token ends at
    /// the first byte that cannot extend it; whether that byte is legal
    /// where it stands is the walker's call.
    fn scan_number(&mut self) -> Result<&'buf [u8], ScanError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        // Integer part: a lone zero, or a nonzero digit and any run after.
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => self.eat_digits(),
            Some(_) => return Err(self.error_here(ErrorKind::InvalidNumber)),
            None => return Err(self.end_of_input()),
        }
        if self.peek() == Some(b'.') {
            self.bump();
            self.require_digits()?;
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.bump();
            if let Some(b'+' | b'-') = self.peek() {
                self.bump();
            }
            self.require_digits()?;
        }
        Ok(&self.input[start..self.pos])
    }

    #[inline]
    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
    }

    /// At least one digit, then any run after.
    fn require_digits(&mut self) -> Result<(), ScanError> {
        match self.peek() {
            Some(b) if b.is_ascii_digit() => {
                self.eat_digits();
                Ok(())
            }
            Some(_) => Err(self.error_here(ErrorKind::InvalidNumber)),
            None => Err(self.end_of_input()),
        }
    }

    /// Scans one of the fixed literals.
    fn scan_keyword(&mut self, keyword: &'static [u8]) -> Result<&'buf [u8], ScanError> {
        let start = self.pos;
        for &expected in keyword {
            match self.peek() {
                Some(b) if b == expected => self.bump(),
                Some(other) => {
                    return Err(self.error_here(ErrorKind::UnexpectedCharacter(other)));
                }
                None => return Err(self.end_of_input()),
            }
        }
        Ok(&self.input[start..self.pos])
    }

    /// Advances past the remainder of a container whose opening bracket was
    /// already consumed, without producing tokens. One linear pass, no
    /// allocation: brackets of either kind adjust a single counter, and
    /// strings run through the regular string lexer so a bracket inside a
    /// literal is never counted. Malformed content surfaces the same string
    /// errors a full scan would.
    pub(crate) fn skip_balanced(&mut self) -> Result<(), ScanError> {
        let mut depth = 1usize;
        loop {
            let byte = self.peek().ok_or_else(|| self.end_of_input())?;
            match byte {
                b'"' => {
                    self.scan_string()?;
                }
                b'{' | b'[' => {
                    depth += 1;
                    self.bump();
                }
                b'}' | b']' => {
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => self.bump(),
            }
        }
    }
}
