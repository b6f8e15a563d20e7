//! Lenient tokenizer for the path description language.
//!
//! Whitespace, commas, newlines, and tabs all separate tokens and may be
//! repeated or omitted wherever the grammar stays unambiguous. Once a
//! command letter appears it stays active for repeated argument groups, and
//! a bare coordinate pair after `M`/`m` is an implicit line-to. Malformed
//! input never fails: a command whose operands don't parse is dropped and
//! scanning resumes at the next recognized letter.

use super::PathCommand;

/// Parses a path string into an ordered command list. Pure; malformed
/// commands are silently dropped.
pub fn parse(path: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    let mut scanner = Scanner::new(path.as_bytes());
    let mut current_command = b'M';

    while !scanner.at_end() {
        scanner.skip_separators();
        if scanner.at_end() {
            break;
        }

        let iteration_start = scanner.pos;
        let c = scanner.peek();
        let took_letter = c.is_ascii_alphabetic() && c != b'e' && c != b'E';
        if took_letter {
            current_command = c;
            scanner.advance();
        }

        let relative = current_command.is_ascii_lowercase();
        match current_command.to_ascii_uppercase() {
            b'M' => {
                if let Some((x, y)) = scanner.pair() {
                    commands.push(PathCommand::MoveTo { x, y, relative });
                    // Subsequent bare pairs continue as line-tos with the
                    // same relativity.
                    current_command = if relative { b'l' } else { b'L' };
                }
            }
            b'L' => {
                if let Some((x, y)) = scanner.pair() {
                    commands.push(PathCommand::LineTo { x, y, relative });
                }
            }
            b'H' => {
                if let Some(x) = scanner.number() {
                    commands.push(PathCommand::HorizontalLineTo { x, relative });
                }
            }
            b'V' => {
                if let Some(y) = scanner.number() {
                    commands.push(PathCommand::VerticalLineTo { y, relative });
                }
            }
            b'C' => {
                if let Some(args) = scanner.curve_args() {
                    let ((x1, y1), (x2, y2), (x, y)) = args;
                    commands.push(PathCommand::CurveTo {
                        x1,
                        y1,
                        x2,
                        y2,
                        x,
                        y,
                        relative,
                    });
                }
            }
            b'S' => {
                if let Some(((x2, y2), (x, y))) = scanner.two_pairs() {
                    commands.push(PathCommand::SmoothCurveTo {
                        x2,
                        y2,
                        x,
                        y,
                        relative,
                    });
                }
            }
            b'Q' => {
                if let Some(((x1, y1), (x, y))) = scanner.two_pairs() {
                    commands.push(PathCommand::QuadraticCurveTo {
                        x1,
                        y1,
                        x,
                        y,
                        relative,
                    });
                }
            }
            b'T' => {
                if let Some((x, y)) = scanner.pair() {
                    commands.push(PathCommand::SmoothQuadraticCurveTo { x, y, relative });
                }
            }
            b'A' => {
                if let Some(arc) = scanner.arc_args() {
                    let (rx, ry, angle, large_arc, sweep, x, y) = arc;
                    commands.push(PathCommand::ArcTo {
                        rx,
                        ry,
                        angle,
                        large_arc,
                        sweep,
                        x,
                        y,
                        relative,
                    });
                }
            }
            b'Z' => {
                if took_letter {
                    commands.push(PathCommand::ClosePath);
                } else {
                    // Junk after a close: skip one character and rescan.
                    scanner.advance();
                }
            }
            _ => {
                // Unrecognized letter: skip past whatever follows it, one
                // character at a time, until a known letter comes up.
                if !took_letter {
                    scanner.advance();
                }
            }
        }

        // Malformed operands can leave the scanner where it started; force
        // progress so arbitrary input always terminates.
        if scanner.pos == iteration_start {
            scanner.advance();
        }
    }

    commands
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Scanner { bytes, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> u8 {
        self.bytes[self.pos]
    }

    fn advance(&mut self) {
        if self.pos < self.bytes.len() {
            self.pos += 1;
        }
    }

    fn skip_separators(&mut self) {
        while !self.at_end() {
            match self.peek() {
                b' ' | b',' | b'\n' | b'\t' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Scans one number token: optional sign, digits, at most one decimal
    /// point, optional exponent with its own optional sign. The first
    /// non-matching character ends the token; an unparseable token is
    /// `None`.
    fn number(&mut self) -> Option<f64> {
        self.skip_separators();
        if self.at_end() {
            return None;
        }

        let start = self.pos;
        let mut has_decimal = false;
        let mut has_exponent = false;

        if self.peek() == b'-' || self.peek() == b'+' {
            self.pos += 1;
        }

        while !self.at_end() {
            let c = self.peek();
            if c.is_ascii_digit() {
                self.pos += 1;
            } else if c == b'.' && !has_decimal && !has_exponent {
                has_decimal = true;
                self.pos += 1;
            } else if (c == b'e' || c == b'E') && !has_exponent {
                has_exponent = true;
                self.pos += 1;
                if !self.at_end() && (self.peek() == b'-' || self.peek() == b'+') {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }

        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
    }

    /// Arc flags are a single `0` or `1` character, no separator required.
    fn flag(&mut self) -> Option<bool> {
        self.skip_separators();
        if self.at_end() {
            return None;
        }
        match self.peek() {
            b'0' => {
                self.pos += 1;
                Some(false)
            }
            b'1' => {
                self.pos += 1;
                Some(true)
            }
            _ => None,
        }
    }

    fn pair(&mut self) -> Option<(f64, f64)> {
        let x = self.number()?;
        let y = self.number()?;
        Some((x, y))
    }

    fn two_pairs(&mut self) -> Option<((f64, f64), (f64, f64))> {
        let a = self.pair()?;
        let b = self.pair()?;
        Some((a, b))
    }

    #[allow(clippy::type_complexity)]
    fn curve_args(&mut self) -> Option<((f64, f64), (f64, f64), (f64, f64))> {
        let c1 = self.pair()?;
        let c2 = self.pair()?;
        let end = self.pair()?;
        Some((c1, c2, end))
    }

    #[allow(clippy::type_complexity)]
    fn arc_args(&mut self) -> Option<(f64, f64, f64, bool, bool, f64, f64)> {
        let rx = self.number()?;
        let ry = self.number()?;
        let angle = self.number()?;
        let large_arc = self.flag()?;
        let sweep = self.flag()?;
        let (x, y) = self.pair()?;
        Some((rx, ry, angle, large_arc, sweep, x, y))
    }
}
