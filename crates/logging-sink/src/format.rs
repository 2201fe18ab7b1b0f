//! Fixed-format rendering of call records into text lines.
//!
//! Every line has the shape
//! `<Sev><MM><DD> <HH>:<MM>:<SS>.<uuuuuu> <TID pad 7> <file>:<line>] <message>\n`
//! and is capped at [`MAX_LOG_LINE_LEN`] bytes including the trailing
//! newline. The header is encoded by hand: the format is simple enough that
//! fixed-width digit pushes beat the general formatting machinery on the hot
//! path. The message body goes through a single substitution mechanism,
//! [`Body`], which also implements the print-style and println-style
//! argument-joining conventions.

use std::fmt::{self, Write as _};

use crate::record::Record;

/// Limit on the length of a formatted log line, including the standard
/// prefix and trailing newline.
pub const MAX_LOG_LINE_LEN: usize = 15000;

const DIGITS: &[u8; 10] = b"0123456789";

/// A single message argument for the print/println joining conventions.
///
/// Carries a [`fmt::Display`] reference together with an is-string flag. The
/// flag drives print-style joining: a separating space is inserted only
/// between two consecutive arguments when neither is string-typed.
#[derive(Clone, Copy)]
pub struct Arg<'a> {
    value: &'a dyn fmt::Display,
    string: bool,
}

impl<'a> Arg<'a> {
    /// Wraps a non-string displayable value.
    #[must_use]
    pub const fn display(value: &'a dyn fmt::Display) -> Self {
        Self {
            value,
            string: false,
        }
    }

    /// Wraps a string-typed value.
    #[must_use]
    pub const fn text(value: &'a dyn fmt::Display) -> Self {
        Self {
            value,
            string: true,
        }
    }

    /// Reports whether this argument is string-typed.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        self.string
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value, f)
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arg")
            .field("value", &self.value.to_string())
            .field("string", &self.string)
            .finish()
    }
}

/// Conversion into an [`Arg`], classifying the value as string or non-string.
///
/// Implemented for the primitive scalar types and for string types; the
/// logging macros call [`to_arg`](Self::to_arg) on a borrow of each argument.
/// Other `Display` types can be passed through [`Arg::display`] explicitly.
pub trait ToArg {
    /// Borrows `self` as a classified message argument.
    fn to_arg(&self) -> Arg<'_>;
}

impl ToArg for &str {
    fn to_arg(&self) -> Arg<'_> {
        Arg::text(self)
    }
}

impl ToArg for String {
    fn to_arg(&self) -> Arg<'_> {
        Arg::text(self)
    }
}

impl<T: ToArg + ?Sized> ToArg for &T {
    fn to_arg(&self) -> Arg<'_> {
        (**self).to_arg()
    }
}

macro_rules! scalar_to_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToArg for $ty {
                fn to_arg(&self) -> Arg<'_> {
                    Arg::display(self)
                }
            }
        )*
    };
}

scalar_to_arg!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Message body of a log line, covering the three calling conventions.
///
/// All three variants render through the same [`fmt::Display`]
/// implementation, so the formatter performs exactly one substitution step
/// regardless of how the call site supplied its arguments.
#[derive(Clone, Copy, Debug)]
pub enum Body<'a> {
    /// Message produced from an explicit format string via `format_args!`.
    Formatted(fmt::Arguments<'a>),
    /// Print-style joining: no separators, except a single space between two
    /// consecutive non-string arguments.
    Print(&'a [Arg<'a>]),
    /// Println-style joining: every argument separated by a single space and
    /// the whole message terminated with a newline. An empty argument list
    /// renders as `"\n"`.
    Println(&'a [Arg<'a>]),
}

impl fmt::Display for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formatted(args) => fmt::Display::fmt(args, f),
            Self::Print(args) => {
                // Suppress the leading space.
                let mut was_string = true;
                for arg in *args {
                    if !was_string && !arg.is_string() {
                        f.write_char(' ')?;
                    }
                    fmt::Display::fmt(arg, f)?;
                    was_string = arg.is_string();
                }
                Ok(())
            }
            Self::Println(args) => {
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        f.write_char(' ')?;
                    }
                    fmt::Display::fmt(arg, f)?;
                }
                f.write_char('\n')
            }
        }
    }
}

/// Renders a record and message body into `buf`.
///
/// The buffer is cleared first, so pooled buffers can be passed in without a
/// separate reset step. The rendered line is truncated to
/// [`MAX_LOG_LINE_LEN`] minus one byte if necessary and always ends with a
/// single newline.
pub fn render(record: &Record, body: &Body<'_>, buf: &mut Vec<u8>) {
    buf.clear();

    buf.push(record.severity.as_byte());

    push_two_digits(buf, u8::from(record.time.month()));
    push_two_digits(buf, record.time.day());
    buf.push(b' ');
    push_two_digits(buf, record.time.hour());
    buf.push(b':');
    push_two_digits(buf, record.time.minute());
    buf.push(b':');
    push_two_digits(buf, record.time.second());
    buf.push(b'.');
    push_padded_digits(buf, 6, u64::from(record.time.microsecond()), b'0');
    buf.push(b' ');
    push_padded_digits(buf, 7, record.thread as u64, b' ');
    buf.push(b' ');
    buf.extend_from_slice(record.file.as_bytes());
    buf.push(b':');
    push_decimal(buf, u64::from(record.line));
    buf.extend_from_slice(b"] ");

    // ByteWriter never fails; a misbehaving Display impl can abort the body
    // early, leaving a partial message, which the truncation and newline
    // rules below still normalize into a valid line.
    let _ = write!(ByteWriter(buf), "{body}");

    if buf.len() > MAX_LOG_LINE_LEN - 1 {
        buf.truncate(MAX_LOG_LINE_LEN - 1);
    }
    if buf.last() != Some(&b'\n') {
        buf.push(b'\n');
    }
}

struct ByteWriter<'a>(&'a mut Vec<u8>);

impl fmt::Write for ByteWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Pushes a zero-prefixed two-digit integer.
fn push_two_digits(buf: &mut Vec<u8>, value: u8) {
    buf.push(DIGITS[usize::from(value / 10) % 10]);
    buf.push(DIGITS[usize::from(value % 10)]);
}

/// Pushes `value` in decimal, left-padded with `pad` to at least `width`
/// bytes. A zero value produces pure padding, which is what the microsecond
/// field wants (`pad = b'0'`).
fn push_padded_digits(buf: &mut Vec<u8>, width: usize, mut value: u64, pad: u8) {
    let mut tmp = [0u8; 20];
    let cutoff = tmp.len() - width;
    let mut i = tmp.len();

    while value > 0 {
        i -= 1;
        tmp[i] = DIGITS[(value % 10) as usize];
        value /= 10;
    }
    while i > cutoff {
        i -= 1;
        tmp[i] = pad;
    }

    buf.extend_from_slice(&tmp[i..]);
}

/// Pushes `value` in decimal with no padding.
fn push_decimal(buf: &mut Vec<u8>, mut value: u64) {
    let mut tmp = [0u8; 20];
    let mut i = tmp.len();

    loop {
        i -= 1;
        tmp[i] = DIGITS[(value % 10) as usize];
        value /= 10;
        if value == 0 {
            break;
        }
    }

    buf.extend_from_slice(&tmp[i..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_joined(args: &[Arg<'_>]) -> String {
        Body::Print(args).to_string()
    }

    fn println_joined(args: &[Arg<'_>]) -> String {
        Body::Println(args).to_string()
    }

    #[test]
    fn print_joins_strings_tightly() {
        let joined = print_joined(&["a".to_arg(), 1_i32.to_arg(), "b".to_arg()]);
        assert_eq!(joined, "a1b");
    }

    #[test]
    fn print_separates_consecutive_non_strings() {
        let joined = print_joined(&[
            "x".to_arg(),
            1_i32.to_arg(),
            2_i32.to_arg(),
            "y".to_arg(),
        ]);
        assert_eq!(joined, "x1 2y");
    }

    #[test]
    fn print_of_nothing_is_empty() {
        assert_eq!(print_joined(&[]), "");
    }

    #[test]
    fn print_leading_non_string_has_no_leading_space() {
        let joined = print_joined(&[1_i32.to_arg(), 2_i32.to_arg()]);
        assert_eq!(joined, "1 2");
    }

    #[test]
    fn println_separates_everything_with_spaces() {
        let joined = println_joined(&[1_i32.to_arg(), 2_i32.to_arg(), 3_i32.to_arg()]);
        assert_eq!(joined, "1 2 3\n");
    }

    #[test]
    fn println_of_nothing_is_a_bare_newline() {
        assert_eq!(println_joined(&[]), "\n");
    }

    #[test]
    fn println_separates_adjacent_strings() {
        let joined = println_joined(&["a".to_arg(), "b".to_arg()]);
        assert_eq!(joined, "a b\n");
    }

    #[test]
    fn to_arg_classifies_types() {
        assert!("s".to_arg().is_string());
        assert!(String::from("s").to_arg().is_string());
        assert!(!1_u64.to_arg().is_string());
        assert!(!true.to_arg().is_string());
        assert!(!'c'.to_arg().is_string());
    }

    #[test]
    fn to_arg_sees_through_references() {
        let value = "s";
        let reference = &value;
        assert!(reference.to_arg().is_string());
    }

    #[test]
    fn formatted_body_substitutes_arguments() {
        let rendered = Body::Formatted(format_args!("{} + {} = {}", 1, 2, 3)).to_string();
        assert_eq!(rendered, "1 + 2 = 3");
    }

    #[test]
    fn padded_digits_pads_small_values() {
        let mut buf = Vec::new();
        push_padded_digits(&mut buf, 6, 42, b'0');
        assert_eq!(buf, b"000042");
    }

    #[test]
    fn padded_digits_zero_is_pure_padding() {
        let mut buf = Vec::new();
        push_padded_digits(&mut buf, 6, 0, b'0');
        assert_eq!(buf, b"000000");
    }

    #[test]
    fn padded_digits_width_is_a_minimum() {
        let mut buf = Vec::new();
        push_padded_digits(&mut buf, 2, 12345, b' ');
        assert_eq!(buf, b"12345");
    }

    #[test]
    fn decimal_handles_zero() {
        let mut buf = Vec::new();
        push_decimal(&mut buf, 0);
        assert_eq!(buf, b"0");
    }
}
