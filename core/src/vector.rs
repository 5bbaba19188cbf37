//! Text encoding of test vectors: one `%016x` line per word.

use core::convert::Infallible;

use alloc::{format, string::String, vec::Vec};
use serde::{Deserialize, Serialize};

use crate::constants::WORD_HEX_WIDTH;
use crate::error::{Stream, VectorError};
use crate::rng::{StateSnapshot, Xorshift128Plus};
use crate::trace::{produce_into, TraceSink, TraceStep};

#[inline]
pub fn format_word(word: u64) -> String {
    format!("{word:016x}")
}

pub fn render_stream(words: &[u64]) -> String {
    let mut out = String::with_capacity(words.len() * (WORD_HEX_WIDTH + 1));
    for word in words {
        out.push_str(&format_word(*word));
        out.push('\n');
    }
    out
}

/// Parse a stream written by [`render_stream`] or by an external reference.
///
/// Every line must be exactly 16 lowercase hex digits. A trailing `\r` is
/// tolerated; the final newline is optional.
pub fn parse_stream(stream: Stream, text: &str) -> Result<Vec<u64>, VectorError> {
    let mut words = Vec::new();
    for (i, line) in text.lines().enumerate() {
        words.push(parse_line(line).ok_or_else(|| VectorError::MalformedLine {
            stream,
            line: i + 1,
            text: String::from(line),
        })?);
    }
    Ok(words)
}

fn parse_line(line: &str) -> Option<u64> {
    let valid = line.len() == WORD_HEX_WIDTH
        && line
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !valid {
        return None;
    }
    u64::from_str_radix(line, 16).ok()
}

/// The three parallel columns of a trace: output words and the post-step
/// value of each state slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSet {
    pub output: Vec<u64>,
    pub state0: Vec<u64>,
    pub state1: Vec<u64>,
}

impl VectorSet {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            output: Vec::with_capacity(count),
            state0: Vec::with_capacity(count),
            state1: Vec::with_capacity(count),
        }
    }

    /// Run `count` advances and keep every column.
    pub fn collect(rng: &mut Xorshift128Plus, count: usize) -> Self {
        let mut set = Self::with_capacity(count);
        match produce_into(rng, count, &mut set) {
            Ok(_) => set,
            Err(never) => match never {},
        }
    }

    pub fn parse(output: &str, state0: &str, state1: &str) -> Result<Self, VectorError> {
        Ok(Self {
            output: parse_stream(Stream::Output, output)?,
            state0: parse_stream(Stream::State0, state0)?,
            state1: parse_stream(Stream::State1, state1)?,
        })
    }

    pub fn push(&mut self, step: &TraceStep) {
        self.output.push(step.word);
        self.state0.push(step.state.s0);
        self.state1.push(step.state.s1);
    }

    /// Number of steps, taken from the output column.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn column(&self, stream: Stream) -> &[u64] {
        match stream {
            Stream::Output => &self.output,
            Stream::State0 => &self.state0,
            Stream::State1 => &self.state1,
        }
    }

    pub fn render(&self, stream: Stream) -> String {
        render_stream(self.column(stream))
    }

    pub fn final_state(&self) -> Option<StateSnapshot> {
        Some(StateSnapshot::new(*self.state0.last()?, *self.state1.last()?))
    }
}

impl TraceSink for VectorSet {
    type Error = Infallible;

    fn record(&mut self, step: &TraceStep) -> Result<(), Infallible> {
        self.push(step);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn word_is_zero_padded_lowercase() {
        assert_eq!(format_word(3), "0000000000000003");
        assert_eq!(format_word(0xDEAD_BEEF), "00000000deadbeef");
        assert_eq!(format_word(u64::MAX), "ffffffffffffffff");
    }

    #[test]
    fn stream_is_newline_terminated() {
        assert_eq!(render_stream(&[]), "");
        assert_eq!(
            render_stream(&[1, 0xabc]),
            "0000000000000001\n0000000000000abc\n"
        );
    }

    #[test]
    fn parse_accepts_missing_final_newline_and_crlf() {
        let words = parse_stream(Stream::Output, "0000000000000001\r\n00000000000000ff").unwrap();
        assert_eq!(words, vec![1, 0xff]);
    }

    #[test]
    fn parse_rejects_uppercase_and_short_lines() {
        assert_eq!(
            parse_stream(Stream::State0, "00000000000000FF\n"),
            Err(VectorError::MalformedLine {
                stream: Stream::State0,
                line: 1,
                text: String::from("00000000000000FF"),
            })
        );
        assert!(matches!(
            parse_stream(Stream::State1, "0000000000000001\nff\n"),
            Err(VectorError::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            parse_stream(Stream::Output, "0000000000000001\n\n0000000000000002\n"),
            Err(VectorError::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            parse_stream(Stream::Output, "+000000000000001\n"),
            Err(VectorError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn collected_columns_line_up() {
        let mut rng = Xorshift128Plus::seed(1, 2).unwrap();
        let set = VectorSet::collect(&mut rng, 3);
        assert_eq!(set.output, vec![0x3, 0x80_0024, 0x4000_0180_0485]);
        assert_eq!(set.state0, vec![0x1, 0x80_0023, 0x4000_0100_0462]);
        assert_eq!(set.state1, vec![0x80_0023, 0x4000_0100_0462, 0xc002_0084_8840]);
        assert_eq!(set.final_state(), Some(rng.state()));
    }

    #[test]
    fn rendered_set_parses_back() {
        let mut rng = Xorshift128Plus::seed(0xDEAD_BEEF, 0x1234_5678).unwrap();
        let set = VectorSet::collect(&mut rng, 40);
        let parsed = VectorSet::parse(
            &set.render(Stream::Output),
            &set.render(Stream::State0),
            &set.render(Stream::State1),
        )
        .unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn empty_set_has_no_final_state() {
        assert!(VectorSet::default().is_empty());
        assert_eq!(VectorSet::default().final_state(), None);
    }
}
