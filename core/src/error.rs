use core::fmt;

/// One of the three parallel text streams of a test vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stream {
    Output,
    State0,
    State1,
}

impl Stream {
    pub const ALL: [Stream; 3] = [Stream::Output, Stream::State0, Stream::State1];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Output => "output",
            Self::State0 => "state0",
            Self::State1 => "state1",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// Both state words are zero: the generator would emit zero forever.
    DegenerateSeed,
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSeed => write!(
                f,
                "degenerate seed: both state words are zero, output would be all zeros"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeedError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    Seed(SeedError),
    /// The reference trace has no lines, so there is nothing to compare.
    EmptyReference,
    MalformedLine {
        stream: Stream,
        line: usize,
        text: alloc::string::String,
    },
    LengthMismatch {
        stream: Stream,
        expected: usize,
        actual: usize,
    },
    WordMismatch {
        stream: Stream,
        index: usize,
        expected: u64,
        actual: u64,
    },
}

impl From<SeedError> for VectorError {
    fn from(err: SeedError) -> Self {
        Self::Seed(err)
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seed(err) => err.fmt(f),
            Self::EmptyReference => write!(f, "reference trace is empty: no steps to compare"),
            Self::MalformedLine { stream, line, text } => write!(
                f,
                "{stream} line {line}: expected 16 lowercase hex digits, got {text:?}"
            ),
            Self::LengthMismatch {
                stream,
                expected,
                actual,
            } => write!(
                f,
                "{stream} length mismatch: expected {expected} lines, got {actual}"
            ),
            Self::WordMismatch {
                stream,
                index,
                expected,
                actual,
            } => write!(
                f,
                "{stream} mismatch at step {index}: expected={expected:016x}, got={actual:016x}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Seed(err) => Some(err),
            _ => None,
        }
    }
}
