use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use xorshift_core::{JournalRecorder, Stream, TraceSink, TraceStep, VectorJournal, VectorSet};

/// Where the three parallel streams of a trace live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorPaths {
    pub output: PathBuf,
    pub state0: PathBuf,
    pub state1: PathBuf,
}

impl VectorPaths {
    pub fn new(
        output: impl Into<PathBuf>,
        state0: impl Into<PathBuf>,
        state1: impl Into<PathBuf>,
    ) -> Self {
        Self {
            output: output.into(),
            state0: state0.into(),
            state1: state1.into(),
        }
    }

    pub fn path(&self, stream: Stream) -> &Path {
        match stream {
            Stream::Output => &self.output,
            Stream::State0 => &self.state0,
            Stream::State1 => &self.state1,
        }
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    tracing::debug!("opened {}", path.display());
    Ok(BufWriter::new(file))
}

/// File-backed trace sink: one `%016x` line per step in each stream.
pub struct TraceFiles {
    output: BufWriter<File>,
    state0: BufWriter<File>,
    state1: BufWriter<File>,
    journal: JournalRecorder,
}

impl TraceFiles {
    pub fn create(paths: &VectorPaths, journal: JournalRecorder) -> Result<Self> {
        Ok(Self {
            output: create(&paths.output)?,
            state0: create(&paths.state0)?,
            state1: create(&paths.state1)?,
            journal,
        })
    }

    /// Flush all three streams and return the run summary.
    pub fn finish(mut self) -> io::Result<VectorJournal> {
        self.output.flush()?;
        self.state0.flush()?;
        self.state1.flush()?;
        Ok(self.journal.finish())
    }
}

impl TraceSink for TraceFiles {
    type Error = io::Error;

    fn record(&mut self, step: &TraceStep) -> io::Result<()> {
        writeln!(self.output, "{:016x}", step.word)?;
        writeln!(self.state0, "{:016x}", step.state.s0)?;
        writeln!(self.state1, "{:016x}", step.state.s1)?;
        self.journal.observe(step);
        Ok(())
    }
}

/// Load a trace written by an external implementation (or by `TraceFiles`).
pub fn read_reference(paths: &VectorPaths) -> Result<VectorSet> {
    let mut texts = Vec::with_capacity(Stream::ALL.len());
    for stream in Stream::ALL {
        let path = paths.path(stream);
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {stream} stream: {}", path.display()))?;
        texts.push(text);
    }
    let vectors = VectorSet::parse(&texts[0], &texts[1], &texts[2])?;
    Ok(vectors)
}
