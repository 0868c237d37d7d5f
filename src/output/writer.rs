use std::io::{self, Write};

pub trait Writer<W: Write> {
    fn write(&mut self, buf: &[u8]) -> io::Result<()>;
    fn into_inner(self: Box<Self>) -> W;
}

/// Writes each buffer followed by a newline, then flushes.
pub struct LineWriter<W> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Writer<W> for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        let mut line = Vec::with_capacity(buf.len() + 1);
        line.extend_from_slice(buf);
        line.push(b'\n');

        self.inner.write_all(&line)?;
        self.inner.flush()
    }

    fn into_inner(self: Box<Self>) -> W {
        self.inner
    }
}
