//! Incremental consumption of the agent's snapshot stream.
//!
//! The transport delivers newline-delimited JSON in arbitrarily sized byte
//! chunks. [`LineBuffer`] reassembles complete lines across chunk
//! boundaries, and [`append_assistant_text`] is the pure reduction step the
//! driver applies to each decoded snapshot. Neither performs any I/O, so
//! the whole accumulation loop can be exercised without a live agent.

use crate::types::AgentSnapshot;

/// Reassembles newline-delimited lines from arbitrarily chunked bytes.
///
/// A line may span any number of chunks; bytes after the last newline are
/// held until the next `push` or flushed by [`LineBuffer::finish`].
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk of bytes and returns every line completed by it, in
    /// arrival order. Trailing carriage returns are stripped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.pending.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }

    /// Flushes the trailing bytes of a stream that ended without a final
    /// newline, if any.
    pub fn finish(self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&self.pending).into_owned())
        }
    }
}

/// Appends the text content of the snapshot's trailing message to the
/// accumulator when that message is assistant-authored.
///
/// Snapshots whose message list is empty, or whose last message is
/// user-authored, leave the accumulator untouched.
pub fn append_assistant_text(acc: &mut String, snapshot: &AgentSnapshot) {
    if let Some(last) = snapshot.messages.last() {
        if last.is_assistant() {
            acc.push_str(&last.text());
        }
    }
}
