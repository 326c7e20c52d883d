// Upload ingest: extract text → classify → synthesize.
// The classifier gates; the synthesizer only sees content judged safe.

pub mod extract;
pub mod handlers;
pub mod pipeline;
