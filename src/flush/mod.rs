mod jsonl;

pub use jsonl::{flush_frame_to_jsonl, flush_history_to_jsonl};
