pub mod duration;
pub mod environment;
pub mod filename;
pub mod ranges;

pub use duration::{cutoff_from, parse_duration};
pub use environment::{DEFAULT_TRANSCRIPT_DIR, TRANSCRIPT_DIR_ENV, get_transcript_dir};
pub use filename::{date_prefix, file_date, is_transcript_file, session_id};
pub use ranges::{LineRange, parse_line_range};
