use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser};

use crate::error::QueryError;
use crate::filters::{FilterOptions, RoleFilter};
use crate::logging;
use crate::models::{SearchMatch, SessionSummary};
use crate::query::{
    DEFAULT_CONTEXT, DEFAULT_READ_LIMIT, DEFAULT_SEARCH_LIMIT, QueryOptions, SearchQuery, Selector,
    list_sessions, read_section, resolve_limit, search_transcripts,
};
use crate::utils::{cutoff_from, get_transcript_dir, parse_duration, parse_line_range};

const SESSION_ID_PREVIEW_CHARS: usize = 8;

#[derive(Parser, Debug)]
#[command(name = "search-transcripts")]
#[command(version = "0.1.0")]
#[command(about = "Search and read archived session transcripts", long_about = None)]
pub struct Cli {
    /// Strip metadata, show only conversation text
    #[arg(long)]
    pub text_only: bool,

    /// Show only user messages
    #[arg(long)]
    pub user_only: bool,

    /// Show only assistant responses
    #[arg(long)]
    pub assistant_only: bool,

    /// Include thinking blocks (usually excluded)
    #[arg(long)]
    pub include_thinking: bool,

    /// Include meta messages (skill prompts, injected context)
    #[arg(long)]
    pub include_meta: bool,

    /// Search for PATTERN (case-insensitive regular expression) in transcripts
    #[arg(long, value_name = "PATTERN")]
    pub grep: Option<String>,

    /// Filter to recent sessions (e.g. 7d, 2w, 1m)
    #[arg(long, value_name = "DURATION")]
    pub since: Option<String>,

    /// Entries of context around matches
    #[arg(short = 'C', long, default_value_t = DEFAULT_CONTEXT)]
    pub context: usize,

    /// Max results (default: 20 for search, 50 for read)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Read a specific transcript file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read a specific line range (e.g. 40-60)
    #[arg(long, value_name = "START-END")]
    pub lines: Option<String>,

    /// Start reading at line N
    #[arg(long, value_name = "N")]
    pub offset: Option<usize>,

    /// List sessions with summaries
    #[arg(long)]
    pub list: bool,

    /// Transcript archive directory (default: $TRANSCRIPT_DIR or .tutor/transcripts)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the filter switches into query options
    pub fn query_options(&self) -> Result<QueryOptions, QueryError> {
        let filters = FilterOptions {
            include_meta: self.include_meta,
            role: RoleFilter::from_flags(self.user_only, self.assistant_only)?,
            text_only: self.text_only,
        };
        Ok(QueryOptions::new(filters, self.include_thinking))
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Run the mode selected by `cli`, writing results to `out`
///
/// Modes are tried in order: list, search, read. With none selected the help text is
/// written and a failure status returned.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
    let options = cli.query_options()?;
    let dir = get_transcript_dir(cli.dir.as_deref());

    let outcome = if cli.list {
        show_sessions(&dir, out)
    } else if let Some(pattern) = &cli.grep {
        show_search(&dir, pattern, cli, &options, out)
    } else if let Some(file) = &cli.file {
        show_section(file, cli, &options, out)
    } else {
        write!(out, "{}", Cli::command().render_help())?;
        return Ok(ExitCode::FAILURE);
    };

    match outcome {
        Err(e) if matches!(e.downcast_ref::<QueryError>(), Some(QueryError::MissingTranscriptDir(_))) => {
            eprintln!("{e}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e),
        Ok(()) => Ok(ExitCode::SUCCESS),
    }
}

fn show_sessions(dir: &Path, out: &mut impl Write) -> Result<()> {
    for summary in list_sessions(dir)? {
        write_session(&summary, out)?;
    }
    Ok(())
}

fn write_session(summary: &SessionSummary, out: &mut impl Write) -> Result<()> {
    let short_id: String = summary.session_id.chars().take(SESSION_ID_PREVIEW_CHARS).collect();

    writeln!(out, "{}", summary.path.display())?;
    writeln!(out, "  Date: {}", summary.date)?;
    writeln!(out, "  Session: {short_id}...")?;
    if let Some(first) = &summary.first_message {
        writeln!(out, "  First: {first}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn show_search(
    dir: &Path,
    pattern: &str,
    cli: &Cli,
    options: &QueryOptions,
    out: &mut impl Write,
) -> Result<()> {
    // Validate everything before the archive is touched
    let mut query = SearchQuery::new(pattern)?
        .with_limit(resolve_limit(cli.limit, DEFAULT_SEARCH_LIMIT))
        .with_context(cli.context);
    if let Some(since) = &cli.since {
        let window = parse_duration(since)?;
        query = query.with_cutoff(cutoff_from(Local::now().naive_local(), window));
    }

    let results = search_transcripts(dir, &query, options)?;
    for found in &results.matches {
        write_match(found, out)?;
    }
    Ok(())
}

fn write_match(found: &SearchMatch, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", found.text)?;
    for line in &found.context {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn show_section(file: &Path, cli: &Cli, options: &QueryOptions, out: &mut impl Write) -> Result<()> {
    let selector = match (&cli.lines, cli.offset) {
        (Some(range), _) => Selector::Lines(parse_line_range(range)?),
        (None, Some(offset)) if offset > 0 => Selector::Offset(offset),
        _ => Selector::Head,
    };
    let limit = resolve_limit(cli.limit, DEFAULT_READ_LIMIT);

    for line in read_section(file, selector, limit, options)? {
        writeln!(out, "{}", line.text)?;
    }
    Ok(())
}
