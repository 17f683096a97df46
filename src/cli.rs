// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Unlike a subcommand-style tool, manyheads has a single mode of operation:
// read a target list, probe everything, write the selected output formats.
// So the whole surface is one flat struct of flags plus one positional
// argument (the input file).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: For arguments the user may or may not pass
// =============================================================================

use clap::Parser;

/// Default user agent sent with every probe.
///
/// An old MSIE string blends into most access logs better than a
/// `reqwest/x.y` default would during reconnaissance runs.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; FSL 7.0.6.01001)";

/// Base name used for output artifacts when --output-all doesn't supply one.
pub const DEFAULT_OUTPUT_BASE: &str = "mhoutput";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "manyheads",
    version = "0.1.0",
    about = "Bulk-probe hosts and URLs over HTTP, capturing raw request/response dumps",
    long_about = "manyheads reads a newline-delimited list of hosts or URLs, probes every \
                  target concurrently with a configurable HTTP method, and writes the full \
                  wire-level request/response dumps in one or more output formats. Bare hosts \
                  are probed over both http:// and https://."
)]
pub struct Cli {
    /// Input file with one bare host or full URL per line
    ///
    /// This is a positional argument; it falls back to domains.txt in the
    /// working directory when omitted.
    #[arg(value_name = "FILE", default_value = "domains.txt")]
    pub input: String,

    /// Write the whole ordered result set as one JSON document
    #[arg(short = 'J', long = "output-json")]
    pub output_json: bool,

    /// Write one greppable single-line record per result
    #[arg(short = 'G', long = "output-grep")]
    pub output_grep: bool,

    /// Write one raw-format file per target (named host.scheme.mhdata)
    #[arg(short = 'F', long = "output-files")]
    pub output_files: bool,

    /// Write a plaintext digest of every result with delimiter banners
    #[arg(short = 'S', long = "output-text")]
    pub output_text: bool,

    /// Emit every output format, using NAME as the base file name
    #[arg(short = 'A', long = "output-all", value_name = "NAME")]
    pub output_all: Option<String>,

    /// Number of concurrent probe workers to spawn
    ///
    /// This is the only throughput knob: at most this many requests are
    /// ever in flight at once.
    #[arg(short = 'w', long = "worker-count", default_value_t = 10)]
    pub worker_count: usize,

    /// HTTP method to probe with
    ///
    /// Any syntactically valid method token is accepted (HEAD, GET, POST,
    /// PROPFIND, ...); servers that dislike it will simply say so in the
    /// response.
    #[arg(short = 'm', long = "method", default_value = "HEAD")]
    pub method: String,

    /// User-Agent header value sent with every request
    #[arg(short = 'a', long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Skip TLS certificate verification (self-signed / expired targets)
    #[arg(short = 'k', long = "insecure")]
    pub insecure: bool,
}

impl Cli {
    // The four want_* helpers fold --output-all into each selector so the
    // output stage never has to look at two flags at once.

    pub fn want_json(&self) -> bool {
        self.output_json || self.output_all.is_some()
    }

    pub fn want_grep(&self) -> bool {
        self.output_grep || self.output_all.is_some()
    }

    pub fn want_files(&self) -> bool {
        self.output_files || self.output_all.is_some()
    }

    pub fn want_text(&self) -> bool {
        self.output_text || self.output_all.is_some()
    }

    /// Base name shared by all output artifacts for this run.
    pub fn output_base(&self) -> &str {
        self.output_all.as_deref().unwrap_or(DEFAULT_OUTPUT_BASE)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one flat struct instead of subcommands?
//    - The tool does exactly one thing per invocation
//    - Flags only select *how much output* to produce, not *what to do*
//    - clap still gives us --help, --version, and validation for free
//
// 2. What is Option<String> doing on output_all?
//    - The flag carries a value (the base file name)
//    - None = flag not passed, Some(name) = passed with that name
//    - as_deref() converts &Option<String> into Option<&str> for matching
//
// 3. Why usize for worker_count?
//    - It's a count of spawned tasks, so an unsigned pointer-sized integer
//      is the natural type (it also matches Vec/range APIs directly)
// -----------------------------------------------------------------------------
