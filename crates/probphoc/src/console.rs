//! Colored console output for batch scoring events.
//!
//! A `tracing` layer that renders the `backend_ready`, `batch_start`,
//! `batch_end` and `thread_pool_fallback` events emitted by `probphoc_batch`. Call [`init`]
//! once at program start.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the console layer as the global subscriber.
///
/// Only the first call has effect. `RUST_LOG` directives are honored on top
/// of `probphoc_batch=debug`. Does nothing if another global subscriber is
/// already set.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "probphoc_batch=debug".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BatchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats batch events with colors.
pub struct BatchConsoleLayer;

impl<S: Subscriber> Layer<S> for BatchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("probphoc_batch") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_batch_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    mode: Option<String>,
    variant: Option<String>,
    dtype: Option<String>,
    backend: Option<String>,
    thread_count: Option<String>,
    error: Option<String>,
    rows: Option<u64>,
    rows_a: Option<u64>,
    rows_b: Option<u64>,
    dims: Option<u64>,
    pairs: Option<u64>,
    threads: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "mode" => &mut self.mode,
            "variant" => &mut self.variant,
            "dtype" => &mut self.dtype,
            "backend" => &mut self.backend,
            "thread_count" => &mut self.thread_count,
            "error" => &mut self.error,
            _ => return,
        };
        *slot = Some(value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "rows" => &mut self.rows,
            "rows_a" => &mut self.rows_a,
            "rows_b" => &mut self.rows_b,
            "dims" => &mut self.dims,
            "pairs" => &mut self.pairs,
            "threads" => &mut self.threads,
            "duration_ms" => &mut self.duration_ms,
            "speed" => &mut self.speed,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

fn format_batch_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("backend_ready") => format_backend_ready(v),
        Some("batch_start") => format_batch_start(v),
        Some("batch_end") => format_batch_end(v),
        Some("thread_pool_fallback") => format_pool_fallback(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_backend_ready(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} backend ready: thread count ({}), threads ({})",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        "[pool]".bright_cyan(),
        v.backend.as_deref().unwrap_or("?").bright_magenta(),
        v.thread_count.as_deref().unwrap_or("?").white(),
        count(v.threads).bright_yellow()
    )
}

fn format_batch_start(v: &EventVisitor) -> String {
    let mode = v.mode.as_deref().unwrap_or("batch");
    let shape = match mode {
        "cross" => format!("{} x {}", count(v.rows_a), count(v.rows_b)),
        _ => count(v.rows),
    };

    format!(
        "{} {} {} {} {} over rows ({}), dims ({}), pairs ({}) on {}",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        format!("[{}]", mode).bright_cyan(),
        v.variant.as_deref().unwrap_or("?").white().bold(),
        v.dtype.as_deref().unwrap_or("?").yellow(),
        shape.bright_yellow(),
        count(v.dims).bright_yellow(),
        count(v.pairs).bright_yellow(),
        v.backend.as_deref().unwrap_or("?").bright_magenta()
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    let mode = v.mode.as_deref().unwrap_or("batch");

    format!(
        "{} {} {} scored {} pairs: time spent ({}), pair speed ({}/sec)",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        format!("[{}]", mode).bright_cyan(),
        count(v.pairs).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.speed).bright_magenta().bold()
    )
}

fn format_pool_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} {} could not build a pool of {} threads ({}), using the global pool",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[pool]".bright_cyan(),
        count(v.threads).white(),
        v.error.as_deref().unwrap_or("unknown error").bright_red()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}
