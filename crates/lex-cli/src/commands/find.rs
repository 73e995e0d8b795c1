use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use lex_core::snapshot::Snapshot;
use lex_query::debounce::Debouncer;
use lex_query::palette::quick_find;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::cli::root_commands::FindArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output, render};

/// Handle `lexdesk find`.
pub async fn handle(args: &FindArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.query.quick_find_limit);

    if args.live {
        let session = LiveSession {
            snapshot: &ctx.snapshot,
            limit,
            format: flags.format,
            delay: ctx.config.query.search_debounce(),
        };
        let input = BufReader::new(tokio::io::stdin());
        return session.run(input, &mut std::io::stdout()).await;
    }

    let term = args.term.as_deref().unwrap_or_default();
    let hits = quick_find(&ctx.snapshot.cases, &ctx.snapshot.clients, term, limit);
    output(&hits, flags.format)
}

/// Quick find driven by a stream of terms, one per line.
struct LiveSession<'a> {
    snapshot: &'a Snapshot,
    limit: usize,
    format: OutputFormat,
    delay: Duration,
}

impl LiveSession<'_> {
    /// Answer each term once typing settles. At end of input the last
    /// pending term is still answered.
    async fn run<R, W>(&self, input: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let (settled_tx, mut settled_rx) = mpsc::unbounded_channel::<String>();
        let debouncer = Debouncer::new(self.delay, move |term: String| {
            let _ = settled_tx.send(term);
        });

        let mut lines = input.lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line.context("failed to read search term")? {
                        Some(term) => debouncer.call(term),
                        None => break,
                    }
                }
                Some(term) = settled_rx.recv() => self.answer(&term, out)?,
            }
        }

        while debouncer.is_pending() {
            tokio::time::sleep(self.delay).await;
        }
        drop(debouncer);
        while let Some(term) = settled_rx.recv().await {
            self.answer(&term, out)?;
        }
        Ok(())
    }

    fn answer<W: Write>(&self, term: &str, out: &mut W) -> anyhow::Result<()> {
        let hits = quick_find(&self.snapshot.cases, &self.snapshot.clients, term, self.limit);
        writeln!(out, "{}", render(&hits, self.format)?)?;
        Ok(())
    }
}
