//! Follow Netbox `next` cursors, asking before every further page

use std::io::{self, BufRead, Write};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::netbox::{NetboxClient, NetboxError, Page};

/// Yes/no question asked between pages
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Prompt that writes the question to `output` and reads one answer line
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Interactive prompt on stdin, with the question on stderr so stdout stays clean
pub fn stdin_prompt() -> LinePrompt<io::StdinLock<'static>, io::Stderr> {
    LinePrompt::new(io::stdin().lock(), io::stderr())
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} [y/N] ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            // EOF: nobody is there to answer
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Ask before fetching each following page
    Prompt,
    /// Follow every cursor without asking
    All,
    /// Never follow a cursor
    First,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    pub pages: usize,
    pub records: usize,
    /// Total reported by the server
    pub total: u64,
}

#[derive(Debug, Error)]
pub enum PagerError {
    #[error(transparent)]
    Fetch(#[from] NetboxError),

    #[error("could not read the answer")]
    Prompt(#[from] io::Error),
}

pub struct Pager<'a, P> {
    client: &'a NetboxClient,
    prompt: P,
    mode: PageMode,
    max_pages: Option<usize>,
}

impl<'a, P: Prompt> Pager<'a, P> {
    pub fn new(client: &'a NetboxClient, prompt: P, mode: PageMode) -> Self {
        Self {
            client,
            prompt,
            mode,
            max_pages: None,
        }
    }

    /// Stop after `max` pages even if the server has more
    pub fn max_pages(mut self, max: Option<usize>) -> Self {
        self.max_pages = max.filter(|m| *m > 0);
        self
    }

    /// Fetch `first`, then keep following `next` while the mode allows it.
    /// `on_page` sees every page in server order.
    pub async fn run<T, F>(&mut self, first: Url, mut on_page: F) -> Result<PageStats, PagerError>
    where
        T: DeserializeOwned,
        F: FnMut(&Page<T>),
    {
        let mut stats = PageStats::default();
        let mut url = first;

        loop {
            let page: Page<T> = self.client.get_json(url).await?;
            stats.pages += 1;
            stats.records += page.results.len();
            stats.total = page.count;
            on_page(&page);

            let Some(next) = page.next.as_deref().filter(|_| page.has_next()) else {
                debug!(pages = stats.pages, "last page reached");
                break;
            };

            if self.max_pages.is_some_and(|max| stats.pages >= max) {
                debug!(pages = stats.pages, "page limit reached");
                break;
            }

            let proceed = match self.mode {
                PageMode::All => true,
                PageMode::First => false,
                PageMode::Prompt => self.prompt.confirm(&format!(
                    "Showing {} of {} results. Fetch the next page?",
                    stats.records, stats.total
                ))?,
            };

            if !proceed {
                debug!(next, "not following cursor");
                break;
            }

            debug!(next, "following cursor");
            url = self.client.follow(next)?;
        }

        Ok(stats)
    }
}
