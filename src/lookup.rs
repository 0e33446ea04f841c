use std::io::Write;

use crate::error::DictError;
use crate::page::{classify, parse_entry, parse_extended, Classification, ResultsDocument};
use crate::render::Renderer;
use crate::yodaodict::Fetch;

#[derive(Debug, Clone, Copy, Default)]
pub struct LookupOptions {
    /// Also print web phrases and bilingual examples
    pub extended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NoResult,
    Suggested,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Found => 0,
            Outcome::NoResult | Outcome::Suggested => 2,
        }
    }
}

pub fn lookup<F: Fetch, W: Write>(
    fetcher: &F,
    query: &str,
    options: LookupOptions,
    renderer: &mut Renderer<W>,
) -> Result<Outcome, DictError> {
    let markup = fetcher.fetch(query)?;
    render_markup(query, &markup, options, renderer)
}

pub fn render_markup<W: Write>(
    query: &str,
    markup: &str,
    options: LookupOptions,
    renderer: &mut Renderer<W>,
) -> Result<Outcome, DictError> {
    let document = ResultsDocument::parse(markup);

    let outcome = match classify(document.container()) {
        Classification::NoResult => {
            tracing::debug!(query, "no entries");
            renderer.no_result(query)?;
            Outcome::NoResult
        }
        Classification::Suggestions(suggestions) => {
            tracing::debug!(query, count = suggestions.len(), "did-you-mean page");
            renderer.suggestions(&suggestions)?;
            Outcome::Suggested
        }
        Classification::Valid(container) => {
            renderer.entry(&parse_entry(container))?;
            if options.extended {
                renderer.extended(&parse_extended(container))?;
            }
            Outcome::Found
        }
    };

    Ok(outcome)
}
