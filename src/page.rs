//! Parsing of the dictionary results page.
//!
//! The page has two layouts depending on lookup direction. English → Chinese
//! pages carry a `ul.basic` definitions list with part-of-speech labels;
//! Chinese → English pages carry the translation in the second
//! `div.trans-container` instead. Missing pieces are reported as `None`
//! rather than errors so rendering can pick whichever layout is present.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static MODULES: LazyLock<Selector> = LazyLock::new(|| selector("section.modules"));
static MAYBE: LazyLock<Selector> = LazyLock::new(|| selector("div.maybe"));
static MAYBE_WORD: LazyLock<Selector> = LazyLock::new(|| selector("div.maybe_word"));
static MAYBE_POINT: LazyLock<Selector> = LazyLock::new(|| selector("a.point"));
static MAYBE_TRANS: LazyLock<Selector> = LazyLock::new(|| selector("p.maybe_trans"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("div.word-head div"));
static PHONE: LazyLock<Selector> = LazyLock::new(|| selector("div.phone_con"));
static BASIC: LazyLock<Selector> = LazyLock::new(|| selector("ul.basic"));
static TRANS_CONTAINER: LazyLock<Selector> = LazyLock::new(|| selector("div.trans-container"));
static WEB_PHRASE: LazyLock<Selector> = LazyLock::new(|| selector("div.webPhrase"));
static BILINGUAL: LazyLock<Selector> = LazyLock::new(|| selector("div.blng_sents_part"));
static ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));

pub struct ResultsDocument {
    html: Html,
}

impl ResultsDocument {
    pub fn parse(markup: &str) -> Self {
        ResultsDocument {
            html: Html::parse_document(markup),
        }
    }

    /// The `section.modules` block holding every result, if the page has one.
    pub fn container(&self) -> Option<ElementRef<'_>> {
        self.html.select(&MODULES).next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub translation: String,
}

#[derive(Debug)]
pub enum Classification<'a> {
    NoResult,
    Suggestions(Vec<Suggestion>),
    Valid(ElementRef<'a>),
}

/// Checks are ordered: empty text first, then the did-you-mean block.
pub fn classify(container: Option<ElementRef<'_>>) -> Classification<'_> {
    let Some(container) = container else {
        return Classification::NoResult;
    };

    if container.text().all(|t| t.trim().is_empty()) {
        return Classification::NoResult;
    }

    if let Some(maybe) = container.select(&MAYBE).next() {
        let suggestions = maybe
            .select(&MAYBE_WORD)
            .filter_map(|word_div| {
                let word = first_text(word_div, &MAYBE_POINT)?;
                let translation = first_text(word_div, &MAYBE_TRANS).unwrap_or_default();
                Some(Suggestion { word, translation })
            })
            .filter(|s| !s.word.is_empty())
            .collect();
        return Classification::Suggestions(suggestions);
    }

    Classification::Valid(container)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Part of speech, or the leading character when the item has none
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationBody {
    Definitions(Vec<Definition>),
    /// Single translation block of a Chinese → English page
    Basic(String),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub title: Option<String>,
    pub pronunciation: Option<String>,
    pub body: TranslationBody,
}

pub fn parse_entry(container: ElementRef<'_>) -> TranslationEntry {
    let title = container
        .select(&TITLE)
        .next()
        .and_then(first_child_text)
        .map(|t| t.trim().to_string());

    // 两种页面都可能带发音，英文是音标，中文是拼音
    let pronunciation = container
        .select(&PHONE)
        .next()
        .map(squash)
        .filter(|p| !p.is_empty());

    if let Some(basic) = container.select(&BASIC).next() {
        let definitions = basic.select(&ITEM).map(split_definition).collect();

        return TranslationEntry {
            title,
            pronunciation,
            body: TranslationBody::Definitions(definitions),
        };
    }

    tracing::debug!("no definitions list, reading reverse lookup layout");
    let body = container
        .select(&TRANS_CONTAINER)
        .nth(1)
        .and_then(first_child_text)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .map(TranslationBody::Basic)
        .unwrap_or(TranslationBody::Missing);

    TranslationEntry {
        title,
        pronunciation,
        body,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedContent {
    pub web_phrases: Option<Vec<String>>,
    pub bilingual: Option<Vec<String>>,
}

pub fn parse_extended(container: ElementRef<'_>) -> ExtendedContent {
    ExtendedContent {
        web_phrases: list_items(container, &WEB_PHRASE),
        bilingual: list_items(container, &BILINGUAL),
    }
}

fn list_items(container: ElementRef<'_>, block: &Selector) -> Option<Vec<String>> {
    container
        .select(block)
        .next()
        .map(|b| b.select(&ITEM).map(squash).collect())
}

fn split_definition(item: ElementRef<'_>) -> Definition {
    let parts: Vec<String> = child_texts(item)
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if parts.len() > 1 {
        return Definition {
            label: parts[0].clone(),
            text: parts[1..].join(" "),
        };
    }

    let (label, text) = split_label(parts.first().map(String::as_str).unwrap_or(""));
    Definition {
        label: label.to_string(),
        text: text.trim_start().to_string(),
    }
}

const PARTS_OF_SPEECH: &[&str] = &[
    "n", "v", "vt", "vi", "adj", "adv", "int", "interj", "prep", "pron", "conj", "num", "art",
    "abbr", "aux", "pl", "det",
];

/// Splits `n.苹果` into `n.` and `苹果`; without a part-of-speech prefix the
/// first character becomes the label.
pub fn split_label(text: &str) -> (&str, &str) {
    if let Some(dot) = text.find('.') {
        if PARTS_OF_SPEECH.contains(&&text[..dot]) {
            return text.split_at(dot + 1);
        }
    }

    match text.chars().next() {
        Some(first) => text.split_at(first.len_utf8()),
        None => ("", ""),
    }
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

fn first_child_text(el: ElementRef<'_>) -> Option<String> {
    child_texts(el).into_iter().find(|t| !t.trim().is_empty())
}

/// Text of each direct child node, elements contributing all their text.
fn child_texts(el: ElementRef<'_>) -> Vec<String> {
    el.children()
        .map(|node| match node.value().as_text() {
            Some(text) => String::from(&**text),
            None => ElementRef::wrap(node)
                .map(|child| child.text().collect())
                .unwrap_or_default(),
        })
        .collect()
}

/// All text nodes trimmed and joined by single spaces.
fn squash(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
