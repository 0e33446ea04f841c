use std::io::{self, Write};

use console::{style, StyledObject};

use crate::page::{Definition, ExtendedContent, Suggestion, TranslationBody, TranslationEntry};

pub struct Renderer<W: Write> {
    out: W,
    color: bool,
}

impl Renderer<io::Stdout> {
    pub fn stdout() -> Self {
        Renderer {
            out: io::stdout(),
            color: console::colors_enabled(),
        }
    }
}

impl<W: Write> Renderer<W> {
    #[cfg(test)]
    pub fn plain(out: W) -> Self {
        Renderer { out, color: false }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint<D>(&self, value: D) -> StyledObject<D> {
        style(value).force_styling(self.color)
    }

    pub fn no_result(&mut self, query: &str) -> io::Result<()> {
        writeln!(self.out, "抱歉，没有找到「{}」相关的词", query)
    }

    pub fn suggestions(&mut self, suggestions: &[Suggestion]) -> io::Result<()> {
        let title = self.paint("您要找的是不是：").yellow();
        writeln!(self.out, "{}", title)?;
        for s in suggestions {
            let word = self.paint(&s.word).bold().green();
            if s.translation.is_empty() {
                writeln!(self.out, "  {}", word)?;
            } else {
                writeln!(self.out, "  {} : {}", word, s.translation)?;
            }
        }
        Ok(())
    }

    pub fn entry(&mut self, entry: &TranslationEntry) -> io::Result<()> {
        if let Some(title) = &entry.title {
            let title = self.paint(title).bold().green();
            writeln!(self.out, "  {}", title)?;
        }
        if let Some(pronunciation) = &entry.pronunciation {
            let pronunciation = self.paint(format!("  [{}]", pronunciation)).green().dim();
            writeln!(self.out, "{}", pronunciation)?;
        }
        writeln!(self.out)?;

        match &entry.body {
            TranslationBody::Definitions(definitions) => {
                self.section_title("基本释义")?;
                for definition in definitions {
                    self.definition(definition)?;
                }
            }
            TranslationBody::Basic(text) => {
                self.section_title("翻译")?;
                writeln!(self.out, "  {}", text)?;
            }
            TranslationBody::Missing => {
                self.section_title("翻译")?;
                writeln!(self.out, "  暂无释义")?;
            }
        }
        writeln!(self.out)
    }

    fn definition(&mut self, definition: &Definition) -> io::Result<()> {
        let label = self.paint(&definition.label).magenta();
        if definition.text.is_empty() {
            writeln!(self.out, "  {}", label)
        } else {
            writeln!(self.out, "  {} : {}", label, definition.text)
        }
    }

    pub fn extended(&mut self, content: &ExtendedContent) -> io::Result<()> {
        self.list_section("网络短语", content.web_phrases.as_deref())?;
        self.list_section("双语例句", content.bilingual.as_deref())
    }

    fn list_section(&mut self, title: &str, items: Option<&[String]>) -> io::Result<()> {
        self.section_title(title)?;
        match items {
            Some(items) => {
                for item in items {
                    writeln!(self.out, "  {}", item)?;
                }
            }
            None => {
                let note = self.paint("  该部分暂无内容").dim();
                writeln!(self.out, "{}", note)?;
            }
        }
        writeln!(self.out)
    }

    fn section_title(&mut self, title: &str) -> io::Result<()> {
        let txt = self.paint(format!("{:^8}", title)).magenta().dim();
        writeln!(self.out, "========{}========", txt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Renderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = Renderer::plain(Vec::new());
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn suggestion_without_translation_has_no_separator() {
        let out = render(|r| {
            r.suggestions(&[
                Suggestion {
                    word: "hallo".to_string(),
                    translation: String::new(),
                },
                Suggestion {
                    word: "hullo".to_string(),
                    translation: "int. 喂".to_string(),
                },
            ])
        });
        assert!(out.contains("  hallo\n"));
        assert!(out.contains("  hullo : int. 喂\n"));
        assert!(!out.contains("hallo :"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let entry = TranslationEntry {
            title: Some("hello".to_string()),
            pronunciation: Some("/həˈləʊ/".to_string()),
            body: TranslationBody::Basic("你好".to_string()),
        };
        let out = render(|r| r.entry(&entry));
        assert!(!out.contains('\u{1b}'));
        assert!(out.contains("  [/həˈləʊ/]\n"));
    }

    #[test]
    fn missing_extended_section_is_reported_softly() {
        let content = ExtendedContent {
            web_phrases: Some(vec!["hello world 你好世界".to_string()]),
            bilingual: None,
        };
        let out = render(|r| r.extended(&content));
        assert!(out.contains("网络短语"));
        assert!(out.contains("  hello world 你好世界\n"));
        assert!(out.contains("双语例句"));
        assert!(out.contains("该部分暂无内容"));
    }

    #[test]
    fn missing_body_is_reported_softly() {
        let entry = TranslationEntry {
            title: Some("x".to_string()),
            pronunciation: None,
            body: TranslationBody::Missing,
        };
        assert!(render(|r| r.entry(&entry)).contains("暂无释义"));
    }
}
