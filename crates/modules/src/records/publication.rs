use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter, escape_html};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::de::{opt_string_or_number, string_or_number};
use vitae_types::{Fragment, Setup, dates};

/// A published work. Title, authors and year are required.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Publication {
    pub title: Fragment,
    pub authors: Fragment,
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    /// Short citation key, shown as `[reference]` before the title.
    #[serde(default)]
    pub reference: Fragment,
    #[serde(default, rename = "where")]
    pub venue: Fragment,
    #[serde(default, rename = "shortWhere")]
    pub short_venue: Fragment,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub doi: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub arxiv: Option<String>,
    #[serde(default)]
    pub note: Fragment,
    #[serde(default)]
    pub style: Option<Setup>,
}

impl Publication {
    pub fn new(title: &str, authors: &str, year: &str) -> Self {
        Self {
            title: Fragment::new(title),
            authors: Fragment::new(authors),
            year: year.to_string(),
            reference: Fragment::absent(),
            venue: Fragment::absent(),
            short_venue: Fragment::absent(),
            doi: None,
            arxiv: None,
            note: Fragment::absent(),
            style: None,
        }
    }

    fn markup<W: MarkupWriter>(&self, w: &mut W) -> String {
        let mut out = w.open_div("item");
        out.push_str(&w.open_div("align"));
        let title = if self.reference.is_empty() {
            w.fragment(&self.title)
        } else {
            let reference = format!("[{}]", w.fragment(&self.reference));
            format!("{} {}", w.span_block("reference", &reference), w.fragment(&self.title))
        };
        out.push_str(&w.simple_div_block("title", &title));
        out.push_str(&w.text_div_block("time", &self.year));
        out.push_str(&w.close_block());

        let mut details = w.fragment_span("authors", &self.authors, ". ");
        details.push_str(&w.fragment_span("where", &self.venue, ". "));
        details.push_str(&w.fragment_span("shortWhere", &self.short_venue, ". "));
        if let Some(doi) = &self.doi {
            details.push_str(&w.link_block(
                "doi",
                &format!("https://doi.org/{}", doi),
                &escape_html(&format!("DOI: {}", doi)),
                ". ",
            ));
        }
        if let Some(arxiv) = &self.arxiv {
            details.push_str(&w.link_block(
                "doi arxiv",
                &format!("https://arxiv.org/abs/{}", arxiv),
                &escape_html(&format!("arXiv: {}", arxiv)),
                ". ",
            ));
        }
        details.push_str(&w.fragment_span("note", &self.note, ". "));
        out.push_str(&w.paragraph_block("details", &details));
        out.push_str(&w.close_block());
        out
    }
}

impl Record for Publication {
    const NAME: &'static str = "Publication";
    const DEFAULT_SECTION: &'static str = "Publications";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-journal");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Declared;

    fn year(&self) -> Option<i32> {
        dates::extract_year(&self.year)
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut body = ctx.format_fragment("title", &self.title);
        body.push_str(&ctx.format_fragment("authors", &self.authors));
        body.push_str(&ctx.format_variable("year", &self.year));
        body.push_str(&ctx.format_fragment("reference", &self.reference));
        body.push_str(&ctx.format_fragment("where", &self.venue));
        body.push_str(&ctx.format_fragment("shortWhere", &self.short_venue));
        body.push_str(&ctx.format_optional("doi", self.doi.as_deref()));
        body.push_str(&ctx.format_optional("arxiv", self.arxiv.as_deref()));
        body.push_str(&ctx.format_fragment("note", &self.note));
        body.push_str(&ctx.format_style(self.style.as_ref()));
        Ok(ctx.record("publication", &body))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }
}
