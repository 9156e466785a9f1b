use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::de::opt_string_or_number;
use vitae_types::{Fragment, Setup, dates};

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Award {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub year: Option<String>,
    pub description: Fragment,
    pub style: Option<Setup>,
}

impl Award {
    pub fn new(year: &str, description: &str) -> Self {
        Self {
            year: Some(year.to_string()),
            description: Fragment::new(description),
            style: None,
        }
    }
}

/// Awards and service entries share one layout: description left, year right.
pub(crate) fn dated_line<W: MarkupWriter>(w: &mut W, year: Option<&str>, description: &Fragment) -> String {
    let mut out = w.open_div("item");
    out.push_str(&w.open_div("align"));
    out.push_str(&w.fragment_div_block("title", description));
    if let Some(year) = year {
        out.push_str(&w.text_div_block("details", year));
    }
    out.push_str(&w.close_block());
    out.push_str(&w.close_block());
    out
}

impl Record for Award {
    const NAME: &'static str = "Award";
    const DEFAULT_SECTION: &'static str = "Awards";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-medal");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Flat;

    fn year(&self) -> Option<i32> {
        self.year.as_deref().and_then(dates::extract_year)
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut body = String::new();
        if let Some(year) = &self.year {
            body.push_str(&ctx.format_variable("year", &ctx.format_date(year)));
        }
        body.push_str(&ctx.format_fragment("description", &self.description));
        body.push_str(&ctx.format_style(self.style.as_ref()));
        Ok(ctx.record("award", &body))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(dated_line(ctx, self.year.as_deref(), &self.description))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(dated_line(ctx, self.year.as_deref(), &self.description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_formats_full_dates() {
        let award = Award::new("2019-06-01", "Best paper");
        let out = award.render_latex(&mut LatexContext::new()).unwrap();
        assert_eq!(out, "\\award{\n\tyear = {01 Jun 2019},\n\tdescription = {Best paper},\n}\n");
    }

    #[test]
    fn test_html_layout() {
        let out = Award::new("2019", "Best paper").render_html(&mut HtmlContext::new()).unwrap();
        assert_eq!(
            out,
            "\t\t\t<div class=\"item\">
\t\t\t\t<div class=\"align\">
\t\t\t\t\t<div class=\"title\">
\t\t\t\t\t\tBest paper
\t\t\t\t\t</div>
\t\t\t\t\t<div class=\"details\">
\t\t\t\t\t\t2019
\t\t\t\t\t</div>
\t\t\t\t</div>
\t\t\t</div>
"
        );
    }
}
