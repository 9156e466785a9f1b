use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::de::opt_string_or_number;
use vitae_types::{Fragment, Setup, dates};

/// A talk given at a conference or seminar.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Talk {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub date: Option<String>,
    pub title: Fragment,
    pub conference: Fragment,
    #[serde(rename = "where")]
    pub venue: Fragment,
    pub pdf: Option<String>,
    pub video: Option<String>,
    pub style: Option<Setup>,
}

impl Talk {
    pub fn new(title: &str, date: &str) -> Self {
        Self {
            title: Fragment::new(title),
            date: Some(date.to_string()),
            ..Self::default()
        }
    }

    fn markup<W: MarkupWriter>(&self, w: &mut W) -> String {
        let mut out = w.open_div("item");
        out.push_str(&w.open_div("align"));
        out.push_str(&w.fragment_div_block("title", &self.title));
        if let Some(date) = &self.date {
            let time = w.format_date(date);
            out.push_str(&w.text_div_block("time", &time));
        }
        out.push_str(&w.close_block());

        let mut details = w.fragment_span("conference", &self.conference, ". ");
        details.push_str(&w.fragment_span("where", &self.venue, ". "));
        if let Some(pdf) = &self.pdf {
            details.push_str(&w.link_block("pdf", pdf, "Link to PDF", ". "));
        }
        if let Some(video) = &self.video {
            details.push_str(&w.link_block("video", video, "Link to video", ". "));
        }
        out.push_str(&w.paragraph_block("details", &details));
        out.push_str(&w.close_block());
        out
    }
}

impl Record for Talk {
    const NAME: &'static str = "Talk";
    const DEFAULT_SECTION: &'static str = "Talks";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-sound-high");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Chronological;

    fn year(&self) -> Option<i32> {
        self.date.as_deref().and_then(dates::extract_year)
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut body = String::new();
        if let Some(date) = &self.date {
            body.push_str(&ctx.format_variable("date", &ctx.format_date(date)));
        }
        body.push_str(&ctx.format_fragment("title", &self.title));
        body.push_str(&ctx.format_fragment("conference", &self.conference));
        body.push_str(&ctx.format_fragment("where", &self.venue));
        body.push_str(&ctx.format_style(self.style.as_ref()));
        Ok(ctx.record("talk", &body))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;
    use crate::records::TalkModule;
    use serde_json::json;

    #[test]
    fn test_latex() {
        let talk: Talk = serde_json::from_value(json!({
            "date": "2019-05-02",
            "title": "On *tests*",
            "conference": "TestConf",
            "where": "Oslo",
            "pdf": "https://example.org/t.pdf"
        }))
        .unwrap();
        let out = talk.render_latex(&mut LatexContext::new()).unwrap();
        assert_eq!(
            out,
            "\\talk{\n\tdate = {02 May 2019},\n\ttitle = {On \\emph{tests}},\n\tconference = {TestConf},\n\twhere = {Oslo},\n}\n"
        );
    }

    #[test]
    fn test_html_links() {
        let talk = Talk {
            conference: Fragment::new("TestConf"),
            pdf: Some("t.pdf".into()),
            video: Some("t.mp4".into()),
            ..Talk::new("A talk", "2019-05-02")
        };
        let out = talk.render_html(&mut HtmlContext::new()).unwrap();
        assert!(out.contains("02 May 2019\n"));
        assert!(out.contains(
            "<span class=\"conference\">TestConf. </span><a class=\"pdf\" href=\"t.pdf\">Link to PDF</a>. <a class=\"video\" href=\"t.mp4\">Link to video</a>. \n"
        ));
    }

    #[test]
    fn test_chronological_load() {
        let mut module = TalkModule::new();
        module
            .load(&json!([
                {"title": "A", "date": "2018-01-01"},
                {"title": "B", "date": "2020-01-01"},
                {"title": "C"},
                {"title": "D", "date": 2018}
            ]))
            .unwrap();
        let labels: Vec<Option<&str>> =
            module.groups().iter().map(|g| g.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("2020"), Some("2018"), None]);
        assert_eq!(module.groups()[1].records.len(), 2);
    }
}
