use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::{BackendKind, RenderError};
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::de::opt_string_or_number;
use vitae_types::{Fragment, dates};

/// A conference or workshop attended.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub year: Option<String>,
    pub name: Fragment,
    #[serde(rename = "where")]
    pub venue: Fragment,
}

impl Event {
    pub fn new(year: &str, name: &str) -> Self {
        Self {
            year: Some(year.to_string()),
            name: Fragment::new(name),
            venue: Fragment::absent(),
        }
    }

    fn markup<W: MarkupWriter>(&self, w: &mut W) -> String {
        let mut out = w.open_div("item");
        out.push_str(&w.open_div("align"));
        out.push_str(&w.fragment_div_block("title", &self.name));
        out.push_str(&w.fragment_div_block("where", &self.venue));
        out.push_str(&w.close_block());
        out.push_str(&w.close_block());
        out
    }
}

impl Record for Event {
    const NAME: &'static str = "Event";
    const DEFAULT_SECTION: &'static str = "Attended events";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-calendar");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Chronological;

    fn year(&self) -> Option<i32> {
        self.year.as_deref().and_then(dates::extract_year)
    }

    fn render_latex(&self, _ctx: &mut LatexContext) -> Result<String, RenderError> {
        Err(RenderError::unsupported(Self::NAME, BackendKind::Latex))
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
    use crate::records::EventModule;
    use serde_json::json;

    #[test]
    fn test_latex_is_unsupported() {
        let err = Event::new("2020", "TestConf")
            .render_latex(&mut LatexContext::new())
            .unwrap_err();
        assert_eq!(err, RenderError::unsupported("Event", BackendKind::Latex));
    }

    #[test]
    fn test_empty_module_renders_in_latex() {
        // Nothing is rendered, so nothing is unsupported.
        let out = EventModule::new().render_latex(&mut LatexContext::new()).unwrap();
        assert_eq!(out, "\\section{Attended events}\n\n");
    }

    #[test]
    fn test_html_year_groups() {
        let mut module = EventModule::new();
        module
            .load(&json!([
                {"year": 2019, "name": "A", "where": "Oslo"},
                {"year": 2021, "name": "B"}
            ]))
            .unwrap();
        let out = module.render_html(&mut HtmlContext::new()).unwrap();
        let newer = out.find("<h3 class=\"2021\">2021</h3>").unwrap();
        let older = out.find("<h3 class=\"2019\">2019</h3>").unwrap();
        assert!(newer < older);
        assert!(out.contains("<div class=\"where\">\n\t\t\t\t\t\t\t\tOslo\n"));
    }
}
