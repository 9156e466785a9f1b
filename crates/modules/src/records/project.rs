use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::{Fragment, Setup};

/// A research or software project.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub short_name: Fragment,
    pub name: Fragment,
    pub role: Fragment,
    pub description: Fragment,
    pub style: Option<Setup>,
}

impl Project {
    pub fn new(name: &str) -> Self {
        Self {
            name: Fragment::new(name),
            ..Self::default()
        }
    }

    fn markup<W: MarkupWriter>(&self, w: &mut W) -> String {
        let mut out = w.open_div("item");
        out.push_str(&w.open_div("align"));
        out.push_str(&w.fragment_div_block("title", &self.name));
        out.push_str(&w.fragment_div_block("shortName", &self.short_name));
        out.push_str(&w.close_block());
        out.push_str(&w.fragment_div_block("role", &self.role));
        out.push_str(&w.fragment_div_block("details", &self.description));
        out.push_str(&w.close_block());
        out
    }
}

impl Record for Project {
    const NAME: &'static str = "Project";
    const DEFAULT_SECTION: &'static str = "Projects";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-light-bulb");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Flat;

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut body = ctx.format_fragment("shortName", &self.short_name);
        body.push_str(&ctx.format_fragment("name", &self.name));
        body.push_str(&ctx.format_fragment("role", &self.role));
        body.push_str(&ctx.format_fragment("description", &self.description));
        body.push_str(&ctx.format_style(self.style.as_ref()));
        Ok(ctx.record("project", &body))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }
}
