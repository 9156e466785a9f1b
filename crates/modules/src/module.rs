use crate::error::LoadError;
use crate::grouping::{self, Group, GroupingStrategy};
use crate::header::SectionHeader;
use crate::record::Record;
use serde_json::Value;
use slug::slugify;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::Fragment;

/// A content unit that loads its part of the input and renders it in every backend.
pub trait Module: Send + Sync {
    fn header(&self) -> &SectionHeader;

    /// Fills the module from the value stored under its load key.
    fn load(&mut self, value: &Value) -> Result<(), LoadError>;

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError>;

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError>;

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError>;
}

/// A module holding grouped records of one type.
#[derive(Debug, Clone)]
pub struct GroupedModule<R> {
    header: SectionHeader,
    strategy: GroupingStrategy,
    groups: Vec<Group<R>>,
}

impl<R: Record> Default for GroupedModule<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> GroupedModule<R> {
    /// A module with the record type's default section, level, icon and grouping.
    pub fn new() -> Self {
        let mut header = SectionHeader::new(R::DEFAULT_LEVEL, R::DEFAULT_SECTION);
        if let Some(icon) = R::DEFAULT_ICON {
            header = header.with_icon(icon);
        }
        Self {
            header,
            strategy: R::DEFAULT_GROUPING,
            groups: Vec::new(),
        }
    }

    pub fn with_header(mut self, header: SectionHeader) -> Self {
        self.header = header;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.header.level = level;
        self
    }

    pub fn with_section(mut self, section: &str) -> Self {
        self.header.section = section.to_string();
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.header = self.header.with_icon(icon);
        self
    }

    pub fn with_introduction(mut self, introduction: impl Into<Fragment>) -> Self {
        self.header = self.header.with_introduction(introduction);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.header = self.header.with_class(class);
        self
    }

    pub fn with_strategy(mut self, strategy: GroupingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replaces the loaded groups.
    pub fn with_groups(mut self, groups: Vec<Group<R>>) -> Self {
        self.groups = groups;
        self
    }

    /// Replaces the loaded groups with one unlabeled group.
    pub fn with_records(self, records: Vec<R>) -> Self {
        self.with_groups(vec![Group::unlabeled(records)])
    }

    pub fn strategy(&self) -> GroupingStrategy {
        self.strategy
    }

    pub fn groups(&self) -> &[Group<R>] {
        &self.groups
    }

    /// Shared template for the block-markup backends.
    fn render_markup<W, F>(&self, writer: &mut W, render_record: F) -> Result<String, RenderError>
    where
        W: MarkupWriter,
        F: Fn(&R, &mut W) -> Result<String, RenderError>,
    {
        let header = &self.header;
        let sectioned = header.level > 0;
        let mut out = String::new();
        if sectioned {
            out.push_str(&writer.open_section(
                header.level,
                &header.section,
                &header.class(),
                header.icon.as_deref(),
            )?);
        }
        out.push_str(&writer.introduction(&header.introduction));
        for group in &self.groups {
            if let Some(label) = &group.label {
                let level = header.level.saturating_add(1);
                out.push_str(&writer.open_section(level, label, &slugify(label), None)?);
            }
            for record in &group.records {
                out.push_str(&render_record(record, writer)?);
            }
            if group.label.is_some() {
                out.push_str(&writer.close_block());
            }
        }
        if sectioned {
            out.push_str(&writer.close_block());
        }
        Ok(out)
    }
}

impl<R: Record> Module for GroupedModule<R> {
    fn header(&self) -> &SectionHeader {
        &self.header
    }

    fn load(&mut self, value: &Value) -> Result<(), LoadError> {
        self.groups = grouping::group_input(&self.header.section, self.strategy, value, R::year)?;
        log::debug!(
            "Loaded {} {} record(s) in {} group(s)",
            self.groups.iter().map(|g| g.records.len()).sum::<usize>(),
            R::NAME,
            self.groups.len()
        );
        Ok(())
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let header = &self.header;
        let mut out = ctx.open_section(header.level, &header.section)?;
        if !header.introduction.is_empty() {
            out.push_str(&ctx.fragment(&header.introduction));
            out.push_str("\n\n");
        }
        for group in &self.groups {
            if let Some(label) = &group.label {
                out.push_str(&ctx.open_section(header.level.saturating_add(1), label)?);
            }
            for record in &group.records {
                out.push_str(&record.render_latex(ctx)?);
            }
        }
        Ok(out)
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        self.render_markup(ctx, |record, ctx| record.render_html(ctx))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        self.render_markup(ctx, |record, ctx| record.render_markdown(ctx))
    }
}
