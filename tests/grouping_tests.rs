mod common;

use common::fixtures::*;
use common::{TestResult, render_one, single_module_builder};
use serde_json::json;
use vitae::{
    BuildError, HtmlContext, JobModule, LoadError, MarkdownContext, Module, TalkModule,
};

#[test]
fn test_chronological_grouping_is_deterministic() -> TestResult {
    let mut module = TalkModule::new();
    module.load(&talks(&[json!(2020), json!(2019), json!(2020)]))?;
    let grouped: Vec<(Option<&str>, Vec<String>)> = module
        .groups()
        .iter()
        .map(|group| {
            let titles = group.records.iter().map(|talk| talk.title.to_string()).collect();
            (group.label.as_deref(), titles)
        })
        .collect();
    assert_eq!(
        grouped,
        vec![
            (Some("2020"), vec!["talk0".to_string(), "talk2".to_string()]),
            (Some("2019"), vec!["talk1".to_string()]),
        ]
    );
    Ok(())
}

#[test]
fn test_chronological_headings_in_html() -> TestResult {
    let builder = single_module_builder("talks", Box::new(TalkModule::new()), HtmlContext::new());
    let input = json!({"talks": talks(&[json!("2018-03-01"), json!("soon"), json!(2022)])});
    let html = render_one(builder, &input)?;
    let newest = html.find("<h3 class=\"2022\">2022</h3>").ok_or("2022 heading")?;
    let oldest = html.find("<h3 class=\"2018\">2018</h3>").ok_or("2018 heading")?;
    let undated = html.find("talk1").ok_or("undated talk")?;
    assert!(newest < oldest && oldest < undated);
    assert_eq!(html.matches("<h3").count(), 2);
    Ok(())
}

#[test]
fn test_declared_order_wins_over_key_order() -> TestResult {
    let builder = single_module_builder("jobs", Box::new(JobModule::new()), MarkdownContext::new());
    let input = json!({
        "jobs": {
            "A": [{"title": "In A"}],
            "B": [{"title": "In B"}],
            "order": ["B", "A"]
        }
    });
    let markdown = render_one(builder, &input)?;
    let b = markdown.find("## B").ok_or("group B")?;
    let a = markdown.find("## A").ok_or("group A")?;
    assert!(b < a);
    assert!(markdown.find("In B").ok_or("record B")? < markdown.find("In A").ok_or("record A")?);
    Ok(())
}

#[test]
fn test_missing_order_aborts_the_build() {
    let builder = single_module_builder("jobs", Box::new(JobModule::new()), HtmlContext::new());
    let err = render_one(builder, &json!({"jobs": {"A": []}})).unwrap_err();
    match err {
        BuildError::Load(LoadError::MissingOrder { module }) => assert_eq!(module, "Work Experience"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_record_names_the_module() {
    let builder = single_module_builder("talks", Box::new(TalkModule::new()), HtmlContext::new());
    let err = render_one(builder, &json!({"talks": [{"title": {"not": "text"}}]})).unwrap_err();
    assert!(matches!(err, BuildError::Load(LoadError::InvalidRecord { .. })));
    assert!(err.to_string().contains("Talks"));
}
