mod common;

use common::fixtures::*;
use common::{TestResult, init_logger, render_one, single_module_builder};
use serde_json::json;
use vitae::{
    BackendKind, BuildError, Builder, ContactModule, EventModule, JobModule, LatexContext,
    LatexOptions, PublicationModule, RenderError, Setup, category,
};

#[test]
fn test_title_block_from_personal_data() -> TestResult {
    init_logger();
    let builder = Builder::new().register_backend(LatexContext::new());
    let latex = render_one(builder, &json!({"personal": personal()}))?;
    assert_eq!(
        latex,
        "\\documentclass{academiccv}

\\begin{document}
\\makecvtitle{
\tauthor = {Testy McTestface},
\tposition = {Professional Tester},
\torganization = {Tests, Inc.},
\tphoto = {photo.jpg},
\temail = {testy@example.org},
\temail = {tester@example.com},
\twebsite = {https://example.org},
\tgithub = {testy},
\tstreet = {Test Street 1},
\tzipcode = {1234},
\tcity = {Testville},
\tcountry = {Testland},
}

\\end{document}"
    );
    Ok(())
}

#[test]
fn test_preamble_and_setups() -> TestResult {
    let ctx = LatexContext::new()
        .with_class_option("a4paper")
        .with_class_option("11pt")
        .with_package("hyperref")
        .with_setup("job", Setup::new().with("start", "X").with("swap", false))
        .with_preamble("\\newcommand{\\tester}{Testy}");
    let latex = render_one(Builder::new().register_backend(ctx), &json!({}))?;
    assert_eq!(
        latex,
        "\\documentclass[a4paper, 11pt]{academiccv}

\\usepackage{hyperref}
\\jobSetup{
\tstart = {X},
\tswap = false,
}

\\newcommand{\\tester}{Testy}
\\begin{document}
\\end{document}"
    );
    Ok(())
}

#[test]
fn test_options_from_json() -> TestResult {
    let options: LatexOptions = serde_json::from_value(json!({
        "documentClass": "article",
        "packages": ["geometry"],
        "setups": {"talk": {"title": "\\itshape"}, "job": {"margin_size": "2em"}}
    }))?;
    let latex = render_one(
        Builder::new().register_backend(LatexContext::with_options(options)),
        &json!({}),
    )?;
    let talk = latex.find("\\talkSetup{\n\ttitle = {\\itshape},\n}\n").ok_or("talk setup")?;
    let job = latex.find("\\jobSetup{\n\tmargin-size = {2em},\n}\n").ok_or("job setup")?;
    assert!(latex.starts_with("\\documentclass{article}\n\n\\usepackage{geometry}\n"));
    assert!(talk < job);
    Ok(())
}

#[test]
fn test_job_records_with_style() -> TestResult {
    let builder = single_module_builder("jobs", Box::new(JobModule::new()), LatexContext::new());
    let latex = render_one(builder, &json!({"jobs": complete_jobs()}))?;
    assert!(latex.contains(
        "\\section{Work Experience}

\\subsection{Current}

\\job{
\tstart = {01 Jan 2020},
\tend = {Present},
\ttitle = {Senior Tester},
\torganization = {Tests, Inc.},
\tdescription = {Writes \\textbf{more} tests},
\tstyle = {
\t\tstart = {\\bfseries},
\t\tswap = false,
\t},
}
\\subsection{Past}

\\job{
"
    ));
    assert!(latex.contains("\tdescription = {Wrote \\emph{many} tests},\n"));
    Ok(())
}

#[test]
fn test_publication_links() -> TestResult {
    let builder = single_module_builder(
        "publications",
        Box::new(PublicationModule::new()),
        LatexContext::new(),
    );
    let latex = render_one(builder, &json!({"publications": publications()}))?;
    let journal = latex.find("\\subsection{Journal}").ok_or("journal")?;
    let conference = latex.find("\\subsection{Conference}").ok_or("conference")?;
    assert!(journal < conference);
    assert!(latex.contains("\tdoi = {10.1000/test},\n"));
    Ok(())
}

#[test]
fn test_contact_module_in_title() -> TestResult {
    let builder = Builder::new()
        .register_module(Some("extra"), Box::new(ContactModule::new()), category::TITLE)
        .register_backend(LatexContext::new());
    let input = json!({"personal": personal(), "extra": {"orcid": "0000-0001"}});
    let latex = render_one(builder, &input)?;
    assert!(latex.contains("\tcountry = {Testland},\n\torcid = {0000-0001},\n}\n\n\\end{document}"));
    Ok(())
}

#[test]
fn test_unsupported_record_fails_only_when_rendered() -> TestResult {
    let empty = single_module_builder("events", Box::new(EventModule::new()), LatexContext::new());
    assert!(render_one(empty, &json!({}))?.contains("\\section{Attended events}"));

    let loaded = single_module_builder("events", Box::new(EventModule::new()), LatexContext::new());
    let err = render_one(loaded, &json!({"events": [{"year": 2020, "name": "TestConf"}]}))
        .unwrap_err();
    assert!(matches!(
        err,
        BuildError::Render(RenderError::Unsupported {
            record: "Event",
            backend: BackendKind::Latex
        })
    ));
    Ok(())
}

#[test]
fn test_heading_level_out_of_range() {
    let builder = single_module_builder(
        "jobs",
        Box::new(JobModule::new().with_level(6)),
        LatexContext::new(),
    );
    let err = render_one(builder, &json!({})).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Render(RenderError::InvalidHeadingLevel { level: 6, .. })
    ));
}
