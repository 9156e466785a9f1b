use clap::{Parser, ValueEnum};
use std::env;
use std::fs;
use std::path::PathBuf;
use vitae::{
    AwardModule, BackendKind, Builder, EventModule, HtmlContext, JobModule, LatexContext,
    LinkModule, LogosModule, MarkdownContext, ProjectModule, PublicationModule, ServiceModule,
    SummaryModule, SupervisionModule, TalkModule, TeachModule, category,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    Latex,
    Html,
    Markdown,
    All,
}

#[derive(Parser, Debug)]
#[command(version, about = "Renders the academic CV demo", long_about = None)]
struct Args {
    /// Input document
    #[arg(long, default_value = "demos/data/academic_cv.json")]
    data: PathBuf,

    /// Directory the documents are written to
    #[arg(long, default_value = "target/cv")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::All)]
    format: Format,
}

/// Modules every backend can render.
fn common_modules(builder: Builder) -> Builder {
    builder
        .register_default_module(Some("jobs"), Box::new(JobModule::new()))
        .register_default_module(Some("publications"), Box::new(PublicationModule::new()))
        .register_default_module(Some("talks"), Box::new(TalkModule::new()))
        .register_default_module(Some("teaching"), Box::new(TeachModule::new()))
        .register_default_module(Some("supervision"), Box::new(SupervisionModule::new()))
        .register_default_module(Some("projects"), Box::new(ProjectModule::new()))
        .register_default_module(Some("awards"), Box::new(AwardModule::new()))
        .register_default_module(Some("service"), Box::new(ServiceModule::new()))
}

fn latex_builder() -> Builder {
    let ctx = LatexContext::new()
        .with_class_option("a4paper")
        .with_package("hyperref");
    common_modules(Builder::new()).register_backend(ctx)
}

/// HTML and Markdown add the summary, attended events and a source link.
fn markup_builder(kind: BackendKind) -> Builder {
    let builder = Builder::new()
        .register_default_module(Some("summary"), Box::new(SummaryModule::new()))
        .register_module(Some("logos"), Box::new(LogosModule::new()), category::SIDEBAR);
    let builder = common_modules(builder)
        .register_default_module(Some("events"), Box::new(EventModule::new()))
        .register_default_module(
            None,
            Box::new(
                LinkModule::new("Source", "https://example.org/cv.json")
                    .with_before("This page was generated from ")
                    .with_text("a JSON document")
                    .with_after("."),
            ),
        );
    match kind {
        BackendKind::Markdown => builder.register_backend(MarkdownContext::new()),
        _ => builder.register_backend(HtmlContext::new().with_stylesheet("cv.css")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info,vitae_core=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let input: serde_json::Value = serde_json::from_str(&fs::read_to_string(&args.data)?)?;
    println!("✓ Data loaded from {}", args.data.display());

    let mut builders = Vec::new();
    if matches!(args.format, Format::Latex | Format::All) {
        builders.push(latex_builder());
    }
    if matches!(args.format, Format::Html | Format::All) {
        builders.push(markup_builder(BackendKind::Html));
    }
    if matches!(args.format, Format::Markdown | Format::All) {
        builders.push(markup_builder(BackendKind::Markdown));
    }

    fs::create_dir_all(&args.out)?;
    for mut builder in builders {
        for document in builder.build(&input)? {
            let extension = match document.backend {
                BackendKind::Latex => "tex",
                BackendKind::Html => "html",
                BackendKind::Markdown => "md",
            };
            let path = args.out.join(format!("cv.{}", extension));
            fs::write(&path, &document.content)?;
            println!("✓ Wrote {} ({} bytes)", path.display(), document.content.len());
        }
    }

    println!("\nSuccess!");
    Ok(())
}
