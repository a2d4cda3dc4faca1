use std::path::{Path, PathBuf};

use console::Style;
use refblend_core::job::Composition;
use refblend_core::request::GenerationRequest;
use refblend_core::status::RETRY_TIPS;
use refblend_core::viewer::{ScaleLimits, Size, ViewerSession};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    error: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            error: Style::new().red().bold(),
        }
    }
}

fn on_off(s: &Styles, on: bool) -> String {
    if on {
        s.method.apply_to("on").to_string()
    } else {
        s.disabled.apply_to("off").to_string()
    }
}

pub fn print_request_summary(job: &Composition, request: &GenerationRequest) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Refblend"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    println!("  {}", s.header.apply_to("References"));
    for slot in &job.slots {
        match slot.image {
            Some(ref img) => println!(
                "    {:<12}{}  {} {}  {} {}",
                s.label.apply_to(&slot.label),
                s.value.apply_to(&img.mime_type),
                s.label.apply_to("remove bg"),
                on_off(&s, slot.toggles.remove_background),
                s.label.apply_to("style only"),
                on_off(&s, slot.toggles.use_only_style),
            ),
            None => println!(
                "    {:<12}{}",
                s.label.apply_to(&slot.label),
                s.disabled.apply_to("empty")
            ),
        }
    }
    match job.background.image() {
        Some(img) => println!(
            "    {:<12}{}  {} {}",
            s.label.apply_to("Background"),
            s.value.apply_to(&img.mime_type),
            s.label.apply_to("remove bg"),
            on_off(&s, job.background.toggles().remove_background),
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Background"),
            s.disabled.apply_to("none")
        ),
    }
    println!();

    println!("  {}", s.header.apply_to("Output"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Resolution"),
        s.value.apply_to(request.resolution)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Aspect"),
        s.value.apply_to(request.aspect_ratio)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("References"),
        s.value.apply_to(request.references.len())
    );
    println!();
}

pub fn print_batch_header(backend: &str, count: usize, output: &Path) {
    let s = Styles::new();
    println!("  {}", s.header.apply_to("Generation"));
    println!("    {:<12}{}", s.label.apply_to("Model"), s.method.apply_to(backend));
    println!("    {:<12}{}", s.label.apply_to("Images"), s.value.apply_to(count));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}

pub fn print_failure(message: &str) {
    let s = Styles::new();
    println!();
    println!("  {}", s.error.apply_to(message));
    for tip in RETRY_TIPS {
        println!("    {} {}", s.label.apply_to("-"), tip);
    }
    println!();
}

pub fn print_saved(paths: &[PathBuf]) {
    let s = Styles::new();
    println!();
    for path in paths {
        println!("  {} {}", s.label.apply_to("Saved"), s.path.apply_to(path.display()));
    }
}

pub fn print_fit_header(image: Size, viewport: Size, limits: ScaleLimits) {
    let s = Styles::new();
    println!();
    println!(
        "  {:<10}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!("{}x{}", image.width, image.height))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!("{}x{}", viewport.width, viewport.height))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.3} - {:.3}", limits.min, limits.max))
    );
    println!();
    println!(
        "  {}",
        s.header.apply_to(format!(
            "{:<22}{:>10}{:>10}{:>8}  {:<8}{}",
            "step", "x", "y", "scale", "state", "pannable"
        ))
    );
}

pub fn print_fit_row(label: &str, session: &ViewerSession, changed: bool) {
    let s = Styles::new();
    let t = session.transform();
    let row = format!(
        "{:<22}{:>10.2}{:>10.2}{:>8.3}  {:<8}{}",
        label,
        t.x,
        t.y,
        t.scale,
        session.state().to_string(),
        if session.is_pannable() { "yes" } else { "no" }
    );
    if changed {
        println!("  {}", row);
    } else {
        println!("  {} {}", s.disabled.apply_to(row), s.disabled.apply_to("(no change)"));
    }
}
