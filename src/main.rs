use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pkucourse::{Class, ExamInfo, Result};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Saved results page, `-` to read it from stdin
    #[clap(value_parser, value_name = "FILE")]
    page: PathBuf,

    /// Language of the table headers
    #[clap(short, long, default_value = "zh-CN")]
    lang: String,

    /// Don't split the classroom info into schedules, location and exam
    #[clap(long)]
    no_info: bool,

    /// Show debug logs
    #[clap(short, long)]
    verbose: bool,
}

fn read_page(page: &Path) -> Result<String> {
    if page.as_os_str() == "-" {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        Ok(std::fs::read_to_string(page)?)
    }
}

/// Print a class and everything parsed out of it
fn display(class: &Class) {
    println!("{class}");
    if let Some(course_type) = class.course_type() {
        println!("  类别: {}", course_type.label().unwrap_or("未知"));
    }
    if let Some(credit) = class.credit() {
        println!("  学分: {credit}");
    }
    if !class.teachers.is_empty() {
        println!("  教师: {}", class.teachers.join(", "));
    }
    if let Some(location) = &class.location {
        println!("  地点: {location}");
    }
    for schedule in &class.schedules {
        match (schedule.start_time(), schedule.end_time()) {
            (Some(start), Some(end)) => println!(
                "  时间: {}周 {schedule} ({}-{})",
                schedule.parity().symbol(),
                start.format("%H:%M"),
                end.format("%H:%M")
            ),
            _ => println!("  时间: {}周 {schedule}", schedule.parity().symbol()),
        }
    }
    match &class.exam_info {
        Some(ExamInfo::Mode(mode)) => println!("  考试: {mode}"),
        Some(ExamInfo::Time { time }) => println!("  考试: {time}"),
        None => (),
    }
    if let Some(result) = &class.result {
        println!("  结果: {result}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let classes = read_page(&args.page)
        .and_then(|html| pkucourse::classes_from_html(&html, &args.lang, !args.no_info));

    match classes {
        Ok(classes) => {
            classes.iter().for_each(display);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
