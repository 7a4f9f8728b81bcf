use std::time::Duration;

use clap::{Args, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use hexominoes::{
    borders::is_simple_polygon,
    generate::generate_cached,
    table::{hexo_records, render_table},
};

mod enumerate;
use enumerate::enumerate;

fn finish_bar(bar: &ProgressBar, duration: Duration, shapes: usize, n: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    if let Some(len) = bar.length() {
        let pos_width = format!("{}", len).len();

        let template = format!(
            "[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}"
        );

        if let Ok(style) = ProgressStyle::with_template(&template) {
            bar.set_style(style.progress_chars("#>-"));
        }
    }

    bar.finish_with_message(format!(
        "Done! Found {shapes} free polyominoes (N = {n}) in {secs}.{micros:06} s"
    ));
}

fn unknown_bar() -> ProgressBar {
    let style = ProgressStyle::with_template("[{elapsed_precise}] [{spinner:10.cyan/blue}] {msg}")
        .map(|style| {
            style.tick_strings(&[
                ">---------",
                "=>--------",
                "<=>-------",
                "-<=>------",
                "--<=>-----",
                "---<=>----",
                "----<=>---",
                "-----<=>--",
                "------<=>-",
                "-------<=>",
                "--------<=",
                "---------<",
                "--------<=",
                "-------<=>",
                "------<=>-",
                "-----<=>--",
                "---<=>----",
                "--<=>-----",
                "-<=>------",
                "<=>-------",
                "=>--------",
            ])
        })
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let bar = ProgressBar::new_spinner().with_style(style);

    bar.enable_steady_tick(Duration::from_millis(66));

    bar
}

pub fn make_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}} remaining: [{{eta_precise}}]");

    if let Ok(style) = ProgressStyle::with_template(&template) {
        bar.set_style(style.progress_chars("#>-"));
    }

    bar
}

#[derive(Clone, Parser)]
#[clap(name = "gen-hexos", about = "Enumerate free polyominoes and emit the hexomino table")]
pub enum Opts {
    /// Count the free polyominoes with a specific amount of cells
    Enumerate(EnumerateOpts),
    /// Print the Rust constant table of all hexominoes and their outlines
    Emit(EmitOpts),
    /// Draw every free polyomino with a specific amount of cells
    Show {
        /// The amount of cells.
        n: usize,
    },
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The N values for which to calculate all free polyominoes.
    #[clap(required = true)]
    pub n: Vec<usize>,

    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,

    /// Don't reuse sizes computed for earlier N values
    #[clap(long, short = 'c')]
    pub no_cache: bool,
}

#[derive(Clone, Args)]
pub struct EmitOpts {
    /// Keep the straight hexomino in the table
    #[clap(long, short = 's')]
    pub include_straight: bool,

    /// Check every hexomino before printing the table
    #[clap(long)]
    pub validate: bool,
}

fn exit(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

pub fn emit(opts: &EmitOpts) {
    let bar = unknown_bar();
    bar.set_message("Building hexomino records...");

    let records = match hexo_records(opts.include_straight) {
        Ok(records) => records,
        Err(e) => {
            bar.abandon();
            exit(&format!("Error: Failed to build hexomino records. Error: {e}."))
        }
    };

    bar.finish_and_clear();

    if opts.validate {
        eprintln!("Validating {} hexominoes", records.len());

        for record in &records {
            let shape = record.shape();

            if !shape.is_canonical() {
                exit(&format!("Error: Found non-canonical hexomino:\n{shape}"));
            }

            if !shape.is_connected() {
                exit(&format!("Error: Found disconnected hexomino:\n{shape}"));
            }

            if !is_simple_polygon(record.borders()) {
                exit(&format!("Error: Found an open outline for:\n{shape}"));
            }
        }
    }

    print!("{}", render_table(&records));
}

fn show(n: usize) {
    let shapes = generate_cached(n);

    for (i, shape) in shapes.iter().enumerate() {
        println!("#{i}");
        println!("{shape}");
        println!();
    }

    println!("Free polyominoes found for N = {n}: {}.", shapes.len());
}

fn main() {
    let opts = Opts::parse();

    match opts {
        Opts::Enumerate(r) => enumerate(&r),
        Opts::Emit(e) => emit(&e),
        Opts::Show { n } => show(n),
    }
}

#[cfg(test)]
mod tests {
    use super::{make_bar, unknown_bar};

    #[test]
    fn unknown_bar_has_no_length() {
        let bar = unknown_bar();

        assert_eq!(bar.length(), None);
        bar.finish_and_clear();
    }

    #[test]
    fn make_bar_has_length() {
        assert_eq!(make_bar(35).length(), Some(35));
    }
}
