use std::error::Error;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, prelude::*, stderr, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use clap::Parser;
use sentimento::corpus::{self, LabeledDocument};
use sentimento::pipeline::{self, CategoryOutcome};
use sentimento::{EventModel, StopWords, Tokenizer};

const MODEL_FILE: &str = "model.bin.zst";
const LABELS_FILE: &str = "labels.txt";
const STATS_FILE: &str = "stats.txt";
const OUTPUT_FILES: [&str; 3] = [MODEL_FILE, LABELS_FILE, STATS_FILE];

#[derive(Parser, Debug)]
#[command(
    about = "A program to train and evaluate a model for each category of reviews.",
    long_about = "A program to train and evaluate a model for each category of reviews.\n\
                  Each sub-directory of DATA_DIR is a category containing train.tsv and test.tsv. \
                  model.bin.zst, labels.txt, and stats.txt are written to the category directory."
)]
struct Args {
    /// The directory containing category directories
    #[arg(long)]
    data_dir: PathBuf,

    /// A stop-word list, one word per line
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// The event model: {multinomial, bernoulli}
    #[arg(long, default_value = "multinomial")]
    event_model: EventModel,

    /// The number of workers for zstd (0 means multithreaded will be disabled)
    #[arg(long, default_value = "0")]
    zstd_workers: u32,
}

fn load_corpus(path: &Path) -> Result<Vec<LabeledDocument>, Box<dyn Error>> {
    eprintln!("Loading {path:?} ...");
    let f = BufReader::new(File::open(path)?);
    let mut documents = vec![];
    for line in f.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(doc) = corpus::parse_line(&line)? {
            documents.push(doc);
            if documents.len() % 10000 == 0 {
                eprint!("# of documents: {}\r", documents.len());
                stderr().flush()?;
            }
        }
    }
    eprintln!("# of documents: {}", documents.len());
    Ok(documents)
}

/// Path an output file is written to before it is renamed into place.
fn tmp_path(path: &Path) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(".tmp");
    PathBuf::from(s)
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Removes outputs of a previous run and unfinished temporary files.
fn remove_outputs(dir: &Path) -> io::Result<()> {
    for name in OUTPUT_FILES {
        let path = dir.join(name);
        remove_if_exists(&tmp_path(&path))?;
        remove_if_exists(&path)?;
    }
    Ok(())
}

fn write_outputs(
    dir: &Path,
    outcome: &CategoryOutcome,
    zstd_workers: u32,
) -> Result<(), Box<dyn Error>> {
    let mut f = zstd::Encoder::new(File::create(tmp_path(&dir.join(MODEL_FILE)))?, 19)?;
    f.multithread(zstd_workers)?;
    outcome.model.write(&mut f)?;
    f.finish()?.sync_all()?;

    let mut wtr = BufWriter::new(File::create(tmp_path(&dir.join(LABELS_FILE)))?);
    outcome.report.write_labels(&mut wtr)?;
    wtr.flush()?;

    let mut wtr = BufWriter::new(File::create(tmp_path(&dir.join(STATS_FILE)))?);
    writeln!(wtr, "{}", outcome.report)?;
    wtr.flush()?;

    // All files are complete. Replace the previous outputs.
    for name in OUTPUT_FILES {
        let path = dir.join(name);
        fs::rename(tmp_path(&path), path)?;
    }
    Ok(())
}

fn run_category(
    dir: &Path,
    tokenizer: &Tokenizer,
    event_model: EventModel,
    zstd_workers: u32,
) -> Result<CategoryOutcome, Box<dyn Error>> {
    let train_documents = load_corpus(&dir.join("train.tsv"))?;
    let test_documents = load_corpus(&dir.join("test.tsv"))?;

    eprintln!("Start training and testing...");
    let outcome =
        pipeline::run_category(&train_documents, &test_documents, tokenizer, event_model)?;
    write_outputs(dir, &outcome, zstd_workers)?;
    Ok(outcome)
}

/// Runs a category. On failure, no output of the category is left in `dir`.
fn process_category(
    dir: &Path,
    tokenizer: &Tokenizer,
    event_model: EventModel,
    zstd_workers: u32,
) -> Result<CategoryOutcome, Box<dyn Error>> {
    run_category(dir, tokenizer, event_model, zstd_workers).map_err(|e| {
        if let Err(cleanup) = remove_outputs(dir) {
            eprintln!("Failed to remove outputs in {dir:?}: {cleanup}");
        }
        e
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let stop_words = match &args.stop_words {
        Some(path) => {
            eprintln!("Loading {path:?} ...");
            StopWords::from_reader(BufReader::new(File::open(path)?))?
        }
        None => StopWords::new(),
    };
    eprintln!("# of stop-words: {}", stop_words.len());
    let tokenizer = Tokenizer::new(stop_words);

    let mut categories = vec![];
    for entry in fs::read_dir(&args.data_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            categories.push(path);
        }
    }
    categories.sort();

    let mut n_failed = 0;
    for dir in &categories {
        eprintln!("Category {dir:?}");
        match process_category(dir, &tokenizer, args.event_model, args.zstd_workers) {
            Ok(outcome) => {
                let cm = outcome.report.confusion_matrix();
                let accuracy = cm
                    .accuracy()
                    .map_or_else(|| "undefined".to_string(), |a| a.to_string());
                println!("{}\t{}\t{}", dir.display(), cm.total(), accuracy);
            }
            Err(e) => {
                eprintln!("Failed {dir:?}: {e}");
                n_failed += 1;
            }
        }
    }
    eprintln!(
        "# of categories: {}, # of failures: {n_failed}",
        categories.len()
    );

    Ok(())
}
