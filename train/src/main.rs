use std::fs::File;
use std::io::{prelude::*, stderr, BufReader};
use std::path::PathBuf;

use clap::Parser;
use sentimento::{corpus, EventModel, StopWords, Tokenizer, Trainer};

#[derive(Parser, Debug)]
#[command(about = "A program to train sentiment models of Sentimento.")]
struct Args {
    /// A labeled training corpus. Each line is a rating and a review separated by a tab
    #[arg(long, required = true)]
    data: Vec<PathBuf>,

    /// A stop-word list, one word per line
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// The event model: {multinomial, bernoulli}
    #[arg(long, default_value = "multinomial")]
    event_model: EventModel,

    /// The file to write the trained model to
    #[arg(long)]
    model: PathBuf,

    /// The number of workers for zstd (0 means multithreaded will be disabled)
    #[arg(long, default_value = "0")]
    zstd_workers: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let stop_words = match args.stop_words {
        Some(path) => {
            eprintln!("Loading {path:?} ...");
            StopWords::from_reader(BufReader::new(File::open(path)?))?
        }
        None => StopWords::new(),
    };
    eprintln!("# of stop-words: {}", stop_words.len());
    let tokenizer = Tokenizer::new(stop_words);

    let mut trainer = Trainer::new(args.event_model);
    let mut n_skipped = 0;
    for path in args.data {
        eprintln!("Loading {path:?} ...");
        let f = BufReader::new(File::open(path)?);
        for line in f.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match corpus::parse_line(&line)? {
                Some(doc) => {
                    trainer.push_document(&tokenizer.tokenize(&doc.text), doc.class);
                    let n_documents = trainer.n_documents();
                    if n_documents % 10000 == 0 {
                        eprint!("# of documents: {n_documents}\r");
                        stderr().flush()?;
                    }
                }
                None => n_skipped += 1,
            }
        }
        eprintln!("# of documents: {}", trainer.n_documents());
    }
    eprintln!("# of neutral reviews skipped: {n_skipped}");
    eprintln!("# of terms: {}", trainer.n_terms());

    eprintln!("Start training...");
    let model = trainer.train()?;
    eprintln!("Finish training.");

    let mut f = zstd::Encoder::new(File::create(args.model)?, 19)?;
    f.multithread(args.zstd_workers)?;
    model.write(&mut f)?;
    f.finish()?;

    Ok(())
}
