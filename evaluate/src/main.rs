use std::fs::File;
use std::io::{prelude::*, stdin, BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use sentimento::corpus::{self, LabeledDocument};
use sentimento::pipeline;
use sentimento::{Classifier, Model, StopWords, Tokenizer};

#[derive(Parser, Debug)]
#[command(about = "A program to evaluate the accuracy of Sentimento.")]
struct Args {
    /// The model file to use when classifying reviews
    #[arg(long)]
    model: PathBuf,

    /// A stop-word list, one word per line. Use the same list as training
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Write pairs of actual and predicted ratings to this file
    #[arg(long)]
    labels: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let stop_words = match args.stop_words {
        Some(path) => StopWords::from_reader(BufReader::new(File::open(path)?))?,
        None => StopWords::new(),
    };
    let tokenizer = Tokenizer::new(stop_words);

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(File::open(args.model)?)?;
    let model = Model::read(&mut f)?;
    let classifier = Classifier::new(model);

    eprintln!("Loading test data...");
    let mut documents: Vec<LabeledDocument> = vec![];
    for line in stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(doc) = corpus::parse_line(&line)? {
            documents.push(doc);
        }
    }
    eprintln!("# of documents: {}", documents.len());

    let report = pipeline::test_model(&classifier, &documents, &tokenizer);

    if let Some(path) = args.labels {
        eprintln!("Saving labels...");
        let mut wtr = BufWriter::new(File::create(path)?);
        report.write_labels(&mut wtr)?;
        wtr.flush()?;
    }

    println!("{report}");

    Ok(())
}
