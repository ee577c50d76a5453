use std::fs::File;
use std::io::{prelude::*, stdin, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use sentimento::{Classifier, Model, StopWords, Tokenizer};

#[derive(Parser, Debug)]
#[command(about = "A program to predict ratings of reviews.")]
struct Args {
    /// The model file to use when classifying reviews
    #[arg(long)]
    model: PathBuf,

    /// A stop-word list, one word per line. Use the same list as training
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Print class scores after each rating
    #[arg(long)]
    scores: bool,
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
    eprintln!(
        "Event model: {}, # of terms: {}",
        model.event_model(),
        model.vocabulary().len()
    );
    let classifier = Classifier::new(model);

    eprintln!("Start classification");
    let mut n_documents = 0;
    let start = Instant::now();
    for line in stdin().lock().lines() {
        let line = line?;
        let stems = tokenizer.tokenize(&line);
        let class = classifier.classify(&stems);
        if args.scores {
            let scores = classifier.scores(&stems);
            let scores: Vec<_> = scores.iter().map(|s| s.to_string()).collect();
            println!("{}\t{}", class, scores.join("\t"));
        } else {
            println!("{}", class);
        }
        n_documents += 1;
    }
    let duration = start.elapsed();
    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());
    eprintln!(
        "Speed: {} [documents/sec]",
        n_documents as f64 / duration.as_secs_f64()
    );

    Ok(())
}
