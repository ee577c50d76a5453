use std::fs;
use std::path::PathBuf;

use clap::Parser;
use sentimento::{Class, Model};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "A program to inspect trained models.")]
struct Args {
    /// Input path of the model file
    #[arg(long)]
    model_in: PathBuf,

    /// Output the vocabulary and the probability table as CSV.
    #[arg(long)]
    dump_vocab: Option<PathBuf>,
}

#[derive(Serialize)]
struct VocabularyRecordFlatten<'a> {
    term: &'a str,
    id: usize,
    count_1: u64,
    count_2: u64,
    count_4: u64,
    count_5: u64,
    prob_1: f64,
    prob_2: f64,
    prob_4: f64,
    prob_5: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(fs::File::open(args.model_in)?)?;
    let model = Model::read(&mut f)?;

    println!("Event model: {}", model.event_model());
    println!("# of terms: {}", model.vocabulary().len());
    println!("# of documents: {}", model.n_documents());
    for class in Class::ALL {
        let stats = model.class_statistics(class);
        println!(
            "Rating {class}: {} documents, prior {}",
            stats.document_count(),
            stats.prior()
        );
    }

    if let Some(path) = args.dump_vocab {
        eprintln!("Saving vocabulary file...");
        let file = fs::File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        let probs = model.probabilities();
        for (id, entry) in model.vocabulary().iter_sorted() {
            let counts = entry.counts();
            let row = probs.row(id);
            wtr.serialize(VocabularyRecordFlatten {
                term: entry.term(),
                id,
                count_1: counts[Class::VeryNegative.index()],
                count_2: counts[Class::Negative.index()],
                count_4: counts[Class::Positive.index()],
                count_5: counts[Class::VeryPositive.index()],
                prob_1: row[Class::VeryNegative.index()],
                prob_2: row[Class::Negative.index()],
                prob_4: row[Class::Positive.index()],
                prob_5: row[Class::VeryPositive.index()],
            })?;
        }
        wtr.flush()?;
    }

    Ok(())
}
