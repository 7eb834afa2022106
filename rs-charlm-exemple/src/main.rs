use std::path::PathBuf;

use clap::Parser;
use rs_charlm_core::model::{ContextModel, ModelConfig};

#[derive(Parser, Debug)]
#[command(
    name = "rs-charlm-exemple",
    about = "Train a character model on a text file and generate from it"
)]
struct Args {
    /// Text file to learn from
    #[arg(long)]
    corpus: PathBuf,

    /// Number of characters in a context window
    #[arg(long, default_value_t = 2)]
    window_length: usize,

    /// Seed for reproducible generation (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Text to start from (its first window_length characters seed the walk)
    #[arg(long)]
    initial_text: String,

    /// Number of characters to generate
    #[arg(long, default_value_t = 100)]
    length: usize,

    /// Print the learned table before generating
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Window length is validated here, before any I/O
    let mut config = ModelConfig::new(args.window_length)?;
    config.set_seed(args.seed);

    let mut model = ContextModel::new(config)?;

    // Reads the whole file, line breaks included
    model.train_file(&args.corpus)?;

    if args.dump {
        print!("{}", model);
    }

    // May be shorter than requested if the walk reaches an unseen window
    let text = model.generate(&args.initial_text, args.length)?;
    println!("{}", text);

    Ok(())
}
