use std::path::PathBuf;

use clap::Parser;
use vagago::{init_logger, Board, Config, Filters};

/// List job postings, optionally filtered by skill and level.
#[derive(Parser)]
struct Args {
    /// Only show jobs whose skills contain this text.
    #[arg(long, default_value = "")]
    skills: String,
    /// Only show jobs at this level (Junior, Mid or Senior).
    #[arg(long, default_value = "")]
    level: String,
    /// Read jobs from the mock file instead of the API.
    #[arg(long)]
    mock: bool,
    #[arg(long, default_value = Config::FILE_PATH)]
    config: PathBuf,
    /// Show every field of the job with this ID.
    #[arg(long)]
    details: Option<u64>,
}

fn main() {
    init_logger(log::LevelFilter::Info);
    let args = Args::parse();

    let mut board = Board::new();
    board.load_config(&args.config);
    if args.mock {
        board.set_use_mock_data(true);
    } else {
        board.refresh();
    }

    if let Some(id) = args.details {
        board.show_job(id);
        return;
    }
    board.filters = Filters::new(args.skills, args.level);
    board.list_jobs();
}
