use vagago::{init_logger, LEVEL_SYNONYMS};

fn main() {
    init_logger(log::LevelFilter::Info);
    for (level, synonyms) in &LEVEL_SYNONYMS {
        println!("{:8} {}", level.key(), synonyms.join(", "));
    }
}
