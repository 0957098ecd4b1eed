use std::error::Error;

use log::info;
use random_bst::random::{random_tree, TREE_SIZE};
use random_bst::stats::Stats;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let tree = random_tree(&mut rand::thread_rng(), TREE_SIZE);
    let stats = Stats::of(&tree)?;
    info!(
        "{} keys, {} leaves, lg(n) = {:.3}",
        TREE_SIZE,
        stats.leaf_count,
        (TREE_SIZE as f64).log2()
    );

    println!("{}", stats);
    Ok(())
}
