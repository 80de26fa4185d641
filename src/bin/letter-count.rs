//! Counts the characters of some text into a tree and prints the counts in traversal order.

use std::error::Error;
use std::io::{self, Read, Write};

use clap::Parser;

use bst_duo::iterative::Iterative;
use bst_duo::letter_count::letter_count;
use bst_duo::recursive::Recursive;
use bst_duo::strategy::{Order, Strategy};
use bst_duo::{Items, Tree, TreeOperations};

#[derive(Parser, Debug)]
#[command(about = "Count letters into a binary search tree")]
struct Flags {
    /// `recursive` or `iterative`
    #[arg(long, short, default_value_t = Strategy::Recursive)]
    strategy: Strategy,

    /// `preorder`, `inorder` or `postorder`
    #[arg(long, short, default_value_t = Order::Inorder)]
    order: Order,

    /// Rebalance the tree before printing it
    #[arg(long, short)]
    balance: bool,

    /// Text to count. Read from stdin when omitted.
    text: Vec<String>,
}

fn run<S: TreeOperations>(flags: &Flags, input: &str, out: &mut impl Write) -> io::Result<()> {
    let mut tree: Tree<char, usize, S> = letter_count(input);
    if flags.balance {
        tree.balance();
    }
    log::info!(
        "{} strategy, {} buckets, height {}",
        flags.strategy,
        tree.len(),
        tree.height()
    );

    let mut items = Items::with_capacity(tree.len());
    tree.traverse(flags.order, &mut items);
    for node in &items {
        writeln!(out, "{:?} {}", node.key(), node.value())?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    let flags = Flags::parse();

    let input = if flags.text.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        flags.text.join(" ")
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match flags.strategy {
        Strategy::Recursive => run::<Recursive>(&flags, &input, &mut out)?,
        Strategy::Iterative => run::<Iterative>(&flags, &input, &mut out)?,
    }
    Ok(())
}
