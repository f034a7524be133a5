use anyhow::{Context, Result};
use avl_tree::{AvlTree, Node};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "avl", about = "Build an AVL tree from integer keys and inspect it")]
struct Cli {
    /// Log every rotation (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct KeysArg {
    /// Keys inserted in order, comma separated (e.g. 50,25,75).
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    keys: Vec<i64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tree shape, size and height.
    Show(KeysArg),
    /// List keys within a tree-edge distance of a target key.
    Within {
        #[command(flatten)]
        keys: KeysArg,
        /// Target key (must be in the tree).
        #[arg(long, allow_hyphen_values = true)]
        target: i64,
        /// Maximum number of edges from the target.
        #[arg(long, allow_hyphen_values = true)]
        distance: i64,
    },
    /// Remove keys one by one and print the resulting shape.
    Remove {
        #[command(flatten)]
        keys: KeysArg,
        /// Keys to remove, comma separated.
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        remove: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show(KeysArg { keys }) => {
            let tree = build(keys);
            print_tree(&tree);
        }
        Commands::Within {
            keys: KeysArg { keys },
            target,
            distance,
        } => {
            let tree = build(keys);
            println!("{}", render_within(&tree, target, distance)?);
        }
        Commands::Remove {
            keys: KeysArg { keys },
            remove,
        } => {
            let mut tree = build(keys);
            for key in remove {
                tree.remove(&key)
                    .with_context(|| format!("failed to remove {key}"))?;
                info!(key, size = tree.size(), "removed");
            }
            print_tree(&tree);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build(keys: Vec<i64>) -> AvlTree<i64> {
    let requested = keys.len();
    let tree: AvlTree<i64> = keys.into_iter().collect();
    if tree.size() < requested {
        info!(duplicates = requested - tree.size(), "ignored duplicate keys");
    }
    tree
}

/// Keys near `target`, ascending and comma separated.
fn render_within(tree: &AvlTree<i64>, target: i64, distance: i64) -> Result<String> {
    let found = tree
        .elements_within_distance(&target, distance)
        .with_context(|| format!("query around {target} failed"))?;
    let listed: Vec<String> = found.iter().map(|key| key.to_string()).collect();
    Ok(listed.join(","))
}

fn print_tree(tree: &AvlTree<i64>) {
    println!("size: {}  height: {}", tree.size(), tree.height());
    match tree.root() {
        Some(root) => print_node(root, "", ""),
        None => println!("(empty)"),
    }
}

/// Sideways rendering: right subtree above, left subtree below.
fn print_node(node: &Node<i64>, prefix: &str, branch: &str) {
    if let Some(right) = node.right() {
        print_node(right, &format!("{prefix}    "), "/-- ");
    }
    println!(
        "{prefix}{branch}{} (h={}, bf={})",
        node.key(),
        node.height(),
        node.balance_factor()
    );
    if let Some(left) = node.left() {
        print_node(left, &format!("{prefix}    "), "\\-- ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AvlTree<i64> {
        build(vec![50, 25, 75, 13, 37, 70, 80, 12, 15, 40, 85, 10])
    }

    #[test]
    fn test_within_lists_keys_in_order() {
        let tree = sample();
        assert_eq!(render_within(&tree, 37, 3).unwrap(), "12,13,15,25,37,40,50,75");
        assert_eq!(render_within(&tree, 85, 0).unwrap(), "85");
    }

    #[test]
    fn test_within_reports_failed_query() {
        let tree = sample();
        let err = render_within(&tree, 11, 2).unwrap_err();
        assert_eq!(err.to_string(), "query around 11 failed");
        assert_eq!(err.root_cause().to_string(), "key not found in tree");
    }

    #[test]
    fn test_cli_parses_comma_separated_keys() {
        let cli = Cli::try_parse_from([
            "avl", "within", "--keys", "5,-3,8", "--target", "-3", "--distance", "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Within {
                keys: KeysArg { keys },
                target,
                distance,
            } => {
                assert_eq!(keys, vec![5, -3, 8]);
                assert_eq!(target, -3);
                assert_eq!(distance, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
