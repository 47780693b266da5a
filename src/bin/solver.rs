use clap::Parser;
use statesearch::search::{
    algorithms::{
        bidirectional_best_first_search, breadth_first_search, depth_first_search,
        depth_limited_search, iterative_deepening_search, path_cost_termination,
        uniform_cost_search, AlgorithmName, SearchOutcome,
    },
    fixtures::{binary_tree, romania_road_map},
    loading::ProblemDefinition,
    path_cost_evaluation, GraphProblem, Node, Verbosity,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve a graph search problem with an uninformed search algorithm.
struct Cli {
    #[arg(
        help = "The initial state to search from",
        id = "INITIAL",
        required_unless_present = "PROBLEM"
    )]
    initial_state: Option<String>,
    #[arg(
        help = "The goal states to search for",
        id = "GOALS",
        required_unless_present = "PROBLEM"
    )]
    goal_states: Vec<String>,
    #[arg(
        help = "A JSON problem definition carrying its own graph, initial \
        state, and goal states. Replaces the built-in map and the positional \
        states.",
        short = 'p',
        long = "problem",
        id = "PROBLEM",
        conflicts_with_all = ["INITIAL", "GOALS", "MAP"]
    )]
    problem: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The built-in map to search",
        short = 'm',
        long = "map",
        id = "MAP",
        default_value_t = BuiltinMap::Romania
    )]
    map: BuiltinMap,
    #[arg(
        value_enum,
        help = "The search algorithm to run",
        short = 'a',
        long = "algorithm",
        id = "ALGORITHM",
        default_value_t = AlgorithmName::UniformCost
    )]
    algorithm: AlgorithmName,
    #[arg(
        help = "The depth limit, only needed for depth-limited search",
        short = 'l',
        long = "limit",
        id = "LIMIT"
    )]
    limit: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
enum BuiltinMap {
    #[clap(help = "The Romanian road map with driving distances.")]
    Romania,
    #[clap(help = "A fifteen-vertex binary tree without edge costs.")]
    BinaryTree,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let problem = match build_problem(&cli) {
        Ok(problem) => problem,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    solve(cli, problem);
}

fn build_problem(cli: &Cli) -> Result<GraphProblem<String>, String> {
    if let Some(path) = &cli.problem {
        let definition = ProblemDefinition::from_path(path)
            .map_err(|error| format!("cannot load {}: {error}", path.display()))?;
        return Ok(definition.into_problem());
    }

    let graph = match cli.map {
        BuiltinMap::Romania => romania_road_map(),
        BuiltinMap::BinaryTree => binary_tree(),
    };
    let initial_state = cli
        .initial_state
        .clone()
        .expect("clap requires the initial state without a problem file");
    Ok(GraphProblem::new(
        graph,
        initial_state,
        cli.goal_states.iter().cloned(),
    ))
}

fn solve(cli: Cli, problem: GraphProblem<String>) {
    info!(algorithm = %cli.algorithm, "starting the solver");

    let result = match cli.algorithm {
        AlgorithmName::UniformCost => uniform_cost_search(&problem),
        AlgorithmName::BreadthFirst => breadth_first_search(&problem),
        AlgorithmName::DepthFirst => depth_first_search(&problem),
        AlgorithmName::DepthLimited => {
            let Some(limit) = cli.limit else {
                eprintln!("depth-limited search needs a --limit");
                std::process::exit(2);
            };
            depth_limited_search(&problem, limit)
        }
        AlgorithmName::IterativeDeepening => iterative_deepening_search(&problem),
        AlgorithmName::Bidirectional => {
            let Some(reversed) = problem.reversed() else {
                eprintln!("bidirectional search needs exactly one goal state");
                std::process::exit(2);
            };
            bidirectional_best_first_search(
                &problem,
                &reversed,
                path_cost_evaluation(),
                path_cost_evaluation(),
                path_cost_termination(),
            )
        }
    };

    match result {
        Ok(SearchOutcome::Found(node)) => report_path(&node),
        Ok(outcome) => {
            info!("no path found");
            println!("No path found: {:?}", outcome);
        }
        Err(error) => {
            eprintln!("the problem is inconsistent: {error}");
            std::process::exit(1);
        }
    }
}

fn report_path(node: &Node<String>) {
    info!("path found");
    info!(path_cost = node.path_cost().into_inner(), depth = node.depth());

    println!("Path found:");
    println!("{}", node.path_states().join(" -> "));
    println!("Path cost: {}", node.path_cost());
    println!("Path depth: {}", node.depth());
}
