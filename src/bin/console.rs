//! Line-oriented console over a mixed graph.
//!
//! Reads one command per line from stdin and reports what the graph did:
//!
//! ```text
//! node add <value>            node rm <value>
//! edge add <a> <b> [--directed] [--weight <w>]
//! edge rm <a> <b> [--directed] [--weight <w>]
//! dump | clear | help | quit
//! ```
//!
//! Node values may contain spaces; quote them (`"New York"` or `'New York'`)
//! when they appear as edge endpoints.
//!
//! Options: `--weighted` builds a weighted graph, `--json` prints the render
//! snapshot after every mutation.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use mixgraph::{EdgeInsertion, Graph, GraphSnapshot, NodeId, WeightedGraph};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug, Default, Clone, Copy)]
#[command(
    name = "mixgraph-console",
    about = "Edit a mixed directed/undirected graph one command per line"
)]
struct Options {
    /// Build a weighted graph; edge commands then need --weight
    #[arg(long, default_value_t = false)]
    weighted: bool,

    /// Print the graph snapshot as JSON after every change
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// One console line.
#[derive(Parser, Debug)]
#[command(name = "console", no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Subcommand, Debug)]
enum LineCommand {
    /// Insert or remove a node
    Node {
        #[command(subcommand)]
        action: NodeAction,
    },
    /// Insert or remove an edge
    Edge {
        #[command(subcommand)]
        action: EdgeAction,
    },
    /// Print every node with its edges
    Dump,
    /// Remove every node and edge
    Clear,
}

#[derive(Subcommand, Debug)]
enum NodeAction {
    /// Insert a node
    Add { value: Vec<String> },
    /// Remove a node and its edges
    Rm { value: Vec<String> },
}

#[derive(Subcommand, Debug)]
enum EdgeAction {
    /// Insert an edge, or turn a reversed directed edge into an undirected one
    Add(EdgeArgs),
    /// Remove the edge joining two nodes
    Rm(EdgeArgs),
}

#[derive(Args, Debug)]
struct EdgeArgs {
    /// Tail node value
    tail: Option<String>,

    /// Head node value
    head: Option<String>,

    #[arg(long, default_value_t = false)]
    directed: bool,

    /// Edge weight (weighted graphs only)
    #[arg(long, allow_hyphen_values = true)]
    weight: Option<f64>,
}

impl EdgeArgs {
    fn request(&self) -> std::result::Result<EdgeRequest<'_>, &'static str> {
        let tail = self.tail.as_deref().ok_or("Every edge needs a tail node.")?;
        let head = self.head.as_deref().ok_or("Every edge needs a head node.")?;
        Ok(EdgeRequest {
            tail,
            head,
            directed: self.directed,
            weight: self.weight,
        })
    }
}

enum Store {
    Plain(Graph<String>),
    Weighted(WeightedGraph<String>),
}

/// Validated `edge` arguments.
struct EdgeRequest<'a> {
    tail: &'a str,
    head: &'a str,
    directed: bool,
    weight: Option<f64>,
}

/// What a command produced.
struct Reply {
    message: String,
    changed: bool,
}

impl Reply {
    fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: true,
        }
    }

    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: false,
        }
    }
}

struct Session {
    store: Store,
}

impl Session {
    fn new(options: Options) -> Self {
        let store = if options.weighted {
            Store::Weighted(WeightedGraph::new())
        } else {
            Store::Plain(Graph::new())
        };
        Self { store }
    }

    fn find(&self, value: &str) -> Option<NodeId> {
        let value = value.to_owned();
        match &self.store {
            Store::Plain(g) => g.find_node(&value),
            Store::Weighted(g) => g.find_node(&value),
        }
    }

    fn snapshot(&self) -> GraphSnapshot {
        match &self.store {
            Store::Plain(g) => g.snapshot(),
            Store::Weighted(g) => g.snapshot(),
        }
    }

    fn dump(&self) -> String {
        match &self.store {
            Store::Plain(g) => format!("GRAPH:\n======\n{g}"),
            Store::Weighted(g) => format!("GRAPH:\n======\n{g}"),
        }
    }

    fn execute(&mut self, line: &str) -> Reply {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(message) => return Reply::unchanged(format!("Error reading command. {message}")),
        };
        let Some(first) = words.first() else {
            return Reply::unchanged("");
        };
        if first != "help" && Line::command().find_subcommand(first).is_none() {
            return Reply::unchanged(format!("Unknown command '{first}'. Type 'help'."));
        }

        match Line::try_parse_from(&words) {
            Ok(Line { command }) => self.dispatch(command),
            Err(err) => Reply::unchanged(describe_parse_error(&words, &err)),
        }
    }

    fn dispatch(&mut self, command: LineCommand) -> Reply {
        match command {
            LineCommand::Node { action: NodeAction::Add { value } } => self.add_node(&value.join(" ")),
            LineCommand::Node { action: NodeAction::Rm { value } } => self.remove_node(&value.join(" ")),
            LineCommand::Edge { action: EdgeAction::Add(args) } => match args.request() {
                Ok(request) => self.add_edge(&request),
                Err(message) => Reply::unchanged(format!("Error inserting edge. {message}")),
            },
            LineCommand::Edge { action: EdgeAction::Rm(args) } => match args.request() {
                Ok(request) => self.remove_edge(&request),
                Err(message) => Reply::unchanged(format!("Error removing edge. {message}")),
            },
            LineCommand::Dump => Reply::unchanged(self.dump()),
            LineCommand::Clear => {
                match &mut self.store {
                    Store::Plain(g) => g.clear(),
                    Store::Weighted(g) => g.clear(),
                }
                Reply::changed("Graph cleared.")
            }
        }
    }

    fn add_node(&mut self, value: &str) -> Reply {
        let value = value.trim();
        if value.is_empty() {
            return Reply::unchanged("Error inserting node. Every node needs a value.");
        }
        let inserted = match &mut self.store {
            Store::Plain(g) => g.insert_node(value.to_owned()),
            Store::Weighted(g) => g.insert_node(value.to_owned()),
        };
        match inserted {
            Some(_) => Reply::changed(format!("Node '{value}' inserted.")),
            None => Reply::unchanged(format!("Error inserting node. Node '{value}' already exists.")),
        }
    }

    fn remove_node(&mut self, value: &str) -> Reply {
        let value = value.trim().to_owned();
        if value.is_empty() {
            return Reply::unchanged("Error removing node. A node value is required.");
        }
        let removed = match &mut self.store {
            Store::Plain(g) => g.remove_node_value(&value),
            Store::Weighted(g) => g.remove_node_value(&value),
        };
        if removed {
            Reply::changed(format!("Node '{value}' removed."))
        } else {
            Reply::unchanged(format!("Error removing node. Node '{value}' does not exist."))
        }
    }

    fn resolve(&self, request: &EdgeRequest<'_>, action: &str) -> Result<(NodeId, NodeId), Reply> {
        let tail = self.find(request.tail).ok_or_else(|| {
            Reply::unchanged(format!(
                "Error {action} edge. Tail node '{}' does not exist.",
                request.tail
            ))
        })?;
        let head = self.find(request.head).ok_or_else(|| {
            Reply::unchanged(format!(
                "Error {action} edge. Head node '{}' does not exist.",
                request.head
            ))
        })?;
        if tail == head {
            return Err(Reply::unchanged(format!(
                "Error {action} edge. Tail and head must be different nodes."
            )));
        }
        Ok((tail, head))
    }

    fn add_edge(&mut self, request: &EdgeRequest<'_>) -> Reply {
        let (tail, head) = match self.resolve(request, "inserting") {
            Ok(ends) => ends,
            Err(reply) => return reply,
        };
        let outcome = match &mut self.store {
            Store::Plain(g) => g.insert_edge(tail, head, request.directed),
            Store::Weighted(g) => match parse_weight(request.weight) {
                Some(weight) => g.insert_edge(tail, head, weight, request.directed),
                None => return Reply::unchanged(format!("Error inserting edge. {WEIGHT_REQUIRED}")),
            },
        };

        let (a, b) = (request.tail, request.head);
        match outcome {
            Ok(EdgeInsertion::Inserted(_)) => {
                Reply::changed(format!("Edge between nodes '{a}' and '{b}' inserted."))
            }
            Ok(EdgeInsertion::Downgraded(_)) => Reply::changed(format!(
                "Edge between nodes '{a}' and '{b}' was converted to an undirected edge."
            )),
            Ok(EdgeInsertion::Rejected) => Reply::unchanged(
                "Error inserting edge. The new edge conflicts with existing edges.",
            ),
            Err(err) => Reply::unchanged(format!("Error inserting edge. {err}.")),
        }
    }

    fn remove_edge(&mut self, request: &EdgeRequest<'_>) -> Reply {
        let (tail, head) = match self.resolve(request, "removing") {
            Ok(ends) => ends,
            Err(reply) => return reply,
        };
        let removed = match &mut self.store {
            Store::Plain(g) => g.remove_edge(tail, head, request.directed),
            Store::Weighted(g) => match parse_weight(request.weight) {
                Some(weight) => g.remove_edge(tail, head, weight, request.directed),
                None => return Reply::unchanged(format!("Error removing edge. {WEIGHT_REQUIRED}")),
            },
        };

        let (a, b) = (request.tail, request.head);
        match removed {
            Ok(true) => Reply::changed(format!("Edge between nodes '{a}' and '{b}' removed.")),
            Ok(false) => Reply::unchanged(format!("Error removing edge. No edge joins '{a}' and '{b}'.")),
            Err(err) => Reply::unchanged(format!("Error removing edge. {err}.")),
        }
    }
}

const WEIGHT_REQUIRED: &str = "Weighted edges need a finite, non-negative weight.";

/// Splits a line on whitespace, keeping single- or double-quoted runs together.
fn split_words(line: &str) -> std::result::Result<Vec<String>, &'static str> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote = None;

    for c in line.chars() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => word.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            None => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote.");
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}

/// Turns a clap failure into a one-line reply; help requests pass through.
fn describe_parse_error(words: &[String], err: &clap::Error) -> String {
    let rendered = err.to_string();
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion
    ) {
        return rendered.trim_end().to_owned();
    }

    let detail = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
    let context = match (
        words.first().map(String::as_str),
        words.get(1).map(String::as_str),
    ) {
        (Some("node"), Some("add")) => "Error inserting node.",
        (Some("node"), Some("rm")) => "Error removing node.",
        (Some("edge"), Some("add")) => "Error inserting edge.",
        (Some("edge"), Some("rm")) => "Error removing edge.",
        _ => "Error reading command.",
    };
    format!("{context} {detail}")
}

fn parse_weight(weight: Option<f64>) -> Option<f64> {
    weight.filter(|w| w.is_finite() && *w >= 0.0)
}

fn main() -> Result<()> {
    let options = Options::parse();
    let mut session = Session::new(options);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        let reply = session.execute(&line);
        if !reply.message.is_empty() {
            writeln!(stdout, "{}", reply.message)?;
        }
        if options.json && reply.changed {
            let rendered = serde_json::to_string(&session.snapshot())
                .context("failed to render graph snapshot")?;
            writeln!(stdout, "{rendered}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> String {
        session.execute(line).message
    }

    #[test]
    fn test_node_commands() {
        let mut session = Session::new(Options::default());
        assert_eq!(run(&mut session, "node add  A "), "Node 'A' inserted.");
        assert_eq!(
            run(&mut session, "node add A"),
            "Error inserting node. Node 'A' already exists."
        );
        assert_eq!(
            run(&mut session, "node add"),
            "Error inserting node. Every node needs a value."
        );
        assert_eq!(run(&mut session, "node rm A"), "Node 'A' removed.");
        assert_eq!(
            run(&mut session, "node rm A"),
            "Error removing node. Node 'A' does not exist."
        );
    }

    #[test]
    fn test_edge_protocol_messages() {
        let mut session = Session::new(Options::default());
        run(&mut session, "node add A");
        run(&mut session, "node add B");

        assert_eq!(
            run(&mut session, "edge add A B --directed"),
            "Edge between nodes 'A' and 'B' inserted."
        );
        assert_eq!(
            run(&mut session, "edge add A B --directed"),
            "Error inserting edge. The new edge conflicts with existing edges."
        );
        assert_eq!(
            run(&mut session, "edge add B A --directed"),
            "Edge between nodes 'B' and 'A' was converted to an undirected edge."
        );
        assert_eq!(
            run(&mut session, "edge add A A"),
            "Error inserting edge. Tail and head must be different nodes."
        );
        assert_eq!(
            run(&mut session, "edge add A C"),
            "Error inserting edge. Head node 'C' does not exist."
        );
        assert_eq!(
            run(&mut session, "edge add A"),
            "Error inserting edge. Every edge needs a head node."
        );
        assert_eq!(run(&mut session, "edge rm B A"), "Edge between nodes 'B' and 'A' removed.");
        assert_eq!(
            run(&mut session, "edge rm B A"),
            "Error removing edge. No edge joins 'B' and 'A'."
        );
    }

    #[test]
    fn test_weighted_session() {
        let mut session = Session::new(Options {
            weighted: true,
            json: true,
        });
        run(&mut session, "node add A");
        run(&mut session, "node add B");

        assert_eq!(
            run(&mut session, "edge add A B"),
            format!("Error inserting edge. {WEIGHT_REQUIRED}")
        );
        assert_eq!(
            run(&mut session, "edge add A B --weight -3"),
            format!("Error inserting edge. {WEIGHT_REQUIRED}")
        );
        assert!(session.execute("edge add A B --weight 1.5").changed);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.edges[0].weight, Some(1.5));
        assert!(session.dump().contains("Undirected: A <---> B; Weight: 1.5"));
    }

    #[test]
    fn test_weighted_removal_needs_weight() {
        let mut session = Session::new(Options {
            weighted: true,
            json: false,
        });
        run(&mut session, "node add A");
        run(&mut session, "node add B");
        assert!(session.execute("edge add A B --weight 2").changed);

        assert_eq!(
            run(&mut session, "edge rm A B"),
            format!("Error removing edge. {WEIGHT_REQUIRED}")
        );
        assert_eq!(
            run(&mut session, "edge rm A B --weight -1"),
            format!("Error removing edge. {WEIGHT_REQUIRED}")
        );
        assert_eq!(session.snapshot().edges.len(), 1);

        assert_eq!(
            run(&mut session, "edge rm A B --weight 2"),
            "Edge between nodes 'A' and 'B' removed."
        );
        assert!(session.snapshot().edges.is_empty());
    }

    #[test]
    fn test_multi_word_endpoints() {
        let mut session = Session::new(Options::default());
        assert_eq!(run(&mut session, "node add New York"), "Node 'New York' inserted.");
        run(&mut session, "node add A");

        assert_eq!(
            run(&mut session, "edge add \"New York\" A --directed"),
            "Edge between nodes 'New York' and 'A' inserted."
        );
        assert_eq!(
            run(&mut session, "edge rm 'New York' A"),
            "Edge between nodes 'New York' and 'A' removed."
        );
        assert_eq!(
            run(&mut session, "edge add \"New York A"),
            "Error reading command. Unterminated quote."
        );
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("  edge  add ").unwrap(), vec!["edge", "add"]);
        assert_eq!(
            split_words("edge add \"Los Angeles\" 'San Jose'").unwrap(),
            vec!["edge", "add", "Los Angeles", "San Jose"]
        );
        assert_eq!(split_words("node add \"\"").unwrap(), vec!["node", "add", ""]);
        assert!(split_words("node add 'open").is_err());
    }

    #[test]
    fn test_unknown_input() {
        assert!(Options::try_parse_from(["mixgraph-console", "--verbose"]).is_err());
        let options = Options::try_parse_from(["mixgraph-console", "--weighted", "--json"]).unwrap();
        assert!(options.weighted && options.json);

        let mut session = Session::new(Options::default());
        assert_eq!(run(&mut session, "fly"), "Unknown command 'fly'. Type 'help'.");
        assert!(run(&mut session, "help").contains("edge"));
        assert!(run(&mut session, "edge add A B C").starts_with("Error inserting edge. "));
        assert!(run(&mut session, "edge add A B --weight heavy").starts_with("Error inserting edge. "));
        assert!(!session.execute("dump").changed);
        assert!(session.execute("clear").changed);
    }
}
