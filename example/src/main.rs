use anyhow::{
    bail,
    Context,
    Result,
};
use clap::Parser;
use tnfa::{
    compiler,
    postfix,
    regex_to_nfa,
    BorrowedPostfix,
};

/// Convert a regular expression into a Thompson NFA
#[derive(Parser, Debug)]
#[command(name = "tnfa")]
struct Args {
    /// Regular expression to convert, e.g. "(a|b)*c" or "[a-z]+"
    #[arg(value_name = "PATTERN")]
    pattern: Option<String>,

    /// Print the Graphviz DOT description of the automaton
    #[arg(long)]
    dot: bool,

    /// Print the postfix form of the pattern
    #[arg(long)]
    postfix: bool,
}

/* converted at compile time */
static DEMO_PATTERN: BorrowedPostfix<'static> = postfix!("[a-c](x|y)*z?");

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let Some(pattern) = args.pattern else {
        log::info!("no pattern given, showing the built in demo pattern");
        let nfa = compiler::postfix_to_nfa(&DEMO_PATTERN)?;
        println!("Postfix: {}", DEMO_PATTERN);
        println!("{}", nfa.listing());
        return Ok(());
    };

    let pattern = pattern.trim();
    if pattern.is_empty() {
        bail!("please enter a regular expression");
    }

    if args.postfix {
        let expanded = compiler::expand_character_classes(pattern)
            .with_context(|| format!("invalid pattern {:?}", pattern))?;
        let postfix = compiler::infix_to_postfix(&expanded)
            .with_context(|| format!("invalid pattern {:?}", pattern))?;
        println!("Postfix: {}", postfix);
    }

    let nfa = regex_to_nfa(pattern).with_context(|| format!("invalid pattern {:?}", pattern))?;
    println!("{}", nfa.listing());

    if args.dot {
        println!();
        print!("{}", nfa.dot());
    }

    Ok(())
}
