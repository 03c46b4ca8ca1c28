use std::{process::exit, time::Instant};

use clap::{Parser as ClapParser, ValueEnum};

use powerset::{format::to_table_string, parse_file, CompositeNaming, Conversion, Error, Options};

/// Loads a finite automaton from a transition table and checks which words it accepts
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
struct Args {
    /// Convert the automaton before checking the words
    #[arg(short, long, value_enum)]
    convert: Option<ConversionArg>,

    /// How composite states are identified during conversion
    #[arg(long, value_enum, default_value_t = NamingArg::Positional)]
    naming: NamingArg,

    /// The maximum number of states a conversion pass may create
    #[arg(long)]
    max_states: Option<usize>,

    /// Read comma-separated destinations in transition records as a single state name
    #[arg(long)]
    no_split_destinations: bool,

    /// Print the (converted) automaton
    #[arg(short, long, value_enum)]
    print: Option<PrintArg>,

    /// Check words by exploring all paths instead of following the first matching transition
    #[arg(long)]
    any_path: bool,

    /// The file containing the transition table
    file: String,

    /// The words to check, each character is read as one symbol
    words: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ConversionArg {
    Dfa,
    Nfa,
    MinDfa,
    MinNfa,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum NamingArg {
    Positional,
    Set,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum PrintArg {
    /// One line per state with its outgoing transitions
    Visual,
    /// The transition table format
    Table,
    /// The internal representation
    Debug,
}

/// The main function. Parses the command line arguments, loads the automaton, and checks the words.
fn main() {
    env_logger::init();
    let ts = Instant::now();
    let cli = Args::parse();

    if let Err(err) = run(&cli) {
        log::error!("Error: {}", err);
        exit(1);
    }

    log::info!("Done ({}ms).", ts.elapsed().as_millis());
}

fn run(cli: &Args) -> Result<(), Error> {
    let opts = convert_options(cli);
    let mut automaton = parse_file(&cli.file, &opts)?;
    log::info!(
        "Loaded {} ({} states, {} transitions)",
        cli.file,
        automaton.num_states(),
        automaton.num_transitions()
    );

    if let Some(conversion) = cli.convert.map(convert_conversion) {
        automaton = conversion.apply(&automaton, &opts)?;
        log::info!(
            "Converted to {} ({} states)",
            conversion,
            automaton.num_states()
        );
    }

    match cli.print {
        Some(PrintArg::Visual) => print!("{}", automaton),
        Some(PrintArg::Table) => print!("{}", to_table_string(&automaton)),
        Some(PrintArg::Debug) => println!("{:#?}", automaton),
        None => (),
    }

    for word in &cli.words {
        let accepted = if cli.any_path {
            automaton.accepts_any_path(word.chars())
        } else {
            automaton.accepts_str(word)
        };
        println!(
            "{}: {}",
            word,
            if accepted { "accepted" } else { "rejected" }
        );
    }
    Ok(())
}

fn convert_options(options: &Args) -> Options {
    let mut opts = Options::default();
    opts.naming = match options.naming {
        NamingArg::Positional => CompositeNaming::Positional,
        NamingArg::Set => CompositeNaming::StateSet,
    };
    if let Some(max) = options.max_states {
        opts.set_max_states(max);
    }
    if options.no_split_destinations {
        opts.split_destinations = false;
    }
    opts
}

fn convert_conversion(conversion: ConversionArg) -> Conversion {
    match conversion {
        ConversionArg::Dfa => Conversion::Deterministic,
        ConversionArg::Nfa => Conversion::Nondeterministic,
        ConversionArg::MinDfa => Conversion::MinimizedDeterministic,
        ConversionArg::MinNfa => Conversion::MinimizedNondeterministic,
    }
}
