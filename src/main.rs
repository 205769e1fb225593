//! Word Forge - word combination generator
//!
//! Reads words from arguments, a file, stdin or an interactive prompt and
//! prints every combination for the selected mode.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use word_forge::{
    combine::generate_combinations_with_rng,
    config::{parse_positive, ForgeConfig, ModeOverrides},
    export::{self, ExportFormat},
    history::{HistoryEntry, SessionHistory},
    logging::init_logging,
    tokenize, CombinationMode, GenerationOptions, Result, WordForgeError,
};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    words: Vec<String>,
    overrides: ModeOverrides,
    shuffle: bool,
    seed: Option<u64>,
    limit: Option<usize>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: ExportFormat,
    history: Option<PathBuf>,
    quiet: bool,
    help: bool,
    version: bool,
}

fn main() {
    // Initialize the library
    if let Err(e) = word_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => fail(&e),
    };

    if cli.help {
        print_help();
        return;
    }
    if cli.version {
        println!("word-forge {}", word_forge::VERSION);
        return;
    }

    let config = match ForgeConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    init_logging(&config.log_level);

    if let Err(e) = run(cli, config) {
        fail(&e);
    }
}

/// Report the error and exit
fn fail(err: &WordForgeError) -> ! {
    eprintln!("{}", err.user_message());
    process::exit(exit_code(err));
}

/// 2 for bad input, 1 for everything else
fn exit_code(err: &WordForgeError) -> i32 {
    if err.is_input_error() {
        2
    } else {
        1
    }
}

/// Parse arguments (without the program name)
fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| WordForgeError::cli(format!("{} requires a value", flag)))
        };

        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-m" | "--mode" => cli.overrides.mode = Some(value(arg.as_str())?),
            "-s" | "--separator" => cli.overrides.separator = Some(value(arg.as_str())?),
            "--prefix" => cli.overrides.prefix = Some(value(arg.as_str())?),
            "--suffix" => cli.overrides.suffix = Some(value(arg.as_str())?),
            "--shuffle" => cli.shuffle = true,
            "--seed" => {
                let raw = value(arg.as_str())?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| WordForgeError::cli(format!("--seed must be a number, got '{}'", raw)))?;
                cli.seed = Some(seed);
            }
            "-l" | "--limit" => {
                let raw = value(arg.as_str())?;
                let limit = parse_positive("--limit", &raw).map_err(|_| {
                    WordForgeError::cli(format!("--limit must be a positive integer, got '{}'", raw))
                })?;
                cli.limit = Some(limit);
            }
            "-i" | "--input" => cli.input = Some(PathBuf::from(value(arg.as_str())?)),
            "-o" | "--output" => cli.output = Some(PathBuf::from(value(arg.as_str())?)),
            "-f" | "--format" => cli.format = ExportFormat::parse(&value(arg.as_str())?)?,
            "--history" => cli.history = Some(PathBuf::from(value(arg.as_str())?)),
            "-q" | "--quiet" => cli.quiet = true,
            "--" => {
                cli.words.extend(iter.by_ref().cloned());
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(WordForgeError::cli(format!("Unknown option '{}'", flag)));
            }
            word => cli.words.push(word.to_string()),
        }
    }

    Ok(cli)
}

/// Main word forge workflow
fn run(cli: CliArgs, config: ForgeConfig) -> Result<()> {
    let (raw, mode) = if cli.words.is_empty() && cli.input.is_none() && std::io::stdin().is_terminal() {
        let plan = PromptPlan::new(&cli.overrides, &config)?;
        prompt_interactive(&plan)?
    } else {
        let raw = read_input(&cli)?;
        (raw, config.resolve_mode(&cli.overrides)?)
    };

    let options = GenerationOptions {
        shuffle: cli.shuffle || config.options.shuffle,
        limit: cli.limit.or(config.options.limit),
    };

    let result = match cli.seed {
        Some(seed) => generate_combinations_with_rng(&raw, &mode, &options, &mut StdRng::seed_from_u64(seed))?,
        None => generate_combinations_with_rng(&raw, &mode, &options, &mut rand::thread_rng())?,
    };

    match &cli.output {
        Some(path) => export::write(&result, path, cli.format)?,
        None => print!("{}", export::render(&result, cli.format)?),
    }

    if result.truncated_for_safety {
        eprintln!(
            "⚠️  Too many combinations: output limited to the first {} for performance",
            word_forge::SAFETY_CAP
        );
    }

    if let Some(path) = &cli.history {
        let mut history = SessionHistory::load_or_new(path, config.history_size)?;
        history.record(HistoryEntry::new(&mode, tokenize(&raw).len(), &result));
        history.save(path)?;
    }

    if !cli.quiet {
        eprint!("✅ Generated {} combination(s) [{}]", result.count, mode.name());
        if let Some(path) = &cli.output {
            eprint!(" → {}", path.display());
        }
        eprintln!();
    }

    Ok(())
}

/// Collect raw input from positional words, a file, or stdin
fn read_input(cli: &CliArgs) -> Result<String> {
    match &cli.input {
        Some(path) if path.as_os_str() == "-" => read_stdin(),
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            WordForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        }),
        None if !cli.words.is_empty() => Ok(cli.words.join("\n")),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

/// What the interactive session still has to ask, after flags and config
#[derive(Debug, PartialEq)]
struct PromptPlan {
    /// Fully resolved from flags; no mode questions
    mode: Option<CombinationMode>,
    /// Mode chosen by `-m` whose parameters are still missing
    fixed_name: Option<String>,
    /// Menu cursor when the mode is asked
    start: usize,
    separator: String,
    prefix: String,
    suffix: String,
}

impl PromptPlan {
    fn new(overrides: &ModeOverrides, config: &ForgeConfig) -> Result<Self> {
        let (mode, fixed_name) = match &overrides.mode {
            Some(_) => match config.resolve_mode(overrides) {
                Ok(mode) => (Some(mode), None),
                Err(WordForgeError::MissingModeParameter { mode, .. }) => (None, Some(mode)),
                Err(e) => return Err(e),
            },
            None => (None, None),
        };

        let wanted = overrides.mode.as_deref().unwrap_or(&config.mode_name).to_lowercase();
        let start = CombinationMode::names()
            .iter()
            .position(|n| *n == wanted)
            .unwrap_or(0);

        let pick = |flag: &Option<String>, configured: &Option<String>, fallback: &str| {
            flag.clone()
                .or_else(|| configured.clone())
                .unwrap_or_else(|| fallback.to_string())
        };

        Ok(Self {
            mode,
            fixed_name,
            start,
            separator: pick(&overrides.separator, &config.separator, "-"),
            prefix: pick(&overrides.prefix, &config.prefix, ""),
            suffix: pick(&overrides.suffix, &config.suffix, ""),
        })
    }
}

/// Ask for words, then whatever part of the mode the plan leaves open
fn prompt_interactive(plan: &PromptPlan) -> Result<(String, CombinationMode)> {
    println!("🔤 Word Forge - word combination generator");
    println!("═══════════════════════════════════════════");
    println!();

    let raw = inquire::Text::new("Words:")
        .with_help_message("Separate words with commas")
        .prompt()?;

    if let Some(mode) = &plan.mode {
        println!();
        return Ok((raw, mode.clone()));
    }

    let name = match &plan.fixed_name {
        Some(name) => name.clone(),
        None => inquire::Select::new("Combination mode:", CombinationMode::names())
            .with_starting_cursor(plan.start)
            .prompt()?
            .to_string(),
    };

    let mode = match name.as_str() {
        "separated" => {
            let separator = inquire::Text::new("Separator:")
                .with_default(&plan.separator)
                .prompt()?;
            CombinationMode::from_parts(&name, Some(separator), None, None)?
        }
        "wrapped" => {
            let prefix = inquire::Text::new("Prefix:")
                .with_default(&plan.prefix)
                .prompt()?;
            let suffix = inquire::Text::new("Suffix:")
                .with_default(&plan.suffix)
                .prompt()?;
            CombinationMode::from_parts(&name, None, Some(prefix), Some(suffix))?
        }
        other => CombinationMode::from_parts(other, None, None, None)?,
    };

    println!();
    Ok((raw, mode))
}

/// Print help information
fn print_help() {
    println!("🔤 Word Forge - word combination generator");
    println!("═══════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    word-forge [OPTIONS] [WORDS...]");
    println!();
    println!("OPTIONS:");
    println!("    -m, --mode <MODE>        all | pairs | separated | wrapped (default: all)");
    println!("    -s, --separator <SEP>    Separator for 'separated' mode");
    println!("        --prefix <TEXT>      Prefix for 'wrapped' mode");
    println!("        --suffix <TEXT>      Suffix for 'wrapped' mode");
    println!("        --shuffle            Shuffle before applying the limit");
    println!("        --seed <N>           Seed the shuffle for repeatable output");
    println!("    -l, --limit <N>          Keep at most N combinations");
    println!("    -i, --input <FILE>       Read words from FILE ('-' for stdin)");
    println!("    -o, --output <FILE>      Write results to FILE");
    println!("    -f, --format <FORMAT>    text | json (default: text)");
    println!("        --history <FILE>     Record this run in a JSON history file");
    println!("    -q, --quiet              No summary line");
    println!("    -h, --help               Show this help");
    println!("    -V, --version            Show version");
    println!();
    println!("EXAMPLES:");
    println!("    word-forge red green blue                  # Every combination");
    println!("    word-forge -m pairs \"sun,moon\"             # Ordered pairs");
    println!("    word-forge -m separated -s - big data      # big-data, data-big");
    println!("    word-forge -m wrapped --suffix .com a b    # a.com, b.com");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    WORD_FORGE_MODE, WORD_FORGE_SEPARATOR, WORD_FORGE_PREFIX, WORD_FORGE_SUFFIX");
    println!("    WORD_FORGE_SHUFFLE, WORD_FORGE_LIMIT, WORD_FORGE_HISTORY_SIZE, WORD_FORGE_LOG");
    println!();
    println!("Words are separated by commas or new lines. All-combinations output is");
    println!("capped at {} entries.", word_forge::SAFETY_CAP);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_words_and_flags() {
        let cli = parse_args(&args(&["-m", "separated", "-s", "_", "--shuffle", "-l", "3", "a", "b"])).unwrap();
        assert_eq!(cli.overrides.mode.as_deref(), Some("separated"));
        assert_eq!(cli.overrides.separator.as_deref(), Some("_"));
        assert!(cli.shuffle);
        assert_eq!(cli.limit, Some(3));
        assert_eq!(cli.words, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_double_dash() {
        let cli = parse_args(&args(&["--", "-x", "y"])).unwrap();
        assert_eq!(cli.words, vec!["-x", "y"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--mode"])).is_err());
        assert!(parse_args(&args(&["--limit", "0"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["-f", "csv"])).is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&WordForgeError::EmptyInput), 2);
        assert_eq!(exit_code(&WordForgeError::cli("bad flag")), 2);
        assert_eq!(exit_code(&WordForgeError::io("denied", None)), 1);
        assert_eq!(exit_code(&WordForgeError::config("bad env")), 1);
    }

    #[test]
    fn test_prompt_plan_uses_complete_flags() {
        let cli = parse_args(&args(&["-m", "separated", "-s", "_"])).unwrap();
        let plan = PromptPlan::new(&cli.overrides, &ForgeConfig::default()).unwrap();
        assert_eq!(plan.mode, Some(CombinationMode::Separated { separator: "_".into() }));
        assert_eq!(plan.fixed_name, None);
    }

    #[test]
    fn test_prompt_plan_fixes_mode_missing_parameter() {
        let config = ForgeConfig {
            mode_name: "pairs".into(),
            ..Default::default()
        };
        let cli = parse_args(&args(&["-m", "wrapped", "--prefix", "#"])).unwrap();
        // prefix alone completes wrapped mode
        let plan = PromptPlan::new(&cli.overrides, &config).unwrap();
        assert_eq!(
            plan.mode,
            Some(CombinationMode::Wrapped { prefix: "#".into(), suffix: String::new() })
        );

        let cli = parse_args(&args(&["-m", "separated"])).unwrap();
        let plan = PromptPlan::new(&cli.overrides, &config).unwrap();
        assert_eq!(plan.mode, None);
        assert_eq!(plan.fixed_name.as_deref(), Some("separated"));
        assert_eq!(plan.start, 2);
        assert_eq!(plan.separator, "-");
    }

    #[test]
    fn test_prompt_plan_defaults_from_config_and_flags() {
        let config = ForgeConfig {
            mode_name: "wrapped".into(),
            suffix: Some(".com".into()),
            ..Default::default()
        };
        let cli = parse_args(&args(&["--prefix", "my"])).unwrap();
        let plan = PromptPlan::new(&cli.overrides, &config).unwrap();
        assert_eq!(plan.mode, None);
        assert_eq!(plan.fixed_name, None);
        assert_eq!(plan.start, 3);
        assert_eq!(plan.prefix, "my");
        assert_eq!(plan.suffix, ".com");
    }

    #[test]
    fn test_prompt_plan_rejects_unknown_mode() {
        let cli = parse_args(&args(&["-m", "triples"])).unwrap();
        assert!(PromptPlan::new(&cli.overrides, &ForgeConfig::default()).is_err());
    }

    #[test]
    fn test_read_input_joins_words() {
        let cli = CliArgs {
            words: args(&["a", "b c"]),
            ..Default::default()
        };
        assert_eq!(read_input(&cli).unwrap(), "a\nb c");
    }
}
