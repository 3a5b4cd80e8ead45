use clap::builder::FalseyValueParser;
use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let file_name_help = concat!(
        "Source to parse. Can be:\n\n",
        "1. a path to a file\n",
        "2. a single dash to read from stdin\n\n",
        "When neither this nor --code is given, the built-in ",
        "expression (1+2+(3+4))+5 is parsed.",
    );

    Command::new("descent")
        .version("0.1.0")
        .about("Print the derivation trace of a tiny arithmetic grammar")
        .arg(Arg::new("FILE_NAME").index(1).required(false).help(file_name_help))
        .arg(
            Arg::new("code")
                .short('c')
                .long("code")
                .required(false)
                .num_args(1)
                .conflicts_with("FILE_NAME")
                .help("Use this to parse a short expression"),
        )
        .arg(
            Arg::new("max_depth")
                .short('x')
                .long("max-depth")
                .default_value("256")
                .value_parser(value_parser!(usize))
                .env("DESCENT_MAX_DEPTH")
                .help("Maximum nesting depth (0 = no limit)"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("DESCENT_DEBUG")
                .help("Dump source and tokens to stderr before parsing?"),
        )
        .arg(
            Arg::new("strict")
                .short('s')
                .long("strict")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("DESCENT_STRICT")
                .help("Exit with code 1 when parse errors are reported?"),
        )
}
