use clap::{
    builder, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, Command,
};

const SCALE_OPTIONS: &[&str] = &["linear", "sqrt"];
const DEFAULT_FROM: &str = "#00ff00";
const DEFAULT_TO: &str = "#ff0000";

pub fn build_cli() -> Command {
    let value_arg_help =
        "Values to map onto the gradient. Any real number is accepted, values outside of \
         the range are extrapolated and the resulting channels clamped. If no value \
         argument is specified, values will be read from standard input (one per line).";
    let value_arg = Arg::new("value")
        .help(value_arg_help)
        .value_name("VALUE")
        .action(ArgAction::Append)
        .num_args(0..)
        .allow_negative_numbers(true);

    let from_arg = Arg::new("from")
        .long("from")
        .short('f')
        .value_name("COLOR")
        .help("Color for the lower bound of the range, as '#RRGGBB'")
        .default_value(DEFAULT_FROM);

    let to_arg = Arg::new("to")
        .long("to")
        .short('t')
        .value_name("COLOR")
        .help("Color for the upper bound of the range, as '#RRGGBB'")
        .default_value(DEFAULT_TO);

    let lower_arg = Arg::new("lower")
        .long("lower")
        .short('l')
        .value_name("NUMBER")
        .help("Lower bound of the range")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .default_value("0");

    let upper_arg = Arg::new("upper")
        .long("upper")
        .short('u')
        .value_name("NUMBER")
        .help("Upper bound of the range")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .default_value("1");

    let scale_arg = Arg::new("scale")
        .long("scale")
        .short('s')
        .value_name("CURVE")
        .help("Response curve applied to the position within the range")
        .value_parser(builder::PossibleValuesParser::new(SCALE_OPTIONS))
        .ignore_case(true)
        .default_value("linear");

    let band_arg = Arg::new("band")
        .long("band")
        .short('b')
        .value_names(["START", "END"])
        .num_args(2)
        .help("Only use the part of the gradient between START and END [both between 0.0 and 1.0]")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true);

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .color(clap::ColorChoice::Auto)
        .dont_collapse_args_in_usage(true)
        .max_term_width(100)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("mix")
                .alias("interpolate")
                .about("Map values within a range onto a color between two colors")
                .long_about(color_print::cstr!(
                    "Compute the position of each value within the range [LOWER, UPPER) and \
                     mix the two colors accordingly. Channels are rounded up.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>hexmix mix --lower 48000 --upper 524000 67900 220000 524000</>\
                     \n  <cyan,bold>hexmix mix -f '#000000' -t '#ffffff' 0.25 0.5 0.75</>"
                ))
                .arg(from_arg.clone())
                .arg(to_arg.clone())
                .arg(lower_arg.clone())
                .arg(upper_arg.clone())
                .arg(scale_arg.clone())
                .arg(band_arg.clone())
                .arg(value_arg.clone()),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print the position of values within a range")
                .long_about(
                    "Print (VALUE - LOWER) / (UPPER - LOWER) for each value. The result is \
                     not clamped, values outside of the range give positions below 0 or above 1.",
                )
                .arg(lower_arg.clone())
                .arg(upper_arg.clone())
                .arg(value_arg.clone()),
        )
        .subcommand(
            Command::new("gradient")
                .about("Generate an interpolating sequence of colors")
                .long_about(color_print::cstr!(
                    "Generate a sequence of colors at evenly spaced positions between two colors.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>hexmix gradient -n 5</>\
                     \n  <cyan,bold>hexmix gradient --scale sqrt --band 0.2 0.8 -f '#00ff00' -t '#ff0000'</>"
                ))
                .arg(
                    Arg::new("number")
                        .long("number")
                        .short('n')
                        .help("Number of colors to generate")
                        .value_parser(value_parser!(usize))
                        .default_value("10")
                        .value_name("COUNT"),
                )
                .arg(from_arg.clone())
                .arg(to_arg.clone())
                .arg(scale_arg.clone())
                .arg(band_arg.clone()),
        )
        .subcommand(
            Command::new("format")
                .about("Encode red, green and blue channel values as a hex color")
                .long_about(color_print::cstr!(
                    "Encode the given channels as '#rrggbb'. Every channel must be an \
                     integer between 0 and 255.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>hexmix format 128 128 0</>"
                ))
                .arg(
                    Arg::new("channels")
                        .value_names(["RED", "GREEN", "BLUE"])
                        .help("Channel values [between 0 and 255]")
                        .num_args(3)
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("channels")
                .about("Decode hex colors into their red, green and blue channels")
                .arg(
                    Arg::new("color")
                        .value_name("COLOR")
                        .help("Colors of the form '#RRGGBB'")
                        .action(ArgAction::Append)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("preset")
                .about("Color values with one of the built-in flow gradients")
                .long_about(color_print::cstr!(
                    "Color values with a built-in gradient from green to red:\
                     \n  points:  total flow through a location, linear over [48000, 524000)\
                     \n  lines:   flow between two locations, square root curve over \
                     [4000, 253000), using 20% to 80% of the gradient\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>hexmix preset lines 4000 33900 253000</>"
                ))
                .arg(
                    Arg::new("name")
                        .value_name("PRESET")
                        .help("Name of the preset")
                        .value_parser(["points", "lines"])
                        .required(true),
                )
                .arg(value_arg.clone()),
        )
        .arg(
            Arg::new("color-mode")
                .long("color-mode")
                .short('m')
                .value_name("MODE")
                .help("Paint each color on its own background: always, never, *auto*")
                .value_parser(["always", "never", "auto"])
                .default_value(if output_vt100::try_init().is_ok() {"auto"} else {"never"})
                .hide_possible_values(true)
                .hide_default_value(true)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more details to stderr (-v: traced calls, -vv: everything)")
        )
}

#[test]
fn verify_cmd() {
    build_cli().debug_assert();
}
