use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser, Debug, Clone)]
#[clap(version = "0.1.0")]
/// CLI for echecs, a chess starting-position display utility.
/// Builds the standard board and prints a shading map, a piece map, or both.
pub struct EchecsArgs {
    #[arg(short, long, default_value_t = Mode::Both)]
    /// Which map(s) to print
    pub mode: Mode,

    #[arg(short, long, default_value_t = false)]
    /// Whether to use chess figurines in terminal or letters
    pub pretty: bool,

    #[arg(short, long, default_value_t = false)]
    /// Show the board from the Dark side's perspective
    pub flip: bool,

    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum, Default)]
pub enum Mode {
    Shading,
    Pieces,
    #[default]
    Both,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Shading => "shading",
            Mode::Pieces => "pieces",
            Mode::Both => "both",
        };
        write!(f, "{s}")
    }
}

pub fn parse_args_from<I: IntoIterator<Item = T>, T: Into<String>>(iterator: I) -> EchecsArgs {
    let args: Vec<String> = iterator.into_iter().map(Into::into).collect();
    EchecsArgs::parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_print_both_maps_with_letters() {
        let args = parse_args_from(["echecs"]);
        assert_eq!(args.mode, Mode::Both);
        assert!(!args.pretty);
        assert!(!args.flip);
    }

    #[test]
    fn flags_select_pretty_flipped_piece_map() {
        let args = parse_args_from(["echecs", "-m", "pieces", "--pretty", "--flip"]);
        assert_eq!(args.mode, Mode::Pieces);
        assert!(args.pretty);
        assert!(args.flip);
    }

    #[test]
    fn shading_mode_parses_from_long_flag() {
        let args = parse_args_from(["echecs", "--mode", "shading"]);
        assert_eq!(args.mode, Mode::Shading);
    }
}
